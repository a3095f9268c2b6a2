//! # Money Module
//!
//! Provides the `Money` type and the IVA split used on every seeded sale.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    10000 / 1.19 = 8403.361344537815...                                  │
//! │                                                                         │
//! │  The invoice needs NETO + IVA == TOTAL to the cent. With floats the    │
//! │  two halves are rounded independently and can drift by one cent.      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    total = 1_000_000 cents                                              │
//! │    neto  = round_half_up(1_000_000 × 10000 / 11900) = 840_336          │
//! │    iva   = total − neto                           = 159_664            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use forneria_core::money::{Money, TaxBreakdown};
//! use forneria_core::IVA_RATE;
//!
//! let total = Money::from_pesos(5000).multiply_quantity(2);
//! let split = TaxBreakdown::from_gross(total, IVA_RATE);
//!
//! assert_eq!(split.net.cents(), 840_336);   // $8403.36
//! assert_eq!(split.tax.cents(), 159_664);   // $1596.64
//! assert_eq!(split.net + split.tax, total);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents of a Chilean peso.
///
/// Pesos are normally whole, but the net/IVA split of an invoice is kept
/// with two decimals, so the smallest unit stored is 1/100 of a peso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use forneria_core::money::Money;
    ///
    /// let price = Money::from_cents(650_000); // $6500.00
    /// assert_eq!(price.pesos(), 6500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion (truncated toward zero).
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use forneria_core::money::Money;
    ///
    /// let unit_price = Money::from_pesos(4500);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_pesos(13500));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount as whole pesos with thousands separators,
    /// e.g. `$10,000`. Cents are rounded half to even.
    ///
    /// ## Example
    /// ```rust
    /// use forneria_core::money::Money;
    ///
    /// assert_eq!(Money::from_pesos(1234567).to_whole_pesos_string(), "$1,234,567");
    /// assert_eq!(Money::from_cents(50).to_whole_pesos_string(), "$0");
    /// assert_eq!(Money::from_cents(150).to_whole_pesos_string(), "$2");
    /// ```
    pub fn to_whole_pesos_string(&self) -> String {
        let whole = div_round_half_even(self.0 as i128, 100);
        let digits = whole.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if whole < 0 { "-" } else { "" };
        format!("{}${}", sign, grouped)
    }
}

// =============================================================================
// Tax Breakdown (Neto / IVA / Total)
// =============================================================================

/// A tax-inclusive total split into its net and tax parts.
///
/// ## How the Split Works
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  total ──► net = round_half_up(total / (1 + rate))                  │
/// │        └─► tax = total − net                                        │
/// │                                                                     │
/// │  Only `net` is rounded, so net + tax == total always holds.         │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub net: Money,
    pub tax: Money,
    pub total: Money,
}

impl TaxBreakdown {
    /// Splits a tax-inclusive `total` at the given rate.
    ///
    /// Rounding is half-up (away from zero on ties), at the cent.
    pub fn from_gross(total: Money, rate: TaxRate) -> Self {
        let net_cents = div_round_half_up(
            total.cents() as i128 * 10_000,
            10_000 + rate.bps() as i128,
        );
        let net = Money::from_cents(net_cents as i64);

        TaxBreakdown {
            net,
            tax: total - net,
            total,
        }
    }
}

/// Integer division rounding ties away from zero. `den` must be positive.
fn div_round_half_up(num: i128, den: i128) -> i128 {
    let quotient = num / den;
    let remainder = num % den;
    if remainder.abs() * 2 >= den {
        quotient + num.signum()
    } else {
        quotient
    }
}

/// Integer division rounding ties to the even neighbour. `den` must be positive.
fn div_round_half_even(num: i128, den: i128) -> i128 {
    let quotient = num / den;
    let twice_remainder = (num % den).abs() * 2;
    if twice_remainder > den || (twice_remainder == den && quotient % 2 != 0) {
        quotient + num.signum()
    } else {
        quotient
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with two decimals, e.g. `$8403.36`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
