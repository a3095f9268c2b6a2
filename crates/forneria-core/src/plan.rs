//! # Sale Planning
//!
//! Decides what each synthetic sale contains, without touching storage.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  historical_dates(now)  →  [now-20d, now-18d, ..., now-2d]              │
//! │                                                                         │
//! │  plan_sale(products, rng)                                               │
//! │     ├── n     ∈ [2, 4]        lines                                     │
//! │     ├── each: product ∈ catalog (uniform, repeats allowed)              │
//! │     │         qty     ∈ [1, 3]                                          │
//! │     └── total = Σ unit_price × qty  →  TaxBreakdown (neto / IVA)        │
//! │                                                                         │
//! │  pick_payment_method(rng)  →  EFE | TAR | TRA                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The RNG is a parameter so tests can use a seeded `StdRng`.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, TaxBreakdown};
use crate::types::{PaymentMethod, Product};
use crate::validation::validate_quantity;
use crate::IVA_RATE;

/// How many days back the oldest seeded sale is dated.
pub const HISTORY_DAYS_BACK: i64 = 20;

/// Gap in days between consecutive seeded sale dates.
pub const HISTORY_STEP_DAYS: usize = 2;

/// Number of line items drawn per sale.
pub const LINES_PER_SALE: RangeInclusive<usize> = 2..=4;

/// Quantity drawn per line item.
pub const QUANTITY_PER_LINE: RangeInclusive<i64> = 1..=3;

/// Sale dates: every second day, from [`HISTORY_DAYS_BACK`] days ago up to
/// two days ago. The oldest date comes first.
pub fn historical_dates(now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    (1..=HISTORY_DAYS_BACK)
        .rev()
        .step_by(HISTORY_STEP_DAYS)
        .map(|days| now - Duration::days(days))
        .collect()
}

/// One planned line of a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl PlannedLine {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The content of one sale before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalePlan {
    pub lines: Vec<PlannedLine>,
    pub amounts: TaxBreakdown,
}

impl SalePlan {
    /// Builds a plan from lines, deriving the totals.
    pub fn from_lines(lines: Vec<PlannedLine>) -> Self {
        let total: Money = lines.iter().map(PlannedLine::line_total).sum();
        SalePlan {
            lines,
            amounts: TaxBreakdown::from_gross(total, IVA_RATE),
        }
    }

    /// Tax-inclusive total.
    #[inline]
    pub fn total(&self) -> Money {
        self.amounts.total
    }
}

/// Draws the lines of one sale from `products`.
///
/// ## Errors
/// `CoreError::EmptyCatalog` when `products` is empty.
pub fn plan_sale<R: Rng + ?Sized>(products: &[Product], rng: &mut R) -> CoreResult<SalePlan> {
    if products.is_empty() {
        return Err(CoreError::EmptyCatalog);
    }

    let line_count = rng.gen_range(LINES_PER_SALE);
    let mut lines = Vec::with_capacity(line_count);

    for _ in 0..line_count {
        let product = products.choose(rng).ok_or(CoreError::EmptyCatalog)?;
        let quantity = rng.gen_range(QUANTITY_PER_LINE);
        validate_quantity(quantity)?;

        lines.push(PlannedLine {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price: product.unit_price(),
        });
    }

    Ok(SalePlan::from_lines(lines))
}

/// Draws a payment method uniformly.
pub fn pick_payment_method<R: Rng + ?Sized>(rng: &mut R) -> PaymentMethod {
    PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Vec<Product> {
        let now = Utc::now();
        [("Ciabata", Some(500_000)), ("Pan Integral", Some(550_000)), ("Sin Precio", None)]
            .into_iter()
            .enumerate()
            .map(|(i, (name, price))| Product {
                id: format!("p-{}", i),
                name: name.to_string(),
                description: None,
                brand: None,
                sale_price_cents: price,
                cost_price_cents: None,
                stock: Some(10),
                created_at: now,
                updated_at: now,
            })
            .collect()
    }

    #[test]
    fn test_historical_dates() {
        let now = Utc::now();
        let dates = historical_dates(now);

        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], now - Duration::days(20));
        assert_eq!(dates[9], now - Duration::days(2));
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(2));
        }
    }

    #[test]
    fn test_plan_sale_respects_bounds_and_totals() {
        let products = catalog();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let plan = plan_sale(&products, &mut rng).unwrap();

            assert!(LINES_PER_SALE.contains(&plan.lines.len()));
            for line in &plan.lines {
                assert!(QUANTITY_PER_LINE.contains(&line.quantity));
                assert!(products.iter().any(|p| p.id == line.product_id));
            }

            let expected: Money = plan.lines.iter().map(|l| l.line_total()).sum();
            assert_eq!(plan.total(), expected);
            assert_eq!(plan.amounts.net + plan.amounts.tax, plan.total());
        }
    }

    #[test]
    fn test_plan_sale_uses_fallback_price() {
        let products: Vec<Product> = catalog().into_iter().skip(2).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let plan = plan_sale(&products, &mut rng).unwrap();
        for line in &plan.lines {
            assert_eq!(line.unit_price, crate::FALLBACK_UNIT_PRICE);
        }
    }

    #[test]
    fn test_plan_sale_is_reproducible_with_same_seed() {
        let products = catalog();
        let a = plan_sale(&products, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = plan_sale(&products, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_sale_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(plan_sale(&[], &mut rng), Err(CoreError::EmptyCatalog)));
    }

    #[test]
    fn test_single_line_reference_amounts() {
        let plan = SalePlan::from_lines(vec![PlannedLine {
            product_id: "p-0".to_string(),
            product_name: "Ciabata".to_string(),
            quantity: 2,
            unit_price: Money::from_pesos(5000),
        }]);

        assert_eq!(plan.total(), Money::from_pesos(10_000));
        assert_eq!(plan.amounts.net.to_string(), "$8403.36");
        assert_eq!(plan.amounts.tax.to_string(), "$1596.64");
    }

    #[test]
    fn test_pick_payment_method_covers_all_methods() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(pick_payment_method(&mut rng));
        }
        assert_eq!(seen.len(), PaymentMethod::ALL.len());
    }
}
