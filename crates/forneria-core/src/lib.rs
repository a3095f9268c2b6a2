//! # forneria-core: Pure Business Logic for the Forneria Seeder
//!
//! Everything the seeder decides without touching storage: domain records,
//! integer money, the neto/IVA split, fixture data and random sale planning.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  seed-ventas / seed-catalog (binaries)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  forneria-db::seeder  ──► repositories ──► SQLite                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ forneria-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  types   │  │  money   │  │   plan   │  │   fixtures   │   │   │
//! │  │   │ Customer │  │  Money   │  │ SalePlan │  │  CUSTOMERS   │   │   │
//! │  │   │ Sale ... │  │ TaxBreak │  │ dates    │  │  CATALOG     │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **No I/O**: database, environment and stdout belong to `forneria-db`
//! 2. **Integer Money**: all monetary values are cents (i64)
//! 3. **Injected Randomness**: planning takes `&mut impl Rng`
//!
//! ## Example Usage
//!
//! ```rust
//! use forneria_core::money::{Money, TaxBreakdown};
//! use forneria_core::IVA_RATE;
//!
//! let split = TaxBreakdown::from_gross(Money::from_pesos(10_000), IVA_RATE);
//! assert_eq!(split.net.to_string(), "$8403.36");
//! assert_eq!(split.tax.to_string(), "$1596.64");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod money;
pub mod plan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxBreakdown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Chilean value-added tax (IVA), 19%.
pub const IVA_RATE: TaxRate = TaxRate::from_bps(1900);

/// Stock assigned to products that have none.
pub const DEFAULT_STOCK: i64 = 100;

/// Unit price used when a product has neither sale nor cost price.
pub const FALLBACK_UNIT_PRICE: Money = Money::from_pesos(5000);

/// Maximum customers that receive a seeded sale per run.
pub const MAX_SEEDED_SALES: usize = 10;

/// Maximum quantity of a single line item.
pub const MAX_ITEM_QUANTITY: i64 = 999;
