//! # Domain Types
//!
//! The records the seeder reads and writes. They map 1:1 onto the host
//! application's tables.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Sale       │   │    Payment      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │◄──│  customer_id    │◄──│  sale_id (FK)   │       │
//! │  │  rut (business) │   │  employee_id    │   │  method         │       │
//! │  │  name, email    │   │  net/tax/total  │   │  amount_cents   │       │
//! │  └─────────────────┘   └────────▲────────┘   └─────────────────┘       │
//! │                                 │                                       │
//! │  ┌─────────────────┐   ┌────────┴────────┐   ┌─────────────────┐       │
//! │  │    Product      │◄──│    SaleItem     │   │    Employee     │       │
//! │  │  prices, stock  │   │  qty, price     │   │  salesperson    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business ID: `rut` for customers, `name` for catalog products

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::FALLBACK_UNIT_PRICE;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so Chilean IVA (19%) is 1900 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer, unique by RUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: String,
    /// Chilean tax ID, e.g. `12345678-9`.
    pub rut: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_company: bool,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Employee
// =============================================================================

/// A staff member; recorded as the salesperson on each sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    /// Retail price in cents.
    pub sale_price_cents: Option<i64>,
    /// Purchase cost in cents.
    pub cost_price_cents: Option<i64>,
    /// Physical stock on hand. `None` when never counted.
    pub stock: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Price charged per unit on a seeded sale.
    ///
    /// The sale price wins; a missing or zero sale price falls back to the
    /// cost price, and when both are missing or zero to
    /// [`FALLBACK_UNIT_PRICE`].
    pub fn unit_price(&self) -> Money {
        self.sale_price_cents
            .filter(|cents| *cents != 0)
            .or(self.cost_price_cents.filter(|cents| *cents != 0))
            .map(Money::from_cents)
            .unwrap_or(FALLBACK_UNIT_PRICE)
    }

    /// True when stock is missing, zero or negative.
    #[inline]
    pub fn needs_restock(&self) -> bool {
        self.stock.map_or(true, |stock| stock <= 0)
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Where a sale was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum SalesChannel {
    /// Counter sale at the point of sale.
    Pos,
    Web,
    Delivery,
}

/// The status of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum SaleStatus {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "pendiente"))]
    #[serde(rename = "pendiente")]
    Pending,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "pagado"))]
    #[serde(rename = "pagado")]
    Paid,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "anulado"))]
    #[serde(rename = "anulado")]
    Voided,
}

/// Tax document issued for the sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Retail receipt.
    Boleta,
    /// Invoice to a company.
    Factura,
}

/// How a payment was tendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum PaymentMethod {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "EFE"))]
    #[serde(rename = "EFE")]
    Cash,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "TAR"))]
    #[serde(rename = "TAR")]
    Card,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "TRA"))]
    #[serde(rename = "TRA")]
    Transfer,
}

impl PaymentMethod {
    /// Every method, in the order the seeder draws from.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Transfer,
    ];

    /// The stored code (`EFE`, `TAR`, `TRA`).
    pub const fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "EFE",
            PaymentMethod::Card => "TAR",
            PaymentMethod::Transfer => "TRA",
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A sale header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: String,
    pub sold_at: DateTime<Utc>,
    pub customer_id: String,
    /// Salesperson; `None` when the store has no employees on record.
    pub employee_id: Option<String>,
    pub channel: SalesChannel,
    pub shipping_address: Option<String>,
    pub shipping_cost_cents: i64,
    pub net_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub status: SaleStatus,
    pub document_type: DocumentType,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the tax-inclusive total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sale Item
// =============================================================================

/// A line item in a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleItem {
    pub id: String,
    pub sale_id: String,
    pub product_id: String,
    pub quantity: i64,
    /// Unit price in cents at time of sale.
    pub unit_price_cents: i64,
    pub discount_cents: i64,
}

impl SaleItem {
    /// Unit price × quantity, before discount.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment towards a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: String,
    pub sale_id: String,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub paid_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sale: Option<i64>, cost: Option<i64>, stock: Option<i64>) -> Product {
        let now = Utc::now();
        Product {
            id: "p-1".to_string(),
            name: "Ciabata".to_string(),
            description: None,
            brand: None,
            sale_price_cents: sale,
            cost_price_cents: cost,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_unit_price_prefers_sale_price() {
        let p = product(Some(500_000), Some(150_000), None);
        assert_eq!(p.unit_price(), Money::from_pesos(5000));
    }

    #[test]
    fn test_unit_price_falls_back_to_cost_then_default() {
        let p = product(Some(0), Some(150_000), None);
        assert_eq!(p.unit_price(), Money::from_pesos(1500));

        let p = product(None, None, None);
        assert_eq!(p.unit_price(), FALLBACK_UNIT_PRICE);

        let p = product(Some(0), Some(0), None);
        assert_eq!(p.unit_price(), FALLBACK_UNIT_PRICE);
    }

    #[test]
    fn test_needs_restock() {
        assert!(product(None, None, None).needs_restock());
        assert!(product(None, None, Some(0)).needs_restock());
        assert!(product(None, None, Some(-4)).needs_restock());
        assert!(!product(None, None, Some(1)).needs_restock());
    }

    #[test]
    fn test_payment_method_codes() {
        let codes: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec!["EFE", "TAR", "TRA"]);
    }

    #[test]
    fn test_sale_item_line_total() {
        let item = SaleItem {
            id: "i-1".to_string(),
            sale_id: "s-1".to_string(),
            product_id: "p-1".to_string(),
            quantity: 3,
            unit_price_cents: 450_000,
            discount_cents: 0,
        };
        assert_eq!(item.line_total(), Money::from_pesos(13_500));
    }
}
