//! # Sale Repository
//!
//! Database operations for sales, sale items and payments.
//!
//! ## Write Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. insert_sale()   → sales       (header with neto / IVA / total)     │
//! │  2. add_item() × n  → sale_items  (one per planned line)               │
//! │  3. add_payment()   → payments    (full total, single tender)          │
//! │                                                                         │
//! │  Each statement commits on its own. A failure after step 1 leaves a    │
//! │  header without its items or payment.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use forneria_core::{Payment, Sale, SaleItem};

const SELECT_SALE: &str = r#"
    SELECT
        id, sold_at, customer_id, employee_id,
        channel, shipping_address, shipping_cost_cents,
        net_cents, tax_cents, total_cents,
        status, document_type, created_at
    FROM sales
"#;

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Lists every sale, oldest sale date first.
    pub async fn list_all(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(&format!("{SELECT_SALE} ORDER BY sold_at, id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }

    /// Inserts a sale header.
    pub async fn insert_sale(&self, sale: &Sale) -> DbResult<()> {
        debug!(id = %sale.id, customer_id = %sale.customer_id, total = sale.total_cents, "Inserting sale");

        sqlx::query(
            r#"
            INSERT INTO sales (
                id, sold_at, customer_id, employee_id,
                channel, shipping_address, shipping_cost_cents,
                net_cents, tax_cents, total_cents,
                status, document_type, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7,
                ?8, ?9, ?10,
                ?11, ?12, ?13
            )
            "#,
        )
        .bind(&sale.id)
        .bind(sale.sold_at)
        .bind(&sale.customer_id)
        .bind(&sale.employee_id)
        .bind(sale.channel)
        .bind(&sale.shipping_address)
        .bind(sale.shipping_cost_cents)
        .bind(sale.net_cents)
        .bind(sale.tax_cents)
        .bind(sale.total_cents)
        .bind(sale.status)
        .bind(sale.document_type)
        .bind(sale.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Adds a line item to a sale.
    pub async fn add_item(&self, item: &SaleItem) -> DbResult<()> {
        debug!(sale_id = %item.sale_id, product_id = %item.product_id, "Adding sale item");

        sqlx::query(
            r#"
            INSERT INTO sale_items (
                id, sale_id, product_id,
                quantity, unit_price_cents, discount_cents
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&item.id)
        .bind(&item.sale_id)
        .bind(&item.product_id)
        .bind(item.quantity)
        .bind(item.unit_price_cents)
        .bind(item.discount_cents)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets all items for a sale.
    pub async fn get_items(&self, sale_id: &str) -> DbResult<Vec<SaleItem>> {
        let items = sqlx::query_as::<_, SaleItem>(
            r#"
            SELECT id, sale_id, product_id, quantity, unit_price_cents, discount_cents
            FROM sale_items
            WHERE sale_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Records a payment for a sale.
    pub async fn add_payment(&self, payment: &Payment) -> DbResult<()> {
        debug!(sale_id = %payment.sale_id, amount = payment.amount_cents, method = payment.method.code(), "Recording payment");

        sqlx::query(
            r#"
            INSERT INTO payments (id, sale_id, amount_cents, method, paid_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&payment.id)
        .bind(&payment.sale_id)
        .bind(payment.amount_cents)
        .bind(payment.method)
        .bind(payment.paid_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets all payments for a sale.
    pub async fn get_payments(&self, sale_id: &str) -> DbResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, sale_id, amount_cents, method, paid_at
            FROM payments
            WHERE sale_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Counts all sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use forneria_core::fixtures::CUSTOMERS;
    use forneria_core::{
        DocumentType, Payment, PaymentMethod, Product, Sale, SaleItem, SaleStatus, SalesChannel,
    };

    use crate::{Database, DbConfig, DbError};

    async fn setup() -> (Database, String, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (customer, _) = db.customers().get_or_create(&CUSTOMERS[0]).await.unwrap();

        let now = Utc::now();
        db.products()
            .insert(&Product {
                id: "p-1".to_string(),
                name: "Ciabata".to_string(),
                description: None,
                brand: None,
                sale_price_cents: Some(500_000),
                cost_price_cents: None,
                stock: Some(80),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        (db, customer.id, "p-1".to_string())
    }

    fn sale(id: &str, customer_id: &str) -> Sale {
        let now = Utc::now();
        Sale {
            id: id.to_string(),
            sold_at: now,
            customer_id: customer_id.to_string(),
            employee_id: None,
            channel: SalesChannel::Pos,
            shipping_address: None,
            shipping_cost_cents: 0,
            net_cents: 840_336,
            tax_cents: 159_664,
            total_cents: 1_000_000,
            status: SaleStatus::Paid,
            document_type: DocumentType::Boleta,
            created_at: now,
        }
    }

    #[tokio::test]
    async fn test_sale_round_trip_with_items_and_payment() {
        let (db, customer_id, product_id) = setup().await;
        let repo = db.sales();

        repo.insert_sale(&sale("s-1", &customer_id)).await.unwrap();
        repo.add_item(&SaleItem {
            id: "i-1".to_string(),
            sale_id: "s-1".to_string(),
            product_id,
            quantity: 2,
            unit_price_cents: 500_000,
            discount_cents: 0,
        })
        .await
        .unwrap();
        repo.add_payment(&Payment {
            id: "pay-1".to_string(),
            sale_id: "s-1".to_string(),
            amount_cents: 1_000_000,
            method: PaymentMethod::Transfer,
            paid_at: Utc::now(),
        })
        .await
        .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        let stored = &all[0];
        assert_eq!(stored.id, "s-1");
        assert_eq!(stored.status, SaleStatus::Paid);
        assert_eq!(stored.channel, SalesChannel::Pos);
        assert_eq!(stored.document_type, DocumentType::Boleta);
        assert_eq!(stored.employee_id, None);

        let items = repo.get_items("s-1").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].line_total().cents(), stored.total_cents);

        let payments = repo.get_payments("s-1").await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].method, PaymentMethod::Transfer);
        assert_eq!(payments[0].amount_cents, stored.total_cents);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_payment_method_is_stored_as_code() {
        let (db, customer_id, _) = setup().await;
        let repo = db.sales();
        repo.insert_sale(&sale("s-1", &customer_id)).await.unwrap();
        repo.add_payment(&Payment {
            id: "pay-1".to_string(),
            sale_id: "s-1".to_string(),
            amount_cents: 1_000_000,
            method: PaymentMethod::Cash,
            paid_at: Utc::now(),
        })
        .await
        .unwrap();

        let code: String = sqlx::query_scalar("SELECT method FROM payments WHERE id = 'pay-1'")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(code, "EFE");

        let status: String = sqlx::query_scalar("SELECT status FROM sales WHERE id = 's-1'")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(status, "pagado");
    }

    #[tokio::test]
    async fn test_item_for_unknown_sale_is_rejected() {
        let (db, _, product_id) = setup().await;

        let err = db
            .sales()
            .add_item(&SaleItem {
                id: "i-1".to_string(),
                sale_id: "missing".to_string(),
                product_id,
                quantity: 1,
                unit_price_cents: 500_000,
                discount_cents: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_sale_without_payments() {
        let (db, customer_id, _) = setup().await;
        db.sales().insert_sale(&sale("s-1", &customer_id)).await.unwrap();
        assert!(db.sales().get_payments("s-1").await.unwrap().is_empty());
    }
}
