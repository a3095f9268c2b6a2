//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Full catalog load (the seeder samples from every product)
//! - Single-column stock updates
//! - Catalog inserts for `seed-catalog`
//!
//! ## Stock Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  set_stock(id, 100)                                                 │
//! │     UPDATE products SET stock = ?2 WHERE id = ?1                    │
//! │                                                                     │
//! │  Only the stock column is written; prices, names and updated_at    │
//! │  stay exactly as the POS application left them.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use forneria_core::Product;

const SELECT_PRODUCT: &str = r#"
    SELECT
        id, name, description, brand,
        sale_price_cents, cost_price_cents, stock,
        created_at, updated_at
    FROM products
"#;

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Loads every product, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products =
            sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} ORDER BY created_at, id"))
                .fetch_all(&self.pool)
                .await?;

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Gets a product by name, ignoring ASCII case.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "{SELECT_PRODUCT} WHERE lower(name) = lower(?1) ORDER BY created_at LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, description, brand,
                sale_price_cents, cost_price_cents, stock,
                created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7,
                ?8, ?9
            )
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.brand)
        .bind(product.sale_price_cents)
        .bind(product.cost_price_cents)
        .bind(product.stock)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Overwrites the stock of one product. No other column is touched.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn set_stock(&self, id: &str, stock: i64) -> DbResult<()> {
        debug!(id = %id, stock = %stock, "Setting stock");

        let result = sqlx::query("UPDATE products SET stock = ?2 WHERE id = ?1")
            .bind(id)
            .bind(stock)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use forneria_core::Product;

    use crate::{Database, DbConfig, DbError};

    fn product(id: &str, name: &str, stock: Option<i64>) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            brand: Some("La Fornería".to_string()),
            sale_price_cents: Some(450_000),
            cost_price_cents: Some(120_000),
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&product("p-1", "Rollos de Canela", Some(5))).await.unwrap();
        repo.insert(&product("p-2", "Ciabata", None)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);

        let found = repo.get_by_name("Ciabata").await.unwrap().unwrap();
        assert_eq!(found.id, "p-2");
        assert_eq!(found.stock, None);
        assert!(repo.get_by_name("Baguette").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_name_ignores_case() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        repo.insert(&product("p-1", "ciabata", Some(3))).await.unwrap();

        let found = repo.get_by_name("Ciabata").await.unwrap().unwrap();
        assert_eq!(found.id, "p-1");
        assert!(repo.get_by_name("CIABATA").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_set_stock_only_changes_stock() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        let original = product("p-1", "Pan Integral", Some(0));
        repo.insert(&original).await.unwrap();
        let before = repo.get_by_name("Pan Integral").await.unwrap().unwrap();

        repo.set_stock("p-1", 100).await.unwrap();

        let updated = repo.get_by_name("Pan Integral").await.unwrap().unwrap();
        assert_eq!(updated.stock, Some(100));
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.sale_price_cents, original.sale_price_cents);
        assert_eq!(updated.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn test_set_stock_missing_product() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db.products().set_stock("nope", 100).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
