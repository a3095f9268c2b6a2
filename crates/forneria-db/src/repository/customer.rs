//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Create-or-Get by RUT
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_or_create(fixture)                                                 │
//! │       │                                                                 │
//! │       ├── SELECT ... WHERE rut = ?  ── found ──► (customer, false)      │
//! │       │                                                                 │
//! │       └── not found ──► INSERT with fixture defaults                   │
//! │                │                                                        │
//! │                ├── ok ─────────────────────────► (customer, true)       │
//! │                └── UNIQUE(rut) violated ──► re-SELECT ► (customer, false)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Defaults are only applied on creation; an existing row is returned as-is.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use forneria_core::fixtures::CustomerFixture;
use forneria_core::Customer;

const SELECT_CUSTOMER: &str = r#"
    SELECT id, rut, name, email, phone, is_company, created_at
    FROM customers
"#;

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Gets a customer by RUT.
    pub async fn get_by_rut(&self, rut: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!("{SELECT_CUSTOMER} WHERE rut = ?1"))
            .bind(rut)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    /// Inserts a new customer.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - RUT already exists
    pub async fn insert(&self, customer: &Customer) -> DbResult<()> {
        debug!(rut = %customer.rut, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO customers (id, rut, name, email, phone, is_company, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.rut)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.is_company)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns the customer with the fixture's RUT, creating it if absent.
    ///
    /// ## Returns
    /// `(customer, created)` where `created` is true only when a row was inserted.
    pub async fn get_or_create(&self, fixture: &CustomerFixture) -> DbResult<(Customer, bool)> {
        if let Some(existing) = self.get_by_rut(fixture.rut).await? {
            return Ok((existing, false));
        }

        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            rut: fixture.rut.to_string(),
            name: fixture.name.to_string(),
            email: Some(fixture.email.to_string()),
            phone: Some(fixture.phone.to_string()),
            is_company: false,
            created_at: Utc::now(),
        };

        match self.insert(&customer).await {
            Ok(()) => Ok((customer, true)),
            Err(err) if err.is_unique_violation() => {
                // Another writer created it between the lookup and the insert
                let existing = self
                    .get_by_rut(fixture.rut)
                    .await?
                    .ok_or_else(|| DbError::not_found("Customer", fixture.rut))?;
                Ok((existing, false))
            }
            Err(err) => Err(err),
        }
    }

    /// Counts all customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use forneria_core::fixtures::CUSTOMERS;

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();
        let fixture = &CUSTOMERS[0];

        let (first, created) = repo.get_or_create(fixture).await.unwrap();
        assert!(created);
        assert_eq!(first.rut, fixture.rut);
        assert_eq!(first.name, fixture.name);
        assert!(!first.is_company);

        let (second, created) = repo.get_or_create(fixture).await.unwrap();
        assert!(!created);
        assert_eq!(second.id, first.id);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_existing_customer_is_not_overwritten() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();
        let fixture = &CUSTOMERS[1];

        let (customer, _) = repo.get_or_create(fixture).await.unwrap();
        sqlx::query("UPDATE customers SET name = 'Renamed' WHERE id = ?1")
            .bind(&customer.id)
            .execute(db.pool())
            .await
            .unwrap();

        let (fetched, created) = repo.get_or_create(fixture).await.unwrap();
        assert!(!created);
        assert_eq!(fetched.id, customer.id);
        assert_eq!(fetched.name, "Renamed");
    }

    #[tokio::test]
    async fn test_duplicate_rut_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let (mut customer, _) = repo.get_or_create(&CUSTOMERS[2]).await.unwrap();
        customer.id = uuid::Uuid::new_v4().to_string();

        let err = repo.insert(&customer).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
