//! # Employee Repository
//!
//! The seeder only needs the first employee on record, who is credited as
//! salesperson on every seeded sale.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use forneria_core::Employee;

/// Repository for employee database operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }

    /// Returns the earliest-created employee, if any.
    pub async fn first(&self) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, created_at
            FROM employees
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Inserts a new employee.
    pub async fn insert(&self, employee: &Employee) -> DbResult<()> {
        debug!(name = %employee.name, "Inserting employee");

        sqlx::query("INSERT INTO employees (id, name, created_at) VALUES (?1, ?2, ?3)")
            .bind(&employee.id)
            .bind(&employee.name)
            .bind(employee.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use forneria_core::Employee;

    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_first_employee() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.employees();

        assert!(repo.first().await.unwrap().is_none());

        let now = Utc::now();
        for (id, name, age_days) in [("e-2", "Maeva", 1), ("e-1", "Tomás", 5)] {
            repo.insert(&Employee {
                id: id.to_string(),
                name: name.to_string(),
                created_at: now - Duration::days(age_days),
            })
            .await
            .unwrap();
        }

        let first = repo.first().await.unwrap().unwrap();
        assert_eq!(first.name, "Tomás");
    }
}
