//! # forneria-db: Database Layer and Seeder for La Fornería
//!
//! SQLite access for the bakery's POS database, plus the seeding routines
//! that fill it with demo customers and historical sales.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  seed-ventas / seed-catalog (src/bin)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   forneria-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    seeder     │───►│  Repositories │───►│   Database   │  │   │
//! │  │   │ ensure_*      │    │ CustomerRepo  │    │  (pool.rs)   │  │   │
//! │  │   │ create_sales  │    │ ProductRepo   │    │ SqlitePool   │  │   │
//! │  │   │ run           │    │ EmployeeRepo  │    │ + migrations │  │   │
//! │  │   └───────────────┘    │ SaleRepo      │    └──────────────┘  │   │
//! │  │          │             └───────────────┘                       │   │
//! │  │          ▼                                                      │   │
//! │  │   forneria-core (plans, money, fixtures)                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (FORNERIA_DB_PATH, default ./forneria_dev.db)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Environment configuration for the binaries
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Customer, employee, product and sale repositories
//! - [`seeder`] - Seeding steps and the `run` orchestration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forneria_core::fixtures::CUSTOMERS;
//! use forneria_db::{seeder, Database, DbConfig};
//! use rand::SeedableRng;
//!
//! let db = Database::new(DbConfig::new("./forneria_dev.db")).await?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let outcome = seeder::run(&db, CUSTOMERS, &mut rng).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seeder;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, SeedConfig};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use seeder::{SeedError, SeedOutcome, SeedResult, SeedSummary};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::employee::EmployeeRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
