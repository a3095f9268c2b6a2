//! # Repository Module
//!
//! Database repository implementations for the La Fornería schema.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  seeder::run                                                           │
//! │       │                                                                 │
//! │       │  db.customers().get_or_create(fixture)                         │
//! │       │  db.products().set_stock(id, 100)                              │
//! │       │  db.sales().insert_sale(&sale)                                 │
//! │       ▼                                                                 │
//! │  CustomerRepository / ProductRepository / SaleRepository / ...         │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Create-or-get by RUT
//! - [`EmployeeRepository`](employee::EmployeeRepository) - Salesperson lookup
//! - [`ProductRepository`](product::ProductRepository) - Catalog and stock
//! - [`SaleRepository`](sale::SaleRepository) - Sales, line items, payments

pub mod customer;
pub mod employee;
pub mod product;
pub mod sale;
