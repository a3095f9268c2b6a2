//! # Seeder
//!
//! Populates the POS database with demo customers, stock and historical
//! sales. This is what the `seed-ventas` and `seed-catalog` binaries run.
//!
//! ## Flow of `run`
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products().list_all()       ── empty ──► NoProducts (nothing written)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ensure_customers(fixtures)  ── empty ──► NoCustomers                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  employees().first()  +  ensure_stock(products)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  create_sales(first 10 customers)                                       │
//! │     per customer:  plan_sale ─► sale ─► items ─► payment                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Completed(SeedSummary)                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are not wrapped in a transaction. A failure part-way through a
//! sale leaves the rows already written, and the error ends the run.
//!
//! Progress for the operator goes to stdout; structured logs go through
//! `tracing`.

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use forneria_core::fixtures::{CustomerFixture, CATALOG};
use forneria_core::plan::{historical_dates, pick_payment_method, plan_sale};
use forneria_core::validation::validate_customer_fixture;
use forneria_core::{
    CoreError, Customer, DocumentType, Employee, Payment, Product, Sale, SaleItem, SaleStatus,
    SalesChannel, ValidationError, DEFAULT_STOCK, MAX_SEEDED_SALES,
};

use crate::config::ConfigError;
use crate::error::DbError;
use crate::pool::Database;

// =============================================================================
// Errors
// =============================================================================

/// Anything that can abort a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Planning error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid fixture: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type SeedResult<T> = Result<T, SeedError>;

// =============================================================================
// Outcome
// =============================================================================

/// Counters reported at the end of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub products: usize,
    pub customers: usize,
    pub customers_created: usize,
    pub employee: Option<String>,
    pub stock_adjusted: usize,
    pub sales_created: usize,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog is empty; nothing was written.
    NoProducts,
    /// No customer could be provisioned.
    NoCustomers,
    Completed(SeedSummary),
}

// =============================================================================
// Steps
// =============================================================================

/// Makes sure every fixture customer exists, keyed by RUT.
///
/// All fixtures are validated before the first insert.
///
/// ## Returns
/// `(customers, created)` in fixture order.
pub async fn ensure_customers(
    db: &Database,
    fixtures: &[CustomerFixture],
) -> SeedResult<(Vec<Customer>, usize)> {
    for fixture in fixtures {
        validate_customer_fixture(fixture)?;
    }

    let repo = db.customers();
    let mut customers = Vec::with_capacity(fixtures.len());
    let mut created = 0;

    for fixture in fixtures {
        let (customer, was_created) = repo.get_or_create(fixture).await?;
        if was_created {
            created += 1;
        }
        customers.push(customer);
    }

    info!(total = customers.len(), created, "Customers provisioned");
    Ok((customers, created))
}

/// Sets stock to [`DEFAULT_STOCK`] on every product without usable stock.
///
/// The in-memory products are updated along with the database.
pub async fn ensure_stock(db: &Database, products: &mut [Product]) -> SeedResult<usize> {
    let repo = db.products();
    let mut adjusted = 0;

    for product in products.iter_mut().filter(|p| p.needs_restock()) {
        repo.set_stock(&product.id, DEFAULT_STOCK).await?;
        product.stock = Some(DEFAULT_STOCK);
        adjusted += 1;
    }

    if adjusted > 0 {
        info!(adjusted, stock = DEFAULT_STOCK, "Stock normalized");
    }
    Ok(adjusted)
}

/// Creates one paid sale for each of the first [`MAX_SEEDED_SALES`] customers.
///
/// Customer `i` is dated `historical_dates(now)[i % 10]`.
pub async fn create_sales<R: Rng + ?Sized>(
    db: &Database,
    customers: &[Customer],
    products: &[Product],
    employee: Option<&Employee>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> SeedResult<usize> {
    let repo = db.sales();
    let dates = historical_dates(now);
    let mut created = 0;

    for (idx, customer) in customers.iter().take(MAX_SEEDED_SALES).enumerate() {
        let sold_at = dates[idx % dates.len()];
        let plan = plan_sale(products, rng)?;

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            sold_at,
            customer_id: customer.id.clone(),
            employee_id: employee.map(|e| e.id.clone()),
            channel: SalesChannel::Pos,
            shipping_address: None,
            shipping_cost_cents: 0,
            net_cents: plan.amounts.net.cents(),
            tax_cents: plan.amounts.tax.cents(),
            total_cents: plan.total().cents(),
            status: SaleStatus::Paid,
            document_type: DocumentType::Boleta,
            created_at: Utc::now(),
        };
        repo.insert_sale(&sale).await?;

        for line in &plan.lines {
            repo.add_item(&SaleItem {
                id: Uuid::new_v4().to_string(),
                sale_id: sale.id.clone(),
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                unit_price_cents: line.unit_price.cents(),
                discount_cents: 0,
            })
            .await?;
        }

        let method = pick_payment_method(rng);
        repo.add_payment(&Payment {
            id: Uuid::new_v4().to_string(),
            sale_id: sale.id.clone(),
            amount_cents: sale.total_cents,
            method,
            paid_at: sold_at,
        })
        .await?;

        debug!(
            sale_id = %sale.id,
            customer = %customer.name,
            lines = plan.lines.len(),
            method = method.code(),
            "Sale seeded"
        );
        println!(
            "  ✅ Venta #{} - {} - {}",
            short_id(&sale.id),
            customer.name,
            plan.total().to_whole_pesos_string()
        );
        created += 1;
    }

    Ok(created)
}

/// Inserts the bakery catalog, skipping products that already exist by name.
pub async fn ensure_catalog(db: &Database) -> SeedResult<usize> {
    let repo = db.products();
    let mut created = 0;

    for item in CATALOG {
        if repo.get_by_name(item.name).await?.is_some() {
            println!("  ⏭️  Ya existe: {}", item.name);
            continue;
        }

        let now = Utc::now();
        repo.insert(&Product {
            id: Uuid::new_v4().to_string(),
            name: item.name.to_string(),
            description: Some(item.description.to_string()),
            brand: Some(item.brand.to_string()),
            sale_price_cents: Some(item.sale_price.cents()),
            cost_price_cents: Some(item.cost_price.cents()),
            stock: Some(item.stock),
            created_at: now,
            updated_at: now,
        })
        .await?;

        println!("  ✅ Creado: {} ({})", item.name, item.sale_price.to_whole_pesos_string());
        created += 1;
    }

    info!(created, total = CATALOG.len(), "Catalog provisioned");
    Ok(created)
}

// =============================================================================
// Orchestration
// =============================================================================

/// Runs the full sales seed against `db`, provisioning `customers` first.
///
/// The binaries pass [`forneria_core::fixtures::CUSTOMERS`].
pub async fn run<R: Rng + ?Sized>(
    db: &Database,
    customers: &[CustomerFixture],
    rng: &mut R,
) -> SeedResult<SeedOutcome> {
    println!("🌱 Iniciando seed de ventas...");

    let mut products = db.products().list_all().await?;
    if products.is_empty() {
        println!("❌ No hay productos disponibles. Ejecuta primero seed-catalog.");
        return Ok(SeedOutcome::NoProducts);
    }

    let (customers, customers_created) = ensure_customers(db, customers).await?;
    if customers.is_empty() {
        println!("❌ No se pudieron crear/obtener clientes");
        return Ok(SeedOutcome::NoCustomers);
    }

    let employee = db.employees().first().await?;
    let stock_adjusted = ensure_stock(db, &mut products).await?;

    let employee_name = employee.as_ref().map(|e| e.name.clone());
    println!(
        "  Productos: {} | Clientes: {} (+{} nuevos) | Empleado: {}",
        products.len(),
        customers.len(),
        customers_created,
        employee_name.as_deref().unwrap_or("None")
    );
    if stock_adjusted > 0 {
        println!(
            "  Stocks ajustados a {} para {} productos sin stock",
            DEFAULT_STOCK, stock_adjusted
        );
    }

    println!("\n💰 Creando ventas históricas...");
    let sales_created =
        create_sales(db, &customers, &products, employee.as_ref(), Utc::now(), rng).await?;

    println!("\n📊 Total ventas creadas: {}", sales_created);
    println!("✨ ¡Completado!");

    let summary = SeedSummary {
        products: products.len(),
        customers: customers.len(),
        customers_created,
        employee: employee_name,
        stock_adjusted,
        sales_created,
    };
    info!(?summary, "Seed complete");

    Ok(SeedOutcome::Completed(summary))
}

/// First eight characters of an ID, for console output.
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

// =============================================================================
// Unit Tests
// =============================================================================
