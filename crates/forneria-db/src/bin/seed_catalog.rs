//! # Catalog Seed
//!
//! Inserts the bakery's products into the POS database. Products that
//! already exist (by name) are left alone.
//!
//! ## Usage
//! ```bash
//! cargo run -p forneria-db --bin seed-catalog
//! FORNERIA_DB_PATH=./data/forneria.db cargo run -p forneria-db --bin seed-catalog
//! ```

use forneria_core::fixtures::CATALOG;
use forneria_db::config::{init_tracing, SeedConfig};
use forneria_db::{seeder, Database, SeedResult};
use tracing::info;

#[tokio::main]
async fn main() -> SeedResult<()> {
    let config = SeedConfig::load()?;
    init_tracing(&config.log_filter);

    println!("🥖 Creando productos de La Fornería...");
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config.db_config()).await?;
    let (total, applied) = db.migration_status().await?;
    info!(total, applied, "Schema ready");

    let created = seeder::ensure_catalog(&db).await?;
    let in_catalog = db.products().count().await?;

    println!();
    println!(
        "✨ {} productos creados ({} ya existían). Total en catálogo: {}",
        created,
        CATALOG.len() - created,
        in_catalog
    );

    db.close().await;
    Ok(())
}
