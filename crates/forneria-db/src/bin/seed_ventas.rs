//! # Sales Seed
//!
//! Fills the POS database with ten demo customers and one historical sale
//! for each of them.
//!
//! ## Usage
//! ```bash
//! # Seed ./forneria_dev.db
//! cargo run -p forneria-db --bin seed-ventas
//!
//! # Another database, reproducible choices
//! FORNERIA_DB_PATH=./data/forneria.db FORNERIA_RNG_SEED=42 \
//!     cargo run -p forneria-db --bin seed-ventas
//! ```
//!
//! The catalog must already have products; run `seed-catalog` first on a
//! fresh database.

use forneria_core::fixtures::CUSTOMERS;
use forneria_db::config::{init_tracing, SeedConfig};
use forneria_db::{seeder, Database, SeedOutcome, SeedResult};
use tracing::info;

#[tokio::main]
async fn main() -> SeedResult<()> {
    let config = SeedConfig::load()?;
    init_tracing(&config.log_filter);

    info!(
        path = %config.database_path.display(),
        seeded = config.rng_seed.is_some(),
        "Starting sales seed"
    );

    let db = Database::new(config.db_config()).await?;
    let (total, applied) = db.migration_status().await?;
    info!(total, applied, "Schema ready");

    let mut rng = config.rng();
    let outcome = seeder::run(&db, CUSTOMERS, &mut rng).await?;

    if let SeedOutcome::Completed(summary) = &outcome {
        let sales_in_db = db.sales().count().await?;
        info!(
            created = summary.sales_created,
            total = sales_in_db,
            "Sales seed finished"
        );
    }

    db.close().await;
    Ok(())
}
