// ==========================================
// Manufacturing Operations KPI Backend - Demo database seeder
// ==========================================
// Resets the target SQLite database and loads the demo fixture set.
// Usage: seed_demo_db [db_path]
// ==========================================

use manufacturing_ops::datasource::fixtures;
use manufacturing_ops::repository::{
    FiveSRepository, KaizenRepository, MasterDataRepository, ProductionRepository,
    QualityRepository,
};
use manufacturing_ops::{app, db, logging};
use std::path::Path;
use std::sync::{Arc, Mutex};

fn main() -> anyhow::Result<()> {
    logging::init();

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(app::get_default_db_path);

    tracing::info!("==================================================");
    tracing::info!("{} - demo seeder", manufacturing_ops::APP_NAME);
    tracing::info!("version: {}", manufacturing_ops::VERSION);
    tracing::info!("database: {}", db_path);
    tracing::info!("==================================================");

    if let Some(parent) = Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = db::open_connection(&db_path)?;
    db::init_schema(&conn)?;

    // reset in dependency order: fact tables first, master tables last
    conn.execute_batch(
        r#"
        DELETE FROM production_data;
        DELETE FROM quality_inspections;
        DELETE FROM five_s_audits;
        DELETE FROM resource_consumption;
        DELETE FROM kaizen_ideas;
        DELETE FROM employees;
        DELETE FROM production_lines;
        DELETE FROM products;
        DELETE FROM plants;
        "#,
    )?;

    let conn = Arc::new(Mutex::new(conn));
    let master = MasterDataRepository::from_connection(Arc::clone(&conn));
    let production = ProductionRepository::from_connection(Arc::clone(&conn));
    let quality = QualityRepository::from_connection(Arc::clone(&conn));
    let five_s = FiveSRepository::from_connection(Arc::clone(&conn));
    let kaizen = KaizenRepository::from_connection(conn);

    let data = fixtures::demo_data();

    for plant in &data.plants {
        master.insert_plant(plant)?;
    }
    for line in &data.production_lines {
        master.insert_line(line)?;
    }
    for product in &data.products {
        master.insert_product(product)?;
    }
    for employee in &data.employees {
        master.insert_employee(employee)?;
    }

    let production_rows = production.insert_batch(&data.production)?;
    for inspection in &data.quality {
        quality.insert(inspection)?;
    }
    for audit in &data.five_s {
        five_s.insert(audit)?;
    }
    for idea in &data.kaizen {
        kaizen.insert(idea)?;
    }

    tracing::info!(
        plants = data.plants.len(),
        lines = data.production_lines.len(),
        products = data.products.len(),
        employees = data.employees.len(),
        production = production_rows,
        quality = data.quality.len(),
        five_s = data.five_s.len(),
        kaizen = data.kaizen.len(),
        "demo data seeded"
    );

    Ok(())
}
