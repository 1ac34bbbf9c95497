// ==========================================
// Manufacturing Operations KPI Backend - Production CSV import tool
// ==========================================
// Bulk-loads production records from a CSV file into a SQLite store.
// Usage: import_production_csv <csv_path> [db_path]
// ==========================================

use manufacturing_ops::datasource::SqliteDataSource;
use manufacturing_ops::importer::ProductionImporter;
use manufacturing_ops::{app, logging};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let csv_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: import_production_csv <csv_path> [db_path]");
            std::process::exit(2);
        }
    };
    let db_path = args.next().unwrap_or_else(app::get_default_db_path);

    tracing::info!("==================================================");
    tracing::info!("{} - production csv import", manufacturing_ops::APP_NAME);
    tracing::info!("csv: {}", csv_path);
    tracing::info!("database: {}", db_path);
    tracing::info!("==================================================");

    if let Some(parent) = Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let source = Arc::new(SqliteDataSource::new(&db_path)?);
    let importer = ProductionImporter::new(source);

    let report = importer.import_csv(Path::new(&csv_path)).await?;

    for error in &report.errors {
        tracing::warn!(row = error.row, "{}", error.message);
    }
    tracing::info!(
        total = report.total_rows,
        imported = report.imported,
        failed = report.failed,
        "import finished"
    );

    if report.imported == 0 && report.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
