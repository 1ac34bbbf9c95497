// ==========================================
// Manufacturing Operations KPI Backend - Importer layer
// ==========================================
// Responsibility: bulk intake of production records from CSV files.
// Valid rows are stored, invalid rows are reported; one bad row never
// aborts the batch.
// ==========================================

pub mod error;
pub mod file_parser;

pub use error::ImportError;
pub use file_parser::CsvParser;

use crate::datasource::ManufacturingDataSource;
use crate::domain::ProductionRecord;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// Import report
// ==========================================

/// One rejected row and the reason it was rejected
#[derive(Debug, Clone, Serialize)]
pub struct ImportRowError {
    /// 1-based line number in the file (the header is line 1)
    pub row: usize,
    pub message: String,
}

/// Outcome of one import run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub total_rows: usize,
    pub imported: usize,
    pub failed: usize,
    pub errors: Vec<ImportRowError>,
}

// ==========================================
// ProductionImporter
// ==========================================

/// CSV importer for production records
pub struct ProductionImporter {
    source: Arc<dyn ManufacturingDataSource>,
}

impl ProductionImporter {
    pub fn new(source: Arc<dyn ManufacturingDataSource>) -> Self {
        Self { source }
    }

    /// Import production records from a CSV file
    ///
    /// Required columns: plant_id, line_id, product_id, shift,
    /// production_date (YYYY-MM-DD), hour_of_day (1..24).
    /// Optional columns: planned_production, actual_production,
    /// good_units, rejected_units, downtime_minutes, downtime_reason,
    /// operator_id. Blank counters are stored as absent and count as
    /// zero during aggregation.
    pub async fn import_csv(&self, path: &Path) -> Result<ImportReport, ImportError> {
        let rows = CsvParser::parse_to_raw_records(path)?;

        let mut report = ImportReport {
            total_rows: rows.len(),
            ..Default::default()
        };

        for (idx, row) in rows.iter().enumerate() {
            let line_no = idx + 2; // data starts on line 2

            let record = match parse_row(row) {
                Ok(record) => record,
                Err(message) => {
                    report.failed += 1;
                    report.errors.push(ImportRowError {
                        row: line_no,
                        message,
                    });
                    continue;
                }
            };

            match self.source.insert_production(&record).await {
                Ok(()) => report.imported += 1,
                Err(e) => {
                    report.failed += 1;
                    report.errors.push(ImportRowError {
                        row: line_no,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            path = %path.display(),
            total = report.total_rows,
            imported = report.imported,
            failed = report.failed,
            "production csv import finished"
        );

        Ok(report)
    }
}

// ==========================================
// Row parsing
// ==========================================

fn required(row: &HashMap<String, String>, column: &str) -> Result<String, String> {
    match row.get(column) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(format!("missing required column '{}'", column)),
    }
}

fn optional_text(row: &HashMap<String, String>, column: &str) -> Option<String> {
    row.get(column).filter(|v| !v.is_empty()).cloned()
}

fn optional_counter(row: &HashMap<String, String>, column: &str) -> Result<Option<i64>, String> {
    match row.get(column) {
        Some(value) if !value.is_empty() => {
            let parsed = value
                .parse::<i64>()
                .map_err(|_| format!("column '{}' must be an integer, got '{}'", column, value))?;
            if parsed < 0 {
                return Err(format!(
                    "column '{}' must not be negative, got {}",
                    column, parsed
                ));
            }
            Ok(Some(parsed))
        }
        _ => Ok(None),
    }
}

fn parse_row(row: &HashMap<String, String>) -> Result<ProductionRecord, String> {
    let raw_date = required(row, "production_date")?;
    let production_date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| format!("production_date must be YYYY-MM-DD, got '{}'", raw_date))?;

    let raw_hour = required(row, "hour_of_day")?;
    let hour_of_day = raw_hour
        .parse::<i64>()
        .map_err(|_| format!("hour_of_day must be an integer, got '{}'", raw_hour))?;
    if !(1..=24).contains(&hour_of_day) {
        return Err(format!(
            "hour_of_day must be between 1 and 24, got {}",
            hour_of_day
        ));
    }

    Ok(ProductionRecord {
        id: Uuid::new_v4().to_string(),
        plant_id: required(row, "plant_id")?,
        line_id: required(row, "line_id")?,
        product_id: required(row, "product_id")?,
        shift: required(row, "shift")?,
        production_date,
        hour_of_day,
        planned_production: optional_counter(row, "planned_production")?,
        actual_production: optional_counter(row, "actual_production")?,
        good_units: optional_counter(row, "good_units")?,
        rejected_units: optional_counter(row, "rejected_units")?,
        downtime_minutes: optional_counter(row, "downtime_minutes")?,
        downtime_reason: optional_text(row, "downtime_reason"),
        operator_id: optional_text(row, "operator_id"),
        created_at: Utc::now().naive_utc(),
    })
}
