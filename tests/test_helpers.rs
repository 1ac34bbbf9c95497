// ==========================================
// Test helpers
// ==========================================
// Responsibility: temp database setup, master data seeding, record
// builders shared by the integration suites
// ==========================================
#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use manufacturing_ops::db;
use manufacturing_ops::domain::types::LineStatus;
use manufacturing_ops::domain::{Employee, Plant, Product, ProductionLine, ProductionRecord};
use manufacturing_ops::repository::MasterDataRepository;
use std::error::Error;
use tempfile::NamedTempFile;
use uuid::Uuid;

pub const TEST_PLANT_ID: &str = "plant-1";
pub const TEST_LINE_ID: &str = "line-1";
pub const TEST_PRODUCT_ID: &str = "product-1";
pub const TEST_EMPLOYEE_ID: &str = "emp-1";

/// Create a temp SQLite database with the full schema applied
///
/// # Returns
/// - NamedTempFile: keep it alive for the duration of the test
/// - String: database file path
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = db::open_connection(&db_path)?;
    db::init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// Insert one plant, line, product and employee so fact rows can
/// satisfy their foreign keys
pub fn seed_master(db_path: &str) -> Result<(), Box<dyn Error>> {
    let ts = Utc::now().naive_utc();
    let master = MasterDataRepository::new(db_path)?;

    master.insert_plant(&Plant {
        id: TEST_PLANT_ID.to_string(),
        name: "Test Plant".to_string(),
        location: "Testville".to_string(),
        timezone: "UTC".to_string(),
        created_at: ts,
        updated_at: ts,
    })?;
    master.insert_line(&ProductionLine {
        id: TEST_LINE_ID.to_string(),
        plant_id: TEST_PLANT_ID.to_string(),
        name: "Test Line".to_string(),
        capacity_per_hour: 100,
        status: LineStatus::Active,
        created_at: ts,
        updated_at: ts,
    })?;
    master.insert_product(&Product {
        id: TEST_PRODUCT_ID.to_string(),
        sku: "SKU-TEST".to_string(),
        name: "Test Product".to_string(),
        category: "Test".to_string(),
        unit_price: 10.0,
        target_yield: 95.0,
        created_at: ts,
        updated_at: ts,
    })?;
    master.insert_employee(&Employee {
        id: TEST_EMPLOYEE_ID.to_string(),
        employee_id: "EMP-TEST".to_string(),
        name: "Test Operator".to_string(),
        role: "Operator".to_string(),
        shift: "Shift 1".to_string(),
        plant_id: TEST_PLANT_ID.to_string(),
        created_at: ts,
        updated_at: ts,
    })?;

    Ok(())
}

/// Production record builder with the counters under test
pub fn record(
    shift: &str,
    date: &str,
    planned: Option<i64>,
    actual: Option<i64>,
    good: Option<i64>,
    downtime: Option<i64>,
) -> ProductionRecord {
    ProductionRecord {
        id: Uuid::new_v4().to_string(),
        plant_id: TEST_PLANT_ID.to_string(),
        line_id: TEST_LINE_ID.to_string(),
        product_id: TEST_PRODUCT_ID.to_string(),
        shift: shift.to_string(),
        production_date: parse_date(date),
        hour_of_day: 1,
        planned_production: planned,
        actual_production: actual,
        good_units: good,
        rejected_units: None,
        downtime_minutes: downtime,
        downtime_reason: None,
        operator_id: None,
        created_at: Utc::now().naive_utc(),
    }
}

pub fn parse_date(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date must be YYYY-MM-DD")
}
