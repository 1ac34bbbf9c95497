// ==========================================
// Manufacturing Operations KPI Backend - SQLite connection init
// ==========================================
// Goals:
// - One place for Connection::open PRAGMA behavior, so no module ends
//   up with foreign keys enabled while another runs without them
// - Uniform busy_timeout to absorb transient lock contention
// - Idempotent schema creation shared by the app, the seed binary
//   and the test suites
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout in milliseconds
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the uniform PRAGMA set to a SQLite connection
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// applied to every connection the process opens.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the uniform configuration applied
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create all tables if they do not exist yet
///
/// The schema mirrors the dashboard's storage layout: four master tables
/// and five fact tables. Dates are stored as `%Y-%m-%d` text, timestamps
/// as `%Y-%m-%d %H:%M:%S` text.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS plants (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT NOT NULL,
            timezone TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS production_lines (
            id TEXT PRIMARY KEY,
            plant_id TEXT NOT NULL REFERENCES plants(id),
            name TEXT NOT NULL,
            capacity_per_hour INTEGER NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY,
            sku TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            unit_price REAL NOT NULL,
            target_yield REAL NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            shift TEXT NOT NULL,
            plant_id TEXT NOT NULL REFERENCES plants(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS production_data (
            id TEXT PRIMARY KEY,
            plant_id TEXT NOT NULL REFERENCES plants(id),
            line_id TEXT NOT NULL REFERENCES production_lines(id),
            product_id TEXT NOT NULL REFERENCES products(id),
            shift TEXT NOT NULL,
            production_date TEXT NOT NULL,
            hour_of_day INTEGER NOT NULL,
            planned_production INTEGER,
            actual_production INTEGER,
            good_units INTEGER,
            rejected_units INTEGER,
            downtime_minutes INTEGER,
            downtime_reason TEXT,
            operator_id TEXT,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_production_data_date
            ON production_data(production_date, hour_of_day);
        CREATE INDEX IF NOT EXISTS idx_production_data_plant_line
            ON production_data(plant_id, line_id);

        CREATE TABLE IF NOT EXISTS quality_inspections (
            id TEXT PRIMARY KEY,
            plant_id TEXT NOT NULL REFERENCES plants(id),
            line_id TEXT NOT NULL REFERENCES production_lines(id),
            product_id TEXT NOT NULL REFERENCES products(id),
            batch_number TEXT NOT NULL,
            inspection_date TEXT NOT NULL,
            inspector_id TEXT,
            inspected_quantity INTEGER NOT NULL,
            passed_quantity INTEGER NOT NULL,
            failed_quantity INTEGER NOT NULL,
            yield_percent REAL NOT NULL,
            defect_category TEXT,
            comments TEXT,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_quality_inspections_date
            ON quality_inspections(inspection_date);

        CREATE TABLE IF NOT EXISTS five_s_audits (
            id TEXT PRIMARY KEY,
            plant_id TEXT NOT NULL REFERENCES plants(id),
            line_id TEXT NOT NULL REFERENCES production_lines(id),
            audit_date TEXT NOT NULL,
            auditor_id TEXT,
            sort_score INTEGER NOT NULL,
            set_in_order_score INTEGER NOT NULL,
            shine_score INTEGER NOT NULL,
            standardize_score INTEGER NOT NULL,
            sustain_score INTEGER NOT NULL,
            overall_score REAL NOT NULL,
            comments TEXT,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_five_s_audits_date
            ON five_s_audits(audit_date);

        CREATE TABLE IF NOT EXISTS resource_consumption (
            id TEXT PRIMARY KEY,
            plant_id TEXT NOT NULL REFERENCES plants(id),
            line_id TEXT NOT NULL REFERENCES production_lines(id),
            consumption_date TEXT NOT NULL,
            shift TEXT NOT NULL,
            labor_hours REAL NOT NULL,
            labor_cost REAL NOT NULL,
            power_kwh REAL NOT NULL,
            power_cost REAL NOT NULL,
            fuel_liters REAL NOT NULL,
            fuel_cost REAL NOT NULL,
            maintenance_cost REAL NOT NULL,
            other_costs REAL NOT NULL,
            total_cost REAL NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_resource_consumption_date
            ON resource_consumption(consumption_date);

        CREATE TABLE IF NOT EXISTS kaizen_ideas (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            priority TEXT NOT NULL,
            current_state TEXT NOT NULL,
            proposed_solution TEXT NOT NULL,
            expected_benefit TEXT NOT NULL,
            estimated_savings REAL NOT NULL,
            submitter_id TEXT,
            status TEXT NOT NULL,
            implementation_date TEXT,
            actual_savings REAL,
            plant_id TEXT NOT NULL REFERENCES plants(id),
            line_id TEXT NOT NULL REFERENCES production_lines(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_kaizen_ideas_created
            ON kaizen_ideas(created_at);
        "#,
    )?;
    Ok(())
}
