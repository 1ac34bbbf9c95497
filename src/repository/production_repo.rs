// ==========================================
// Manufacturing Operations KPI Backend - Production data repository
// ==========================================
// Fetch order matches the dashboard: newest date first, then latest
// hour first. The OEE engine consumes exactly what this returns.
// ==========================================

use crate::db::open_connection;
use crate::domain::production::ProductionRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{date_from_db, date_to_db, datetime_from_db, datetime_to_db, ProductionQuery};
use rusqlite::{params, params_from_iter, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// Production data repository
pub struct ProductionRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductionRepository {
    /// Open a repository on its own connection
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Build a repository over a shared connection
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<ProductionRecord> {
        Ok(ProductionRecord {
            id: row.get(0)?,
            plant_id: row.get(1)?,
            line_id: row.get(2)?,
            product_id: row.get(3)?,
            shift: row.get(4)?,
            production_date: date_from_db(&row.get::<_, String>(5)?),
            hour_of_day: row.get(6)?,
            planned_production: row.get(7)?,
            actual_production: row.get(8)?,
            good_units: row.get(9)?,
            rejected_units: row.get(10)?,
            downtime_minutes: row.get(11)?,
            downtime_reason: row.get(12)?,
            operator_id: row.get(13)?,
            created_at: datetime_from_db(&row.get::<_, String>(14)?),
        })
    }

    /// Query production records by plant, line and date range
    ///
    /// # Parameters
    /// - query: optional plant/line filters, optional inclusive date
    ///   range, and the row cap
    ///
    /// # Returns
    /// Records ordered by production_date DESC, hour_of_day DESC
    pub fn find(&self, query: &ProductionQuery) -> RepositoryResult<Vec<ProductionRecord>> {
        let conn = self.get_conn()?;

        let mut sql = String::from(
            r#"
            SELECT
                id, plant_id, line_id, product_id, shift, production_date,
                hour_of_day, planned_production, actual_production, good_units,
                rejected_units, downtime_minutes, downtime_reason, operator_id,
                created_at
            FROM production_data
            "#,
        );

        let mut clauses: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(plant_id) = &query.plant_id {
            binds.push(plant_id.clone());
            clauses.push(format!("plant_id = ?{}", binds.len()));
        }
        if let Some(line_id) = &query.line_id {
            binds.push(line_id.clone());
            clauses.push(format!("line_id = ?{}", binds.len()));
        }
        if let Some(range) = &query.date_range {
            binds.push(date_to_db(range.from));
            clauses.push(format!("production_date >= ?{}", binds.len()));
            binds.push(date_to_db(range.to));
            clauses.push(format!("production_date <= ?{}", binds.len()));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY production_date DESC, hour_of_day DESC");
        sql.push_str(&format!(" LIMIT {}", query.limit));

        let mut stmt = conn.prepare(&sql)?;
        let records = stmt
            .query_map(params_from_iter(binds.iter()), Self::map_row)?
            .collect::<SqliteResult<Vec<ProductionRecord>>>()?;

        Ok(records)
    }

    /// Insert one production record
    pub fn insert(&self, record: &ProductionRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO production_data (
                id, plant_id, line_id, product_id, shift, production_date,
                hour_of_day, planned_production, actual_production, good_units,
                rejected_units, downtime_minutes, downtime_reason, operator_id,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                record.id,
                record.plant_id,
                record.line_id,
                record.product_id,
                record.shift,
                date_to_db(record.production_date),
                record.hour_of_day,
                record.planned_production,
                record.actual_production,
                record.good_units,
                record.rejected_units,
                record.downtime_minutes,
                record.downtime_reason,
                record.operator_id,
                datetime_to_db(record.created_at),
            ],
        )?;
        Ok(())
    }

    /// Insert a batch of records inside one transaction
    ///
    /// # Returns
    /// Number of rows inserted
    pub fn insert_batch(&self, records: &[ProductionRecord]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;

        conn.execute("BEGIN TRANSACTION", [])?;

        let mut inserted = 0;
        for record in records {
            let result = conn.execute(
                r#"
                INSERT INTO production_data (
                    id, plant_id, line_id, product_id, shift, production_date,
                    hour_of_day, planned_production, actual_production, good_units,
                    rejected_units, downtime_minutes, downtime_reason, operator_id,
                    created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
                "#,
                params![
                    record.id,
                    record.plant_id,
                    record.line_id,
                    record.product_id,
                    record.shift,
                    date_to_db(record.production_date),
                    record.hour_of_day,
                    record.planned_production,
                    record.actual_production,
                    record.good_units,
                    record.rejected_units,
                    record.downtime_minutes,
                    record.downtime_reason,
                    record.operator_id,
                    datetime_to_db(record.created_at),
                ],
            );

            match result {
                Ok(affected) => inserted += affected,
                Err(e) => {
                    conn.execute("ROLLBACK", [])?;
                    return Err(e.into());
                }
            }
        }

        conn.execute("COMMIT", [])?;
        Ok(inserted)
    }
}
