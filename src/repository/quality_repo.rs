// ==========================================
// Manufacturing Operations KPI Backend - Quality inspection repository
// ==========================================

use crate::db::open_connection;
use crate::domain::quality::QualityInspection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{date_from_db, date_to_db, datetime_from_db, datetime_to_db, EntityFilter};
use rusqlite::{params, params_from_iter, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// Quality inspection repository
pub struct QualityRepository {
    conn: Arc<Mutex<Connection>>,
}

impl QualityRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<QualityInspection> {
        Ok(QualityInspection {
            id: row.get(0)?,
            plant_id: row.get(1)?,
            line_id: row.get(2)?,
            product_id: row.get(3)?,
            batch_number: row.get(4)?,
            inspection_date: date_from_db(&row.get::<_, String>(5)?),
            inspector_id: row.get(6)?,
            inspected_quantity: row.get(7)?,
            passed_quantity: row.get(8)?,
            failed_quantity: row.get(9)?,
            yield_percent: row.get(10)?,
            defect_category: row.get(11)?,
            comments: row.get(12)?,
            created_at: datetime_from_db(&row.get::<_, String>(13)?),
        })
    }

    /// Query inspections, newest inspection date first
    pub fn find(&self, filter: &EntityFilter) -> RepositoryResult<Vec<QualityInspection>> {
        let conn = self.get_conn()?;

        let mut sql = String::from(
            r#"
            SELECT
                id, plant_id, line_id, product_id, batch_number, inspection_date,
                inspector_id, inspected_quantity, passed_quantity, failed_quantity,
                yield_percent, defect_category, comments, created_at
            FROM quality_inspections
            "#,
        );

        let mut clauses: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(plant_id) = &filter.plant_id {
            binds.push(plant_id.clone());
            clauses.push(format!("plant_id = ?{}", binds.len()));
        }
        if let Some(line_id) = &filter.line_id {
            binds.push(line_id.clone());
            clauses.push(format!("line_id = ?{}", binds.len()));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY inspection_date DESC");

        let mut stmt = conn.prepare(&sql)?;
        let inspections = stmt
            .query_map(params_from_iter(binds.iter()), Self::map_row)?
            .collect::<SqliteResult<Vec<QualityInspection>>>()?;

        Ok(inspections)
    }

    /// Insert one inspection
    pub fn insert(&self, inspection: &QualityInspection) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO quality_inspections (
                id, plant_id, line_id, product_id, batch_number, inspection_date,
                inspector_id, inspected_quantity, passed_quantity, failed_quantity,
                yield_percent, defect_category, comments, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
            params![
                inspection.id,
                inspection.plant_id,
                inspection.line_id,
                inspection.product_id,
                inspection.batch_number,
                date_to_db(inspection.inspection_date),
                inspection.inspector_id,
                inspection.inspected_quantity,
                inspection.passed_quantity,
                inspection.failed_quantity,
                inspection.yield_percent,
                inspection.defect_category,
                inspection.comments,
                datetime_to_db(inspection.created_at),
            ],
        )?;
        Ok(())
    }
}
