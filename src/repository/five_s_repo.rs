// ==========================================
// Manufacturing Operations KPI Backend - 5S audit repository
// ==========================================

use crate::db::open_connection;
use crate::domain::five_s::FiveSAudit;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{date_from_db, date_to_db, datetime_from_db, datetime_to_db, EntityFilter};
use rusqlite::{params, params_from_iter, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// 5S audit repository
pub struct FiveSRepository {
    conn: Arc<Mutex<Connection>>,
}

impl FiveSRepository {
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

    fn map_row(row: &Row<'_>) -> rusqlite::Result<FiveSAudit> {
        Ok(FiveSAudit {
            id: row.get(0)?,
            plant_id: row.get(1)?,
            line_id: row.get(2)?,
            audit_date: date_from_db(&row.get::<_, String>(3)?),
            auditor_id: row.get(4)?,
            sort_score: row.get(5)?,
            set_in_order_score: row.get(6)?,
            shine_score: row.get(7)?,
            standardize_score: row.get(8)?,
            sustain_score: row.get(9)?,
            overall_score: row.get(10)?,
            comments: row.get(11)?,
            created_at: datetime_from_db(&row.get::<_, String>(12)?),
        })
    }

    /// Query audits, newest audit date first
    pub fn find(&self, filter: &EntityFilter) -> RepositoryResult<Vec<FiveSAudit>> {
        let conn = self.get_conn()?;

        let mut sql = String::from(
            r#"
            SELECT
                id, plant_id, line_id, audit_date, auditor_id, sort_score,
                set_in_order_score, shine_score, standardize_score, sustain_score,
                overall_score, comments, created_at
            FROM five_s_audits
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
        sql.push_str(" ORDER BY audit_date DESC");

        let mut stmt = conn.prepare(&sql)?;
        let audits = stmt
            .query_map(params_from_iter(binds.iter()), Self::map_row)?
            .collect::<SqliteResult<Vec<FiveSAudit>>>()?;

        Ok(audits)
    }

    /// Insert one audit
    pub fn insert(&self, audit: &FiveSAudit) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO five_s_audits (
                id, plant_id, line_id, audit_date, auditor_id, sort_score,
                set_in_order_score, shine_score, standardize_score, sustain_score,
                overall_score, comments, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                audit.id,
                audit.plant_id,
                audit.line_id,
                date_to_db(audit.audit_date),
                audit.auditor_id,
                audit.sort_score,
                audit.set_in_order_score,
                audit.shine_score,
                audit.standardize_score,
                audit.sustain_score,
                audit.overall_score,
                audit.comments,
                datetime_to_db(audit.created_at),
            ],
        )?;
        Ok(())
    }
}
