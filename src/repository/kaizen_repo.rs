// ==========================================
// Manufacturing Operations KPI Backend - Kaizen idea repository
// ==========================================

use crate::db::open_connection;
use crate::domain::kaizen::KaizenIdea;
use crate::domain::types::{KaizenCategory, KaizenPriority, KaizenStatus};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{date_from_db, date_to_db, datetime_from_db, datetime_to_db, EntityFilter};
use rusqlite::{params, params_from_iter, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// Kaizen idea repository
pub struct KaizenRepository {
    conn: Arc<Mutex<Connection>>,
}

impl KaizenRepository {
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

    fn map_row(row: &Row<'_>) -> rusqlite::Result<KaizenIdea> {
        Ok(KaizenIdea {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            category: KaizenCategory::from_str(&row.get::<_, String>(3)?),
            priority: KaizenPriority::from_str(&row.get::<_, String>(4)?),
            current_state: row.get(5)?,
            proposed_solution: row.get(6)?,
            expected_benefit: row.get(7)?,
            estimated_savings: row.get(8)?,
            submitter_id: row.get(9)?,
            status: KaizenStatus::from_str(&row.get::<_, String>(10)?),
            implementation_date: row
                .get::<_, Option<String>>(11)?
                .map(|raw| date_from_db(&raw)),
            actual_savings: row.get(12)?,
            plant_id: row.get(13)?,
            line_id: row.get(14)?,
            created_at: datetime_from_db(&row.get::<_, String>(15)?),
            updated_at: datetime_from_db(&row.get::<_, String>(16)?),
        })
    }

    /// Query ideas, most recently submitted first
    pub fn find(&self, filter: &EntityFilter) -> RepositoryResult<Vec<KaizenIdea>> {
        let conn = self.get_conn()?;

        let mut sql = String::from(
            r#"
            SELECT
                id, title, description, category, priority, current_state,
                proposed_solution, expected_benefit, estimated_savings, submitter_id,
                status, implementation_date, actual_savings, plant_id, line_id,
                created_at, updated_at
            FROM kaizen_ideas
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
        sql.push_str(" ORDER BY created_at DESC");

        let mut stmt = conn.prepare(&sql)?;
        let ideas = stmt
            .query_map(params_from_iter(binds.iter()), Self::map_row)?
            .collect::<SqliteResult<Vec<KaizenIdea>>>()?;

        Ok(ideas)
    }

    /// Insert one idea
    pub fn insert(&self, idea: &KaizenIdea) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO kaizen_ideas (
                id, title, description, category, priority, current_state,
                proposed_solution, expected_benefit, estimated_savings, submitter_id,
                status, implementation_date, actual_savings, plant_id, line_id,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
            "#,
            params![
                idea.id,
                idea.title,
                idea.description,
                idea.category.to_db_str(),
                idea.priority.to_db_str(),
                idea.current_state,
                idea.proposed_solution,
                idea.expected_benefit,
                idea.estimated_savings,
                idea.submitter_id,
                idea.status.to_db_str(),
                idea.implementation_date.map(date_to_db),
                idea.actual_savings,
                idea.plant_id,
                idea.line_id,
                datetime_to_db(idea.created_at),
                datetime_to_db(idea.updated_at),
            ],
        )?;
        Ok(())
    }
}
