// ==========================================
// Manufacturing Operations KPI Backend - Resource consumption repository
// ==========================================

use crate::db::open_connection;
use crate::domain::resource::ResourceConsumption;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{date_from_db, date_to_db, datetime_from_db, datetime_to_db, EntityFilter};
use rusqlite::{params, params_from_iter, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// Resource consumption repository
pub struct ResourceRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ResourceRepository {
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

    fn map_row(row: &Row<'_>) -> rusqlite::Result<ResourceConsumption> {
        Ok(ResourceConsumption {
            id: row.get(0)?,
            plant_id: row.get(1)?,
            line_id: row.get(2)?,
            consumption_date: date_from_db(&row.get::<_, String>(3)?),
            shift: row.get(4)?,
            labor_hours: row.get(5)?,
            labor_cost: row.get(6)?,
            power_kwh: row.get(7)?,
            power_cost: row.get(8)?,
            fuel_liters: row.get(9)?,
            fuel_cost: row.get(10)?,
            maintenance_cost: row.get(11)?,
            other_costs: row.get(12)?,
            total_cost: row.get(13)?,
            created_at: datetime_from_db(&row.get::<_, String>(14)?),
        })
    }

    /// Query consumption rows, newest consumption date first
    pub fn find(&self, filter: &EntityFilter) -> RepositoryResult<Vec<ResourceConsumption>> {
        let conn = self.get_conn()?;

        let mut sql = String::from(
            r#"
            SELECT
                id, plant_id, line_id, consumption_date, shift, labor_hours,
                labor_cost, power_kwh, power_cost, fuel_liters, fuel_cost,
                maintenance_cost, other_costs, total_cost, created_at
            FROM resource_consumption
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
        sql.push_str(" ORDER BY consumption_date DESC");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(binds.iter()), Self::map_row)?
            .collect::<SqliteResult<Vec<ResourceConsumption>>>()?;

        Ok(rows)
    }

    /// Insert one consumption row
    pub fn insert(&self, consumption: &ResourceConsumption) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO resource_consumption (
                id, plant_id, line_id, consumption_date, shift, labor_hours,
                labor_cost, power_kwh, power_cost, fuel_liters, fuel_cost,
                maintenance_cost, other_costs, total_cost, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                consumption.id,
                consumption.plant_id,
                consumption.line_id,
                date_to_db(consumption.consumption_date),
                consumption.shift,
                consumption.labor_hours,
                consumption.labor_cost,
                consumption.power_kwh,
                consumption.power_cost,
                consumption.fuel_liters,
                consumption.fuel_cost,
                consumption.maintenance_cost,
                consumption.other_costs,
                consumption.total_cost,
                datetime_to_db(consumption.created_at),
            ],
        )?;
        Ok(())
    }
}
