// ==========================================
// Manufacturing Operations KPI Backend - Master data repository
// ==========================================
// Plants, production lines, products, employees. Read paths serve
// the dashboard dropdowns; write paths serve seeding and tests.
// ==========================================

use crate::db::open_connection;
use crate::domain::master::{Employee, Plant, Product, ProductionLine};
use crate::domain::types::LineStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{datetime_from_db, datetime_to_db};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

/// Master data repository
pub struct MasterDataRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MasterDataRepository {
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

    // ==========================================
    // Plants
    // ==========================================

    pub fn find_all_plants(&self) -> RepositoryResult<Vec<Plant>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, location, timezone, created_at, updated_at
            FROM plants
            ORDER BY name
            "#,
        )?;

        let plants = stmt
            .query_map([], |row| {
                Ok(Plant {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    location: row.get(2)?,
                    timezone: row.get(3)?,
                    created_at: datetime_from_db(&row.get::<_, String>(4)?),
                    updated_at: datetime_from_db(&row.get::<_, String>(5)?),
                })
            })?
            .collect::<SqliteResult<Vec<Plant>>>()?;

        Ok(plants)
    }

    pub fn insert_plant(&self, plant: &Plant) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO plants (id, name, location, timezone, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                plant.id,
                plant.name,
                plant.location,
                plant.timezone,
                datetime_to_db(plant.created_at),
                datetime_to_db(plant.updated_at),
            ],
        )?;
        Ok(())
    }

    // ==========================================
    // Production lines
    // ==========================================

    pub fn find_all_lines(&self) -> RepositoryResult<Vec<ProductionLine>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, plant_id, name, capacity_per_hour, status, created_at, updated_at
            FROM production_lines
            ORDER BY name
            "#,
        )?;

        let lines = stmt
            .query_map([], |row| {
                Ok(ProductionLine {
                    id: row.get(0)?,
                    plant_id: row.get(1)?,
                    name: row.get(2)?,
                    capacity_per_hour: row.get(3)?,
                    status: LineStatus::from_str(&row.get::<_, String>(4)?),
                    created_at: datetime_from_db(&row.get::<_, String>(5)?),
                    updated_at: datetime_from_db(&row.get::<_, String>(6)?),
                })
            })?
            .collect::<SqliteResult<Vec<ProductionLine>>>()?;

        Ok(lines)
    }

    pub fn insert_line(&self, line: &ProductionLine) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO production_lines (
                id, plant_id, name, capacity_per_hour, status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                line.id,
                line.plant_id,
                line.name,
                line.capacity_per_hour,
                line.status.to_db_str(),
                datetime_to_db(line.created_at),
                datetime_to_db(line.updated_at),
            ],
        )?;
        Ok(())
    }

    // ==========================================
    // Products
    // ==========================================

    pub fn find_all_products(&self) -> RepositoryResult<Vec<Product>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, sku, name, category, unit_price, target_yield, created_at, updated_at
            FROM products
            ORDER BY sku
            "#,
        )?;

        let products = stmt
            .query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    sku: row.get(1)?,
                    name: row.get(2)?,
                    category: row.get(3)?,
                    unit_price: row.get(4)?,
                    target_yield: row.get(5)?,
                    created_at: datetime_from_db(&row.get::<_, String>(6)?),
                    updated_at: datetime_from_db(&row.get::<_, String>(7)?),
                })
            })?
            .collect::<SqliteResult<Vec<Product>>>()?;

        Ok(products)
    }

    pub fn insert_product(&self, product: &Product) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO products (
                id, sku, name, category, unit_price, target_yield, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                product.id,
                product.sku,
                product.name,
                product.category,
                product.unit_price,
                product.target_yield,
                datetime_to_db(product.created_at),
                datetime_to_db(product.updated_at),
            ],
        )?;
        Ok(())
    }

    // ==========================================
    // Employees
    // ==========================================

    pub fn find_all_employees(&self) -> RepositoryResult<Vec<Employee>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, employee_id, name, role, shift, plant_id, created_at, updated_at
            FROM employees
            ORDER BY employee_id
            "#,
        )?;

        let employees = stmt
            .query_map([], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    employee_id: row.get(1)?,
                    name: row.get(2)?,
                    role: row.get(3)?,
                    shift: row.get(4)?,
                    plant_id: row.get(5)?,
                    created_at: datetime_from_db(&row.get::<_, String>(6)?),
                    updated_at: datetime_from_db(&row.get::<_, String>(7)?),
                })
            })?
            .collect::<SqliteResult<Vec<Employee>>>()?;

        Ok(employees)
    }

    pub fn insert_employee(&self, employee: &Employee) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO employees (
                id, employee_id, name, role, shift, plant_id, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                employee.id,
                employee.employee_id,
                employee.name,
                employee.role,
                employee.shift,
                employee.plant_id,
                datetime_to_db(employee.created_at),
                datetime_to_db(employee.updated_at),
            ],
        )?;
        Ok(())
    }
}
