// ==========================================
// Manufacturing Operations KPI Backend - SQLite-backed source
// ==========================================
// Thin async adapter over the repository layer. All repositories
// share one connection so the uniform PRAGMA set applies everywhere.
// ==========================================

use crate::datasource::ManufacturingDataSource;
use crate::db;
use crate::domain::{
    Employee, FiveSAudit, KaizenIdea, Plant, Product, ProductionLine, ProductionRecord,
    QualityInspection, ResourceConsumption,
};
use crate::repository::{
    EntityFilter, FiveSRepository, KaizenRepository, MasterDataRepository, ProductionQuery,
    ProductionRepository, QualityRepository, RepositoryResult, ResourceRepository,
};
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// SQLite-backed data source
pub struct SqliteDataSource {
    master: MasterDataRepository,
    production: ProductionRepository,
    quality: QualityRepository,
    five_s: FiveSRepository,
    resource: ResourceRepository,
    kaizen: KaizenRepository,
}

impl SqliteDataSource {
    /// Open a source on a database file, creating the schema if needed
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = db::open_connection(db_path)?;
        db::init_schema(&conn)?;
        Ok(Self::from_connection(Arc::new(Mutex::new(conn))))
    }

    /// Build a source over an already configured shared connection
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            master: MasterDataRepository::from_connection(Arc::clone(&conn)),
            production: ProductionRepository::from_connection(Arc::clone(&conn)),
            quality: QualityRepository::from_connection(Arc::clone(&conn)),
            five_s: FiveSRepository::from_connection(Arc::clone(&conn)),
            resource: ResourceRepository::from_connection(Arc::clone(&conn)),
            kaizen: KaizenRepository::from_connection(conn),
        }
    }
}

#[async_trait]
impl ManufacturingDataSource for SqliteDataSource {
    async fn fetch_plants(&self) -> RepositoryResult<Vec<Plant>> {
        self.master.find_all_plants()
    }

    async fn fetch_production_lines(&self) -> RepositoryResult<Vec<ProductionLine>> {
        self.master.find_all_lines()
    }

    async fn fetch_products(&self) -> RepositoryResult<Vec<Product>> {
        self.master.find_all_products()
    }

    async fn fetch_employees(&self) -> RepositoryResult<Vec<Employee>> {
        self.master.find_all_employees()
    }

    async fn fetch_production(
        &self,
        query: &ProductionQuery,
    ) -> RepositoryResult<Vec<ProductionRecord>> {
        self.production.find(query)
    }

    async fn insert_production(&self, record: &ProductionRecord) -> RepositoryResult<()> {
        self.production.insert(record)
    }

    async fn fetch_quality(
        &self,
        filter: &EntityFilter,
    ) -> RepositoryResult<Vec<QualityInspection>> {
        self.quality.find(filter)
    }

    async fn insert_quality(&self, inspection: &QualityInspection) -> RepositoryResult<()> {
        self.quality.insert(inspection)
    }

    async fn fetch_five_s(&self, filter: &EntityFilter) -> RepositoryResult<Vec<FiveSAudit>> {
        self.five_s.find(filter)
    }

    async fn insert_five_s(&self, audit: &FiveSAudit) -> RepositoryResult<()> {
        self.five_s.insert(audit)
    }

    async fn fetch_resource(
        &self,
        filter: &EntityFilter,
    ) -> RepositoryResult<Vec<ResourceConsumption>> {
        self.resource.find(filter)
    }

    async fn insert_resource(&self, consumption: &ResourceConsumption) -> RepositoryResult<()> {
        self.resource.insert(consumption)
    }

    async fn fetch_kaizen(&self, filter: &EntityFilter) -> RepositoryResult<Vec<KaizenIdea>> {
        self.kaizen.find(filter)
    }

    async fn insert_kaizen(&self, idea: &KaizenIdea) -> RepositoryResult<()> {
        self.kaizen.insert(idea)
    }
}
