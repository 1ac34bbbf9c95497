// ==========================================
// Manufacturing Operations KPI Backend - Data source layer
// ==========================================
// Responsibility: one interface over the two places dashboard data
// can live: the seeded in-memory fixture set (demo installs, tests)
// and the SQLite store (live installs).
// Rule: selection happens in the composition root via AppConfig,
// never through an ambient environment check inside a module.
// ==========================================

pub mod fixture;
pub mod fixtures;
pub mod sqlite;

pub use fixture::FixtureDataSource;
pub use fixtures::FixtureDataSet;
pub use sqlite::SqliteDataSource;

use crate::domain::{
    Employee, FiveSAudit, KaizenIdea, Plant, Product, ProductionLine, ProductionRecord,
    QualityInspection, ResourceConsumption,
};
use crate::repository::{EntityFilter, ProductionQuery, RepositoryResult};
use async_trait::async_trait;

// ==========================================
// ManufacturingDataSource
// ==========================================

/// Swappable data source behind the KPI APIs
///
/// Fetch operations return rows already ordered the way the dashboard
/// shows them (newest first). Insert operations store fully formed
/// records; identity, timestamps and derived fields are assigned by
/// the API layer before the record reaches a source.
#[async_trait]
pub trait ManufacturingDataSource: Send + Sync {
    // ===== Master data =====
    async fn fetch_plants(&self) -> RepositoryResult<Vec<Plant>>;
    async fn fetch_production_lines(&self) -> RepositoryResult<Vec<ProductionLine>>;
    async fn fetch_products(&self) -> RepositoryResult<Vec<Product>>;
    async fn fetch_employees(&self) -> RepositoryResult<Vec<Employee>>;

    // ===== Production =====
    async fn fetch_production(
        &self,
        query: &ProductionQuery,
    ) -> RepositoryResult<Vec<ProductionRecord>>;
    async fn insert_production(&self, record: &ProductionRecord) -> RepositoryResult<()>;

    // ===== Quality =====
    async fn fetch_quality(
        &self,
        filter: &EntityFilter,
    ) -> RepositoryResult<Vec<QualityInspection>>;
    async fn insert_quality(&self, inspection: &QualityInspection) -> RepositoryResult<()>;

    // ===== 5S =====
    async fn fetch_five_s(&self, filter: &EntityFilter) -> RepositoryResult<Vec<FiveSAudit>>;
    async fn insert_five_s(&self, audit: &FiveSAudit) -> RepositoryResult<()>;

    // ===== Resources =====
    async fn fetch_resource(
        &self,
        filter: &EntityFilter,
    ) -> RepositoryResult<Vec<ResourceConsumption>>;
    async fn insert_resource(&self, consumption: &ResourceConsumption) -> RepositoryResult<()>;

    // ===== Kaizen =====
    async fn fetch_kaizen(&self, filter: &EntityFilter) -> RepositoryResult<Vec<KaizenIdea>>;
    async fn insert_kaizen(&self, idea: &KaizenIdea) -> RepositoryResult<()>;
}
