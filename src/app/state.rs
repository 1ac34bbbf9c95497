// ==========================================
// Manufacturing Operations KPI Backend - Application state
// ==========================================
// Composition root: builds the configured data source once and hands
// shared references to every API.
// ==========================================

use crate::api::{FiveSApi, KaizenApi, MasterDataApi, ProductionApi, QualityApi, ResourceApi};
use crate::config::{AppConfig, DataSourceConfig};
use crate::datasource::{FixtureDataSource, ManufacturingDataSource, SqliteDataSource};
use crate::engine::OeeEngine;
use std::sync::Arc;

/// Application state holding the wired API set
pub struct AppState {
    pub config: AppConfig,
    pub master: MasterDataApi,
    pub production: ProductionApi,
    pub quality: QualityApi,
    pub five_s: FiveSApi,
    pub resource: ResourceApi,
    pub kaizen: KaizenApi,
}

impl AppState {
    /// Build the application from explicit configuration
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let source: Arc<dyn ManufacturingDataSource> = match &config.data_source {
            DataSourceConfig::Fixture => {
                tracing::info!("data source: seeded fixture set");
                Arc::new(FixtureDataSource::seeded())
            }
            DataSourceConfig::Sqlite { db_path } => {
                tracing::info!(db_path = %db_path, "data source: sqlite");
                Arc::new(SqliteDataSource::new(db_path)?)
            }
        };

        Ok(Self::from_source(config, source))
    }

    /// Build the application over a caller-provided data source
    ///
    /// Used by tests and by embedders that manage their own storage.
    pub fn from_source(config: AppConfig, source: Arc<dyn ManufacturingDataSource>) -> Self {
        let engine = OeeEngine::with_shift_minutes(config.shift_minutes);

        Self {
            master: MasterDataApi::new(Arc::clone(&source)),
            production: ProductionApi::new(Arc::clone(&source), engine),
            quality: QualityApi::new(Arc::clone(&source)),
            five_s: FiveSApi::new(Arc::clone(&source)),
            resource: ResourceApi::new(Arc::clone(&source)),
            kaizen: KaizenApi::new(source),
            config,
        }
    }
}
