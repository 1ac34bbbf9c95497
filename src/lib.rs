// ==========================================
// Manufacturing Operations KPI Backend - Core Library
// ==========================================
// Stack: Rust + SQLite
// Positioning: data and metrics layer behind the shop-floor
// operations dashboard (UI composition lives elsewhere)
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Data source layer - fixture / live-backend switch
pub mod datasource;

// Engine layer - derived metrics
pub mod engine;

// Importer layer - external data
pub mod importer;

// Configuration layer
pub mod config;

// Database infrastructure (connection init / uniform PRAGMAs / schema)
pub mod db;

// Logging
pub mod logging;

// API layer - business interfaces
pub mod api;

// Application layer - composition root
pub mod app;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{KaizenCategory, KaizenPriority, KaizenStatus, LineStatus};

// Domain entities
pub use domain::{
    Employee, FiveSAudit, KaizenIdea, NewFiveSAudit, NewKaizenIdea, NewProductionRecord,
    NewQualityInspection, NewResourceConsumption, Plant, Product, ProductionLine,
    ProductionRecord, QualityInspection, ResourceConsumption,
};

// Engine
pub use engine::{OeeEngine, OeeMetric, ShiftAggregate, ShiftKey};

// Data sources
pub use datasource::{FixtureDataSource, ManufacturingDataSource, SqliteDataSource};

// API
pub use api::{
    FiveSApi, KaizenApi, MasterDataApi, ProductionApi, QualityApi, ResourceApi,
};

// Configuration
pub use config::{AppConfig, DataSourceConfig};

// Application
pub use app::AppState;

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Manufacturing Operations KPI Backend";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
