// ==========================================
// Manufacturing Operations KPI Backend - API layer
// ==========================================
// Responsibility: input validation, identity and timestamp
// assignment, derived-field computation, error mapping
// Rule: APIs never touch SQL; everything goes through a data source
// ==========================================

pub mod error;
pub mod five_s_api;
pub mod kaizen_api;
pub mod master_api;
pub mod production_api;
pub mod quality_api;
pub mod resource_api;

pub use error::{ApiError, ApiResult};
pub use five_s_api::FiveSApi;
pub use kaizen_api::KaizenApi;
pub use master_api::{MasterData, MasterDataApi};
pub use production_api::{ProductionApi, ProductionOverview};
pub use quality_api::QualityApi;
pub use resource_api::ResourceApi;
