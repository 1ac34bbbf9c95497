// ==========================================
// Manufacturing Operations KPI Backend - Domain layer
// ==========================================
// Responsibility: domain entities, typed enums, per-record derivations
// Rule: no data access logic, no engine logic
// ==========================================

pub mod five_s;
pub mod kaizen;
pub mod master;
pub mod production;
pub mod quality;
pub mod resource;
pub mod types;

// Re-export core types
pub use five_s::{FiveSAudit, NewFiveSAudit};
pub use kaizen::{KaizenIdea, NewKaizenIdea};
pub use master::{Employee, Plant, Product, ProductionLine};
pub use production::{NewProductionRecord, ProductionRecord};
pub use quality::{NewQualityInspection, QualityInspection};
pub use resource::{NewResourceConsumption, ResourceConsumption};
pub use types::{KaizenCategory, KaizenPriority, KaizenStatus, LineStatus};
