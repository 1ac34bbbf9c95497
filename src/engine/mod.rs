// ==========================================
// Manufacturing Operations KPI Backend - Engine layer
// ==========================================
// Responsibility: derived-metric computation over in-memory data
// Rule: engines do no I/O; repositories and data sources feed them
// ==========================================

pub mod oee;

// Re-export core engine types
pub use oee::{OeeEngine, OeeMetric, ShiftAggregate, ShiftKey, DEFAULT_SHIFT_MINUTES};
