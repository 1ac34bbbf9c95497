// ==========================================
// Manufacturing Operations KPI Backend - Application layer
// ==========================================
// Responsibility: wire configuration, data source, engine and APIs
// together. This is the only place a data source is selected.
// ==========================================

pub mod state;

pub use state::AppState;

use std::path::PathBuf;

/// Default database location under the platform data directory
pub fn get_default_db_path() -> String {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("manufacturing-ops")
        .join("manufacturing_ops.db")
        .to_string_lossy()
        .to_string()
}
