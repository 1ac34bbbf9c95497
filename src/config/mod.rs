// ==========================================
// Manufacturing Operations KPI Backend - Configuration layer
// ==========================================
// Responsibility: the explicit configuration handed to the
// composition root. Data-source selection lives here and nowhere
// else; no module consults the environment on its own.
// ==========================================

use crate::engine::DEFAULT_SHIFT_MINUTES;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// DataSourceConfig - where dashboard data lives
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSourceConfig {
    /// Seeded in-memory demo data
    Fixture,
    /// SQLite database file
    Sqlite { db_path: String },
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        // demo installs work out of the box with no database configured
        DataSourceConfig::Fixture
    }
}

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_source: DataSourceConfig,
    /// Reference shift window for OEE availability, in minutes.
    /// Real shift lengths vary by plant; 480 is the standard 8-hour shift.
    pub shift_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DataSourceConfig::default(),
            shift_minutes: DEFAULT_SHIFT_MINUTES,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    ///
    /// Missing keys fall back to their defaults, so a partial file
    /// such as `{"shift_minutes": 600}` is valid.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Config for the seeded demo source
    pub fn fixture() -> Self {
        Self {
            data_source: DataSourceConfig::Fixture,
            ..Self::default()
        }
    }

    /// Config for a SQLite-backed install
    pub fn sqlite(db_path: &str) -> Self {
        Self {
            data_source: DataSourceConfig::Sqlite {
                db_path: db_path.to_string(),
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixture_source() {
        let config = AppConfig::default();
        assert_eq!(config.data_source, DataSourceConfig::Fixture);
        assert_eq!(config.shift_minutes, DEFAULT_SHIFT_MINUTES);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"shift_minutes": 600}"#).unwrap();
        assert_eq!(config.shift_minutes, 600);
        assert_eq!(config.data_source, DataSourceConfig::Fixture);
    }

    #[test]
    fn test_sqlite_source_from_json() {
        let config: AppConfig = serde_json::from_str(
            r#"{"data_source": {"kind": "sqlite", "db_path": "/tmp/ops.db"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.data_source,
            DataSourceConfig::Sqlite {
                db_path: "/tmp/ops.db".to_string()
            }
        );
    }
}
