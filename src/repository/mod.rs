// ==========================================
// Manufacturing Operations KPI Backend - Repository layer
// ==========================================
// Responsibility: SQLite data access for master and fact tables
// Rule: repositories contain no business logic and no derived-metric
// computation; they store what they are given
// ==========================================

pub mod error;
pub mod five_s_repo;
pub mod kaizen_repo;
pub mod master_repo;
pub mod production_repo;
pub mod quality_repo;
pub mod resource_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use five_s_repo::FiveSRepository;
pub use kaizen_repo::KaizenRepository;
pub use master_repo::MasterDataRepository;
pub use production_repo::ProductionRepository;
pub use quality_repo::QualityRepository;
pub use resource_repo::ResourceRepository;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Cap applied to production fetches when the caller does not narrow
/// the date range; the dashboard never renders more than this.
pub const DEFAULT_PRODUCTION_FETCH_LIMIT: u32 = 100;

// ==========================================
// Query parameter types
// ==========================================

/// Plant/line filter shared by the fact-table fetch operations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityFilter {
    pub plant_id: Option<String>,
    pub line_id: Option<String>,
}

impl EntityFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_plant(plant_id: &str) -> Self {
        Self {
            plant_id: Some(plant_id.to_string()),
            line_id: None,
        }
    }
}

/// Inclusive calendar-date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Filter for production-record fetches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionQuery {
    pub plant_id: Option<String>,
    pub line_id: Option<String>,
    pub date_range: Option<DateRange>,
    pub limit: u32,
}

impl Default for ProductionQuery {
    fn default() -> Self {
        Self {
            plant_id: None,
            line_id: None,
            date_range: None,
            limit: DEFAULT_PRODUCTION_FETCH_LIMIT,
        }
    }
}

// ==========================================
// Storage format helpers
// ==========================================
// Dates and timestamps are stored as text; unparseable stored values
// fall back to the epoch instead of aborting a whole result set.

pub(crate) fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn date_from_db(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
}

pub(crate) fn datetime_to_db(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub(crate) fn datetime_from_db(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap_or_else(|_| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    })
}
