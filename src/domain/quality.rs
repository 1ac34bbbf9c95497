// ==========================================
// Manufacturing Operations KPI Backend - Quality inspections
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// QualityInspection
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityInspection {
    pub id: String,
    pub plant_id: String,
    pub line_id: String,
    pub product_id: String,
    pub batch_number: String,
    pub inspection_date: NaiveDate,
    pub inspector_id: Option<String>,
    pub inspected_quantity: i64,
    pub passed_quantity: i64,
    pub failed_quantity: i64,
    pub yield_percent: f64, // derived, never accepted from input
    pub defect_category: Option<String>,
    pub comments: Option<String>,
    pub created_at: NaiveDateTime,
}

// ==========================================
// NewQualityInspection - submission input
// ==========================================
// yield_percent is derived by the API layer, see `compute_yield_percent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQualityInspection {
    pub plant_id: String,
    pub line_id: String,
    pub product_id: String,
    pub batch_number: String,
    pub inspection_date: NaiveDate,
    #[serde(default)]
    pub inspector_id: Option<String>,
    pub inspected_quantity: i64,
    pub passed_quantity: i64,
    pub failed_quantity: i64,
    #[serde(default)]
    pub defect_category: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Yield of an inspection batch: passed over inspected, in percent.
///
/// An empty batch yields 0 rather than dividing by zero.
pub fn compute_yield_percent(inspected_quantity: i64, passed_quantity: i64) -> f64 {
    if inspected_quantity > 0 {
        (passed_quantity as f64 / inspected_quantity as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_percent() {
        assert_eq!(compute_yield_percent(100, 94), 94.0);
        assert_eq!(compute_yield_percent(0, 0), 0.0);
    }
}
