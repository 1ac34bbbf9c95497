// ==========================================
// Manufacturing Operations KPI Backend - Production records
// ==========================================
// One record per product/operator/hour observation. Records are
// immutable inputs to the OEE engine; the counters are optional
// because upstream entry forms may leave them blank, and a blank
// counter contributes zero to every aggregate.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionRecord
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub id: String,
    pub plant_id: String,
    pub line_id: String,
    pub product_id: String,
    pub shift: String, // shift label, e.g. "Shift 1"
    pub production_date: NaiveDate,
    pub hour_of_day: i64, // 1-based hour within the shift
    #[serde(default)]
    pub planned_production: Option<i64>,
    #[serde(default)]
    pub actual_production: Option<i64>,
    #[serde(default)]
    pub good_units: Option<i64>,
    #[serde(default)]
    pub rejected_units: Option<i64>,
    #[serde(default)]
    pub downtime_minutes: Option<i64>, // absent when the line never stopped
    #[serde(default)]
    pub downtime_reason: Option<String>,
    #[serde(default)]
    pub operator_id: Option<String>,
    pub created_at: NaiveDateTime,
}

// ==========================================
// NewProductionRecord - submission input
// ==========================================
// Identity and timestamps are assigned by the API layer on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductionRecord {
    pub plant_id: String,
    pub line_id: String,
    pub product_id: String,
    pub shift: String,
    pub production_date: NaiveDate,
    pub hour_of_day: i64,
    #[serde(default)]
    pub planned_production: Option<i64>,
    #[serde(default)]
    pub actual_production: Option<i64>,
    #[serde(default)]
    pub good_units: Option<i64>,
    #[serde(default)]
    pub rejected_units: Option<i64>,
    #[serde(default)]
    pub downtime_minutes: Option<i64>,
    #[serde(default)]
    pub downtime_reason: Option<String>,
    #[serde(default)]
    pub operator_id: Option<String>,
}
