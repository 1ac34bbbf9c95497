// ==========================================
// Manufacturing Operations KPI Backend - Resource consumption
// ==========================================
// Per-shift utility and labor usage. total_cost is the sum of the
// individual cost components.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// ResourceConsumption
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConsumption {
    pub id: String,
    pub plant_id: String,
    pub line_id: String,
    pub consumption_date: NaiveDate,
    pub shift: String,
    pub labor_hours: f64,
    pub labor_cost: f64,
    pub power_kwh: f64,
    pub power_cost: f64,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub other_costs: f64,
    pub total_cost: f64, // derived, never accepted from input
    pub created_at: NaiveDateTime,
}

// ==========================================
// NewResourceConsumption - submission input
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResourceConsumption {
    pub plant_id: String,
    pub line_id: String,
    pub consumption_date: NaiveDate,
    pub shift: String,
    pub labor_hours: f64,
    pub labor_cost: f64,
    pub power_kwh: f64,
    pub power_cost: f64,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub other_costs: f64,
}

impl NewResourceConsumption {
    /// Sum of all cost components
    pub fn compute_total_cost(&self) -> f64 {
        self.labor_cost + self.power_cost + self.fuel_cost + self.maintenance_cost + self.other_costs
    }
}
