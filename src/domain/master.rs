// ==========================================
// Manufacturing Operations KPI Backend - Master data entities
// ==========================================
// Plants, production lines, products and employees are reference data:
// they are fetched for dropdowns and joins, never derived.
// ==========================================

use crate::domain::types::LineStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Plant
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub location: String,
    pub timezone: String, // IANA name, e.g. America/Detroit
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ==========================================
// ProductionLine
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionLine {
    pub id: String,
    pub plant_id: String,
    pub name: String,
    pub capacity_per_hour: i64, // nominal units per hour
    pub status: LineStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ProductionLine {
    pub fn is_active(&self) -> bool {
        self.status == LineStatus::Active
    }
}

// ==========================================
// Product
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub target_yield: f64, // percent, quality target for this product
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ==========================================
// Employee
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub employee_id: String, // badge number, unique
    pub name: String,
    pub role: String,
    pub shift: String, // shift label, e.g. "Shift 1"
    pub plant_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
