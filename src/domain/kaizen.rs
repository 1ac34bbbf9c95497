// ==========================================
// Manufacturing Operations KPI Backend - Kaizen ideas
// ==========================================

use crate::domain::types::{KaizenCategory, KaizenPriority, KaizenStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// KaizenIdea
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KaizenIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: KaizenCategory,
    pub priority: KaizenPriority,
    pub current_state: String,
    pub proposed_solution: String,
    pub expected_benefit: String,
    pub estimated_savings: f64, // annualized, in plant currency
    pub submitter_id: Option<String>,
    pub status: KaizenStatus,
    pub implementation_date: Option<NaiveDate>,
    pub actual_savings: Option<f64>, // known only after implementation
    pub plant_id: String,
    pub line_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ==========================================
// NewKaizenIdea - submission input
// ==========================================
// New ideas always enter the funnel as Submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewKaizenIdea {
    pub title: String,
    pub description: String,
    pub category: KaizenCategory,
    pub priority: KaizenPriority,
    pub current_state: String,
    pub proposed_solution: String,
    pub expected_benefit: String,
    pub estimated_savings: f64,
    #[serde(default)]
    pub submitter_id: Option<String>,
    pub plant_id: String,
    pub line_id: String,
}
