// ==========================================
// Manufacturing Operations KPI Backend - 5S audits
// ==========================================
// Five category scores (0..100 each), overall score is their mean.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// FiveSAudit
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveSAudit {
    pub id: String,
    pub plant_id: String,
    pub line_id: String,
    pub audit_date: NaiveDate,
    pub auditor_id: Option<String>,
    pub sort_score: i64,
    pub set_in_order_score: i64,
    pub shine_score: i64,
    pub standardize_score: i64,
    pub sustain_score: i64,
    pub overall_score: f64, // derived, never accepted from input
    pub comments: Option<String>,
    pub created_at: NaiveDateTime,
}

// ==========================================
// NewFiveSAudit - submission input
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFiveSAudit {
    pub plant_id: String,
    pub line_id: String,
    pub audit_date: NaiveDate,
    #[serde(default)]
    pub auditor_id: Option<String>,
    pub sort_score: i64,
    pub set_in_order_score: i64,
    pub shine_score: i64,
    pub standardize_score: i64,
    pub sustain_score: i64,
    #[serde(default)]
    pub comments: Option<String>,
}

impl NewFiveSAudit {
    /// Mean of the five category scores
    pub fn compute_overall_score(&self) -> f64 {
        (self.sort_score
            + self.set_in_order_score
            + self.shine_score
            + self.standardize_score
            + self.sustain_score) as f64
            / 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_overall_score_is_mean_of_categories() {
        let audit = NewFiveSAudit {
            plant_id: "p1".to_string(),
            line_id: "l1".to_string(),
            audit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            auditor_id: None,
            sort_score: 85,
            set_in_order_score: 78,
            shine_score: 92,
            standardize_score: 88,
            sustain_score: 75,
            comments: None,
        };
        assert_eq!(audit.compute_overall_score(), 83.6);
    }
}
