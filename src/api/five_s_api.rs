// ==========================================
// Manufacturing Operations KPI Backend - 5S API
// ==========================================
// overall_score is derived here on every submission.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::datasource::ManufacturingDataSource;
use crate::domain::{FiveSAudit, NewFiveSAudit};
use crate::repository::EntityFilter;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// 5S audit API
pub struct FiveSApi {
    source: Arc<dyn ManufacturingDataSource>,
}

impl FiveSApi {
    pub fn new(source: Arc<dyn ManufacturingDataSource>) -> Self {
        Self { source }
    }

    /// Fetch audits, newest first
    pub async fn fetch(&self, filter: &EntityFilter) -> ApiResult<Vec<FiveSAudit>> {
        Ok(self.source.fetch_five_s(filter).await?)
    }

    /// Validate and store one audit, deriving its overall score
    pub async fn submit(&self, input: NewFiveSAudit) -> ApiResult<FiveSAudit> {
        let scores = [
            ("sort_score", input.sort_score),
            ("set_in_order_score", input.set_in_order_score),
            ("shine_score", input.shine_score),
            ("standardize_score", input.standardize_score),
            ("sustain_score", input.sustain_score),
        ];
        for (field, value) in scores {
            if !(0..=100).contains(&value) {
                return Err(ApiError::InvalidInput(format!(
                    "{} must be between 0 and 100, got {}",
                    field, value
                )));
            }
        }

        let overall_score = input.compute_overall_score();
        let audit = FiveSAudit {
            id: Uuid::new_v4().to_string(),
            plant_id: input.plant_id,
            line_id: input.line_id,
            audit_date: input.audit_date,
            auditor_id: input.auditor_id,
            sort_score: input.sort_score,
            set_in_order_score: input.set_in_order_score,
            shine_score: input.shine_score,
            standardize_score: input.standardize_score,
            sustain_score: input.sustain_score,
            overall_score,
            comments: input.comments,
            created_at: Utc::now().naive_utc(),
        };

        self.source.insert_five_s(&audit).await?;
        tracing::info!(
            id = %audit.id,
            date = %audit.audit_date,
            overall = audit.overall_score,
            "5S audit stored"
        );
        Ok(audit)
    }
}
