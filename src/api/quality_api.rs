// ==========================================
// Manufacturing Operations KPI Backend - Quality API
// ==========================================
// yield_percent is derived here on every submission, identically
// for both data sources.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::datasource::ManufacturingDataSource;
use crate::domain::quality::compute_yield_percent;
use crate::domain::{NewQualityInspection, QualityInspection};
use crate::repository::EntityFilter;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Quality inspection API
pub struct QualityApi {
    source: Arc<dyn ManufacturingDataSource>,
}

impl QualityApi {
    pub fn new(source: Arc<dyn ManufacturingDataSource>) -> Self {
        Self { source }
    }

    /// Fetch inspections, newest first
    pub async fn fetch(&self, filter: &EntityFilter) -> ApiResult<Vec<QualityInspection>> {
        Ok(self.source.fetch_quality(filter).await?)
    }

    /// Validate and store one inspection, deriving its yield
    pub async fn submit(&self, input: NewQualityInspection) -> ApiResult<QualityInspection> {
        if input.batch_number.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "batch_number must not be empty".to_string(),
            ));
        }
        let quantities = [
            ("inspected_quantity", input.inspected_quantity),
            ("passed_quantity", input.passed_quantity),
            ("failed_quantity", input.failed_quantity),
        ];
        for (field, value) in quantities {
            if value < 0 {
                return Err(ApiError::InvalidInput(format!(
                    "{} must not be negative, got {}",
                    field, value
                )));
            }
        }

        let inspection = QualityInspection {
            id: Uuid::new_v4().to_string(),
            plant_id: input.plant_id,
            line_id: input.line_id,
            product_id: input.product_id,
            batch_number: input.batch_number,
            inspection_date: input.inspection_date,
            inspector_id: input.inspector_id,
            inspected_quantity: input.inspected_quantity,
            passed_quantity: input.passed_quantity,
            failed_quantity: input.failed_quantity,
            yield_percent: compute_yield_percent(input.inspected_quantity, input.passed_quantity),
            defect_category: input.defect_category,
            comments: input.comments,
            created_at: Utc::now().naive_utc(),
        };

        self.source.insert_quality(&inspection).await?;
        tracing::info!(
            id = %inspection.id,
            batch = %inspection.batch_number,
            yield_percent = inspection.yield_percent,
            "quality inspection stored"
        );
        Ok(inspection)
    }
}
