// ==========================================
// Manufacturing Operations KPI Backend - Production API
// ==========================================
// Responsibility: production record fetch + submit, and the OEE
// metric list derived from each fetch result. The engine runs over
// exactly the records a fetch returned, after the fetch completes.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::datasource::ManufacturingDataSource;
use crate::domain::{NewProductionRecord, ProductionRecord};
use crate::engine::{OeeEngine, OeeMetric};
use crate::repository::ProductionQuery;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Fetch result: the raw records plus their per-shift OEE metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOverview {
    pub records: Vec<ProductionRecord>,
    pub oee: Vec<OeeMetric>,
}

/// Production API
pub struct ProductionApi {
    source: Arc<dyn ManufacturingDataSource>,
    engine: OeeEngine,
}

impl ProductionApi {
    pub fn new(source: Arc<dyn ManufacturingDataSource>, engine: OeeEngine) -> Self {
        Self { source, engine }
    }

    /// Fetch production records and their OEE metrics
    ///
    /// # Parameters
    /// - query: plant/line/date-range filters and the row cap
    ///
    /// # Returns
    /// Records newest first, plus one OEE metric per (shift, date)
    /// group present in those records
    pub async fn fetch(&self, query: &ProductionQuery) -> ApiResult<ProductionOverview> {
        let records = self.source.fetch_production(query).await?;
        let oee = self.engine.compute(&records);

        tracing::debug!(
            records = records.len(),
            shift_groups = oee.len(),
            "production data fetched"
        );

        Ok(ProductionOverview { records, oee })
    }

    /// Validate and store one production record
    ///
    /// # Returns
    /// The stored record with its assigned id and timestamp
    pub async fn submit(&self, input: NewProductionRecord) -> ApiResult<ProductionRecord> {
        validate(&input)?;

        let record = ProductionRecord {
            id: Uuid::new_v4().to_string(),
            plant_id: input.plant_id,
            line_id: input.line_id,
            product_id: input.product_id,
            shift: input.shift,
            production_date: input.production_date,
            hour_of_day: input.hour_of_day,
            planned_production: input.planned_production,
            actual_production: input.actual_production,
            good_units: input.good_units,
            rejected_units: input.rejected_units,
            downtime_minutes: input.downtime_minutes,
            downtime_reason: input.downtime_reason,
            operator_id: input.operator_id,
            created_at: Utc::now().naive_utc(),
        };

        self.source.insert_production(&record).await?;
        tracing::info!(
            id = %record.id,
            shift = %record.shift,
            date = %record.production_date,
            "production record stored"
        );
        Ok(record)
    }
}

fn validate(input: &NewProductionRecord) -> ApiResult<()> {
    if input.plant_id.trim().is_empty() {
        return Err(ApiError::InvalidInput("plant_id must not be empty".to_string()));
    }
    if input.line_id.trim().is_empty() {
        return Err(ApiError::InvalidInput("line_id must not be empty".to_string()));
    }
    if input.product_id.trim().is_empty() {
        return Err(ApiError::InvalidInput("product_id must not be empty".to_string()));
    }
    if input.shift.trim().is_empty() {
        return Err(ApiError::InvalidInput("shift must not be empty".to_string()));
    }
    if !(1..=24).contains(&input.hour_of_day) {
        return Err(ApiError::InvalidInput(format!(
            "hour_of_day must be between 1 and 24, got {}",
            input.hour_of_day
        )));
    }

    let counters = [
        ("planned_production", input.planned_production),
        ("actual_production", input.actual_production),
        ("good_units", input.good_units),
        ("rejected_units", input.rejected_units),
        ("downtime_minutes", input.downtime_minutes),
    ];
    for (field, value) in counters {
        if let Some(v) = value {
            if v < 0 {
                return Err(ApiError::InvalidInput(format!(
                    "{} must not be negative, got {}",
                    field, v
                )));
            }
        }
    }

    Ok(())
}
