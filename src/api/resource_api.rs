// ==========================================
// Manufacturing Operations KPI Backend - Resource consumption API
// ==========================================
// total_cost is derived here on every submission.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::datasource::ManufacturingDataSource;
use crate::domain::{NewResourceConsumption, ResourceConsumption};
use crate::repository::EntityFilter;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Resource consumption API
pub struct ResourceApi {
    source: Arc<dyn ManufacturingDataSource>,
}

impl ResourceApi {
    pub fn new(source: Arc<dyn ManufacturingDataSource>) -> Self {
        Self { source }
    }

    /// Fetch consumption rows, newest first
    pub async fn fetch(&self, filter: &EntityFilter) -> ApiResult<Vec<ResourceConsumption>> {
        Ok(self.source.fetch_resource(filter).await?)
    }

    /// Validate and store one consumption row, deriving its total cost
    pub async fn submit(&self, input: NewResourceConsumption) -> ApiResult<ResourceConsumption> {
        let amounts = [
            ("labor_hours", input.labor_hours),
            ("labor_cost", input.labor_cost),
            ("power_kwh", input.power_kwh),
            ("power_cost", input.power_cost),
            ("fuel_liters", input.fuel_liters),
            ("fuel_cost", input.fuel_cost),
            ("maintenance_cost", input.maintenance_cost),
            ("other_costs", input.other_costs),
        ];
        for (field, value) in amounts {
            if value < 0.0 {
                return Err(ApiError::InvalidInput(format!(
                    "{} must not be negative, got {}",
                    field, value
                )));
            }
        }

        let total_cost = input.compute_total_cost();
        let consumption = ResourceConsumption {
            id: Uuid::new_v4().to_string(),
            plant_id: input.plant_id,
            line_id: input.line_id,
            consumption_date: input.consumption_date,
            shift: input.shift,
            labor_hours: input.labor_hours,
            labor_cost: input.labor_cost,
            power_kwh: input.power_kwh,
            power_cost: input.power_cost,
            fuel_liters: input.fuel_liters,
            fuel_cost: input.fuel_cost,
            maintenance_cost: input.maintenance_cost,
            other_costs: input.other_costs,
            total_cost,
            created_at: Utc::now().naive_utc(),
        };

        self.source.insert_resource(&consumption).await?;
        tracing::info!(
            id = %consumption.id,
            date = %consumption.consumption_date,
            total_cost = consumption.total_cost,
            "resource consumption stored"
        );
        Ok(consumption)
    }
}
