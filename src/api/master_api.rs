// ==========================================
// Manufacturing Operations KPI Backend - Master data API
// ==========================================
// The dashboard loads all four master families up front; the four
// fetches are issued concurrently against the data source.
// ==========================================

use crate::api::error::ApiResult;
use crate::datasource::ManufacturingDataSource;
use crate::domain::{Employee, Plant, Product, ProductionLine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Master data bundle returned to the dashboard shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterData {
    pub plants: Vec<Plant>,
    pub production_lines: Vec<ProductionLine>,
    pub products: Vec<Product>,
    pub employees: Vec<Employee>,
}

/// Master data API
pub struct MasterDataApi {
    source: Arc<dyn ManufacturingDataSource>,
}

impl MasterDataApi {
    pub fn new(source: Arc<dyn ManufacturingDataSource>) -> Self {
        Self { source }
    }

    /// Fetch plants, lines, products and employees in one call
    pub async fn fetch_all(&self) -> ApiResult<MasterData> {
        let (plants, production_lines, products, employees) = futures::try_join!(
            self.source.fetch_plants(),
            self.source.fetch_production_lines(),
            self.source.fetch_products(),
            self.source.fetch_employees(),
        )?;

        tracing::debug!(
            plants = plants.len(),
            lines = production_lines.len(),
            products = products.len(),
            employees = employees.len(),
            "master data fetched"
        );

        Ok(MasterData {
            plants,
            production_lines,
            products,
            employees,
        })
    }
}
