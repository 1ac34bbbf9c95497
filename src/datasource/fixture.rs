// ==========================================
// Manufacturing Operations KPI Backend - In-memory fixture source
// ==========================================
// Demo installs and tests run against this source. It applies the
// same filter and ordering semantics as the SQLite source so the API
// layer behaves identically over both.
// ==========================================

use crate::datasource::fixtures::{demo_data, FixtureDataSet};
use crate::datasource::ManufacturingDataSource;
use crate::domain::{
    Employee, FiveSAudit, KaizenIdea, Plant, Product, ProductionLine, ProductionRecord,
    QualityInspection, ResourceConsumption,
};
use crate::repository::{EntityFilter, ProductionQuery, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory data source seeded with fixture data
pub struct FixtureDataSource {
    store: Mutex<FixtureDataSet>,
}

impl FixtureDataSource {
    /// Source seeded with the demo data set
    pub fn seeded() -> Self {
        Self {
            store: Mutex::new(demo_data()),
        }
    }

    /// Source starting from an empty store
    pub fn empty() -> Self {
        Self {
            store: Mutex::new(FixtureDataSet::default()),
        }
    }

    /// Source starting from a caller-provided data set
    pub fn with_data(data: FixtureDataSet) -> Self {
        Self {
            store: Mutex::new(data),
        }
    }

    fn get_store(&self) -> RepositoryResult<std::sync::MutexGuard<'_, FixtureDataSet>> {
        self.store
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

fn matches_filter(filter: &EntityFilter, plant_id: &str, line_id: &str) -> bool {
    if let Some(wanted) = &filter.plant_id {
        if wanted != plant_id {
            return false;
        }
    }
    if let Some(wanted) = &filter.line_id {
        if wanted != line_id {
            return false;
        }
    }
    true
}

#[async_trait]
impl ManufacturingDataSource for FixtureDataSource {
    async fn fetch_plants(&self) -> RepositoryResult<Vec<Plant>> {
        Ok(self.get_store()?.plants.clone())
    }

    async fn fetch_production_lines(&self) -> RepositoryResult<Vec<ProductionLine>> {
        Ok(self.get_store()?.production_lines.clone())
    }

    async fn fetch_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.get_store()?.products.clone())
    }

    async fn fetch_employees(&self) -> RepositoryResult<Vec<Employee>> {
        Ok(self.get_store()?.employees.clone())
    }

    async fn fetch_production(
        &self,
        query: &ProductionQuery,
    ) -> RepositoryResult<Vec<ProductionRecord>> {
        let store = self.get_store()?;
        let filter = EntityFilter {
            plant_id: query.plant_id.clone(),
            line_id: query.line_id.clone(),
        };

        let mut records: Vec<ProductionRecord> = store
            .production
            .iter()
            .filter(|r| matches_filter(&filter, &r.plant_id, &r.line_id))
            .filter(|r| match &query.date_range {
                Some(range) => r.production_date >= range.from && r.production_date <= range.to,
                None => true,
            })
            .cloned()
            .collect();

        records.sort_by(|a, b| {
            b.production_date
                .cmp(&a.production_date)
                .then(b.hour_of_day.cmp(&a.hour_of_day))
        });
        records.truncate(query.limit as usize);
        Ok(records)
    }

    async fn insert_production(&self, record: &ProductionRecord) -> RepositoryResult<()> {
        self.get_store()?.production.insert(0, record.clone());
        Ok(())
    }

    async fn fetch_quality(
        &self,
        filter: &EntityFilter,
    ) -> RepositoryResult<Vec<QualityInspection>> {
        let store = self.get_store()?;
        let mut rows: Vec<QualityInspection> = store
            .quality
            .iter()
            .filter(|r| matches_filter(filter, &r.plant_id, &r.line_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.inspection_date.cmp(&a.inspection_date));
        Ok(rows)
    }

    async fn insert_quality(&self, inspection: &QualityInspection) -> RepositoryResult<()> {
        self.get_store()?.quality.insert(0, inspection.clone());
        Ok(())
    }

    async fn fetch_five_s(&self, filter: &EntityFilter) -> RepositoryResult<Vec<FiveSAudit>> {
        let store = self.get_store()?;
        let mut rows: Vec<FiveSAudit> = store
            .five_s
            .iter()
            .filter(|r| matches_filter(filter, &r.plant_id, &r.line_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.audit_date.cmp(&a.audit_date));
        Ok(rows)
    }

    async fn insert_five_s(&self, audit: &FiveSAudit) -> RepositoryResult<()> {
        self.get_store()?.five_s.insert(0, audit.clone());
        Ok(())
    }

    async fn fetch_resource(
        &self,
        filter: &EntityFilter,
    ) -> RepositoryResult<Vec<ResourceConsumption>> {
        let store = self.get_store()?;
        let mut rows: Vec<ResourceConsumption> = store
            .resource
            .iter()
            .filter(|r| matches_filter(filter, &r.plant_id, &r.line_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.consumption_date.cmp(&a.consumption_date));
        Ok(rows)
    }

    async fn insert_resource(&self, consumption: &ResourceConsumption) -> RepositoryResult<()> {
        self.get_store()?.resource.insert(0, consumption.clone());
        Ok(())
    }

    async fn fetch_kaizen(&self, filter: &EntityFilter) -> RepositoryResult<Vec<KaizenIdea>> {
        let store = self.get_store()?;
        let mut rows: Vec<KaizenIdea> = store
            .kaizen
            .iter()
            .filter(|r| matches_filter(filter, &r.plant_id, &r.line_id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_kaizen(&self, idea: &KaizenIdea) -> RepositoryResult<()> {
        self.get_store()?.kaizen.insert(0, idea.clone());
        Ok(())
    }
}
