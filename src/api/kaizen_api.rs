// ==========================================
// Manufacturing Operations KPI Backend - Kaizen API
// ==========================================
// New ideas always enter the funnel as Submitted; status changes are
// a review-workflow concern outside this module.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::datasource::ManufacturingDataSource;
use crate::domain::types::KaizenStatus;
use crate::domain::{KaizenIdea, NewKaizenIdea};
use crate::repository::EntityFilter;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Kaizen idea API
pub struct KaizenApi {
    source: Arc<dyn ManufacturingDataSource>,
}

impl KaizenApi {
    pub fn new(source: Arc<dyn ManufacturingDataSource>) -> Self {
        Self { source }
    }

    /// Fetch ideas, most recently submitted first
    pub async fn fetch(&self, filter: &EntityFilter) -> ApiResult<Vec<KaizenIdea>> {
        Ok(self.source.fetch_kaizen(filter).await?)
    }

    /// Validate and store one idea
    pub async fn submit(&self, input: NewKaizenIdea) -> ApiResult<KaizenIdea> {
        if input.title.trim().is_empty() {
            return Err(ApiError::InvalidInput("title must not be empty".to_string()));
        }
        if input.estimated_savings < 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "estimated_savings must not be negative, got {}",
                input.estimated_savings
            )));
        }

        let ts = Utc::now().naive_utc();
        let idea = KaizenIdea {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            category: input.category,
            priority: input.priority,
            current_state: input.current_state,
            proposed_solution: input.proposed_solution,
            expected_benefit: input.expected_benefit,
            estimated_savings: input.estimated_savings,
            submitter_id: input.submitter_id,
            status: KaizenStatus::Submitted,
            implementation_date: None,
            actual_savings: None,
            plant_id: input.plant_id,
            line_id: input.line_id,
            created_at: ts,
            updated_at: ts,
        };

        self.source.insert_kaizen(&idea).await?;
        tracing::info!(id = %idea.id, title = %idea.title, "kaizen idea stored");
        Ok(idea)
    }
}
