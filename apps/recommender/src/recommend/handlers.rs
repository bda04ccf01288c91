use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::RecommendError;
use crate::models::job_posting::OpportunityType;
use crate::recommend::pipeline::{recommend, Recommendation, RecommendationRequest};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub opportunity_type: Option<OpportunityType>,
}

/// GET /api/v1/students/:student_id/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Vec<Recommendation>>, RecommendError> {
    let request = RecommendationRequest {
        student_id: Some(student_id),
        opportunity_type: query.opportunity_type,
        limit: state.config.recommendation_limit,
    };
    let recommendations = recommend(state.store.as_ref(), &request).await?;
    Ok(Json(recommendations))
}
