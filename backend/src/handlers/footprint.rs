//! HTTP handlers for carbon footprint endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::footprint::CalculationResponse;
use crate::services::FootprintService;
use crate::models::{ActivityInput, CarbonFootprint};
use crate::AppState;
use shared::types::{PaginatedResponse, Pagination};

/// Page query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        Pagination {
            page: params.page.unwrap_or(0),
            per_page: params.size.unwrap_or(10),
        }
    }
}

/// Run a footprint calculation for the authenticated company
pub async fn calculate_footprint(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<ActivityInput>,
) -> AppResult<Json<CalculationResponse>> {
    let service = FootprintService::new(state.db);
    let response = service.calculate(current_user.0.company_id, input).await?;
    Ok(Json(response))
}

/// Get paged calculation history
pub async fn get_footprint_history(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PaginatedResponse<CarbonFootprint>>> {
    let service = FootprintService::new(state.db);
    let history = service
        .history(current_user.0.company_id, params.into())
        .await?;
    Ok(Json(history))
}

/// Get the full calculation history
pub async fn get_all_footprint_history(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<CarbonFootprint>>> {
    let service = FootprintService::new(state.db);
    let history = service.all_history(current_user.0.company_id).await?;
    Ok(Json(history))
}

/// Get one footprint record by ID
pub async fn get_footprint(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(footprint_id): Path<Uuid>,
) -> AppResult<Json<CarbonFootprint>> {
    let service = FootprintService::new(state.db);
    let footprint = service
        .get_by_id(current_user.0.company_id, footprint_id)
        .await?;
    Ok(Json(footprint))
}
