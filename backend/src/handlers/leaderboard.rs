//! HTTP handlers for leaderboard endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::leaderboard::MyRanking;
use crate::services::LeaderboardService;
use crate::models::Industry;
use crate::AppState;
use shared::leaderboard::LeaderboardEntry;
use shared::types::{PaginatedResponse, Pagination};

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub industry: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryAverageResponse {
    pub industry: Industry,
    pub average_footprint: Option<f64>,
}

/// Parse an industry path/query value
fn parse_industry(value: &str) -> AppResult<Industry> {
    Industry::parse(value).ok_or_else(|| AppError::Validation {
        field: "industry".to_string(),
        message: "Unknown industry".to_string(),
    })
}

/// Get the top companies by green points
pub async fn get_top_companies(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let service = LeaderboardService::new(state.db);
    let companies = service.top_companies(params.limit.unwrap_or(10)).await?;
    Ok(Json(companies))
}

/// Get the top companies within an industry
pub async fn get_top_companies_by_industry(
    State(state): State<AppState>,
    Path(industry): Path<String>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let industry = parse_industry(&industry)?;
    let service = LeaderboardService::new(state.db);
    let companies = service
        .top_companies_by_industry(industry, params.limit.unwrap_or(10))
        .await?;
    Ok(Json(companies))
}

/// Public leaderboard (no authentication)
pub async fn get_public_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let service = LeaderboardService::new(state.db);
    let companies = service.top_companies(params.limit.unwrap_or(10)).await?;
    Ok(Json(companies))
}

/// Paged rankings, optionally filtered by industry
pub async fn get_rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> AppResult<Json<PaginatedResponse<LeaderboardEntry>>> {
    let industry = params.industry.as_deref().map(parse_industry).transpose()?;
    let pagination = Pagination {
        page: params.page.unwrap_or(0),
        per_page: params.size.unwrap_or(20),
    };

    let service = LeaderboardService::new(state.db);
    let rankings = service.rankings(industry, pagination).await?;
    Ok(Json(rankings))
}

/// Get the authenticated company's leaderboard position
pub async fn get_my_ranking(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<MyRanking>> {
    let service = LeaderboardService::new(state.db);
    let ranking = service.my_ranking(current_user.0.company_id).await?;
    Ok(Json(ranking))
}

/// Average latest footprint across an industry
pub async fn get_industry_average(
    State(state): State<AppState>,
    Path(industry): Path<String>,
) -> AppResult<Json<IndustryAverageResponse>> {
    let industry = parse_industry(&industry)?;
    let service = LeaderboardService::new(state.db);
    let average_footprint = service.industry_average(industry).await?;
    Ok(Json(IndustryAverageResponse {
        industry,
        average_footprint,
    }))
}
