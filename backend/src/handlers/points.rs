//! HTTP handlers for green points endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::footprint::PageParams;
use crate::middleware::CurrentUser;
use crate::services::GreenPointsService;
use crate::models::GreenPointsTransaction;
use crate::AppState;
use shared::types::PaginatedResponse;

#[derive(Serialize)]
pub struct BalanceResponse {
    pub balance: i32,
}

/// Get the authenticated company's points balance
pub async fn get_points_balance(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<BalanceResponse>> {
    let service = GreenPointsService::new(state.db);
    let balance = service.balance(current_user.0.company_id).await?;
    Ok(Json(BalanceResponse { balance }))
}

/// Get paged points transaction history
pub async fn get_points_history(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PaginatedResponse<GreenPointsTransaction>>> {
    let service = GreenPointsService::new(state.db);
    let history = service
        .history(current_user.0.company_id, params.into())
        .await?;
    Ok(Json(history))
}

/// Get the full points transaction history
pub async fn get_all_points_transactions(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<GreenPointsTransaction>>> {
    let service = GreenPointsService::new(state.db);
    let transactions = service.transactions(current_user.0.company_id).await?;
    Ok(Json(transactions))
}
