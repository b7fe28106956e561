//! HTTP handlers for company profile endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::company::UpdateCompanyInput;
use crate::services::CompanyService;
use crate::models::Company;
use crate::AppState;

/// Get the authenticated company's profile
pub async fn get_company_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Company>> {
    let service = CompanyService::new(state.db);
    let company = service.get_profile(current_user.0.company_id).await?;
    Ok(Json(company))
}

/// Update the authenticated company's profile
pub async fn update_company_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<UpdateCompanyInput>,
) -> AppResult<Json<Company>> {
    let service = CompanyService::new(state.db);
    let company = service
        .update_profile(current_user.0.company_id, input)
        .await?;
    Ok(Json(company))
}
