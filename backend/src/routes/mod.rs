//! Route definitions for the GreenTrace platform

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes - company profile
        .nest("/companies", company_routes())
        // Protected routes - footprint calculation and history
        .nest("/carbon-footprint", footprint_routes())
        // Protected routes - green points ledger
        .nest("/green-points", points_routes())
        // Leaderboard (public top list + protected rankings)
        .nest("/leaderboard", leaderboard_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}

/// Company profile routes (protected)
fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(handlers::get_company_profile).put(handlers::update_company_profile),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Carbon footprint routes (protected)
fn footprint_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(handlers::calculate_footprint))
        .route("/history", get(handlers::get_footprint_history))
        .route("/history/all", get(handlers::get_all_footprint_history))
        .route("/:footprint_id", get(handlers::get_footprint))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Green points routes (protected)
fn points_routes() -> Router<AppState> {
    Router::new()
        .route("/balance", get(handlers::get_points_balance))
        .route("/history", get(handlers::get_points_history))
        .route("/transactions", get(handlers::get_all_points_transactions))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Leaderboard routes (public top list, protected rankings)
fn leaderboard_routes() -> Router<AppState> {
    Router::new()
        .route("/public/top", get(handlers::get_public_leaderboard))
        .merge(
            Router::new()
                .route("/top", get(handlers::get_top_companies))
                .route(
                    "/industry/:industry",
                    get(handlers::get_top_companies_by_industry),
                )
                .route(
                    "/industry/:industry/average",
                    get(handlers::get_industry_average),
                )
                .route("/rankings", get(handlers::get_rankings))
                .route("/my-ranking", get(handlers::get_my_ranking))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}
