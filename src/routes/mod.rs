/// Application routes configuration
use crate::handlers::{
    get_like, get_mission, get_options, get_view, health, list_classifications, list_missions,
    refresh_catalog, toggle_like, AppState,
};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Explorer endpoints
        .route("/missions", get(list_missions))
        .route("/missions/view", get(get_view))
        .route("/missions/options", get(get_options))
        .route("/missions/:name", get(get_mission))
        .route("/mission-types", get(list_classifications))
        // Catalog maintenance
        .route("/catalog/refresh", get(refresh_catalog))
        // Update likes
        .route("/updates/:id/like", get(get_like).post(toggle_like))
        .with_state(state)
}
