use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes(upload_limit))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes(upload_limit: usize) -> Router<AppState> {
    Router::new()
        // Style quiz
        .route("/quiz/questions", get(handlers::get_questions))
        .route("/quiz/score", post(handlers::score_quiz))
        .route("/styles", get(handlers::list_styles))
        .route("/styles/:tag", get(handlers::get_style))
        // Catalog
        .route("/items", get(handlers::list_items))
        .route("/items/:id", get(handlers::get_item))
        // Room analysis and recommendations
        .route(
            "/rooms/analyze",
            post(handlers::analyze_room).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/recommendations", post(handlers::recommend))
}
