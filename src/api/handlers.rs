use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    data::STYLE_PROFILES,
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        CompatibilityResult, DecorItem, RoomDescriptor, RoomImage, RoomType, StyleQuestion,
        StyleResultProfile, StyleTag,
    },
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct ScoreQuizRequest {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TallyEntry {
    pub style: StyleTag,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct ScoreQuizResponse {
    pub style: StyleTag,
    pub profile: &'static StyleResultProfile,
    pub tally: Vec<TallyEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ItemFilter {
    pub style: Option<StyleTag>,
    pub room_type: Option<RoomType>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub room: RoomDescriptor,
    pub item_id: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Quiz questions in answer order
pub async fn get_questions(State(state): State<AppState>) -> Json<&'static [StyleQuestion]> {
    Json(state.quiz.questions())
}

/// Score a completed quiz
pub async fn score_quiz(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ScoreQuizRequest>,
) -> AppResult<Json<ScoreQuizResponse>> {
    let (style, tally) = state.quiz.evaluate(&request.answers)?;

    tracing::info!(
        request_id = %request_id,
        answers = request.answers.len(),
        matched = tally.matched(),
        style = %style,
        "Style quiz scored"
    );

    Ok(Json(ScoreQuizResponse {
        style,
        profile: state.quiz.profile(style),
        tally: tally
            .entries()
            .into_iter()
            .map(|(style, count)| TallyEntry { style, count })
            .collect(),
    }))
}

/// All style profiles
pub async fn list_styles() -> Json<&'static [StyleResultProfile]> {
    Json(&STYLE_PROFILES[..])
}

/// One style profile by its tag
pub async fn get_style(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> AppResult<Json<&'static StyleResultProfile>> {
    let tag: StyleTag = tag
        .parse()
        .map_err(|_| AppError::NotFound(format!("Style '{}'", tag)))?;
    Ok(Json(state.quiz.profile(tag)))
}

/// Catalog listing, optionally filtered by style and room type
pub async fn list_items(
    State(state): State<AppState>,
    Query(filter): Query<ItemFilter>,
) -> AppResult<Json<Vec<DecorItem>>> {
    let items = match (filter.style, filter.room_type) {
        (Some(style), room_type) => state
            .catalog
            .items_by_style(style)
            .await?
            .into_iter()
            .filter(|item| room_type.map_or(true, |r| item.suits_room(r)))
            .collect(),
        (None, Some(room_type)) => state.catalog.items_for_room(room_type).await?,
        (None, None) => state.catalog.all_items().await?,
    };
    Ok(Json(items))
}

/// One catalog item
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DecorItem>> {
    let item = state.catalog.item_by_id(&id).await?;
    Ok(Json(item))
}

/// Analyze an uploaded room photo sent as the raw request body
pub async fn analyze_room(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<RoomDescriptor>> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let image = RoomImage::new(body.to_vec(), content_type, state.max_upload_bytes)?;

    tracing::info!(
        request_id = %request_id,
        bytes = image.bytes().len(),
        content_type = %image.content_type(),
        "Analyzing room image"
    );

    let mut shutdown = state.shutdown.clone();
    let room = state.analyzer.analyze(&image, &mut shutdown).await;

    tracing::info!(
        request_id = %request_id,
        room_id = %room.id,
        source = ?room.source,
        "Room descriptor ready"
    );

    Ok(Json(room))
}

/// Estimate how well a catalog item fits an analyzed room
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<CompatibilityResult>> {
    tracing::info!(
        request_id = %request_id,
        room_id = %request.room.id,
        item_id = %request.item_id,
        "Processing recommendation request"
    );

    let catalog = state.catalog.all_items().await?;
    let result = state
        .estimator
        .estimate(&request.room, &request.item_id, &catalog)?;

    Ok(Json(result))
}
