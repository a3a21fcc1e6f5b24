//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::RoomSummaryDto, ui::state::AppState, usecase::GetRoomDetailError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of active rooms with their occupants
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    let room_summaries = rooms
        .into_iter()
        .map(|(room, occupants)| RoomSummaryDto::new(room, occupants))
        .collect();

    Json(room_summaries)
}

/// Get one active room by name
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Json<RoomSummaryDto>, StatusCode> {
    match state.get_room_detail_usecase.execute(room).await {
        Ok((room, occupants)) => Ok(Json(RoomSummaryDto::new(room, occupants))),
        Err(GetRoomDetailError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
    }
}
