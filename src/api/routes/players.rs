use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Player, PlayerId};

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerCountResponse {
    pub count: usize,
}

pub async fn register_player(
    State(state): State<AppState>,
    Json(request): Json<RegisterPlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = state
        .tournament
        .lock()
        .await
        .register_player(&request.name)?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn count_players(
    State(state): State<AppState>,
) -> Result<Json<PlayerCountResponse>, ApiError> {
    let count = state.tournament.lock().await.count_players()?;
    Ok(Json(PlayerCountResponse { count }))
}

pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = state.tournament.lock().await.player(PlayerId::new(id))?;
    Ok(Json(player))
}

pub async fn reset_players(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.tournament.lock().await.reset_players()?;
    Ok(StatusCode::NO_CONTENT)
}
