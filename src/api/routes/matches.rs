use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Match, MatchId, PlayerId};

#[derive(Debug, Deserialize)]
pub struct ReportMatchRequest {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

#[derive(Debug, Serialize)]
pub struct ReportMatchResponse {
    pub id: MatchId,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<Match>,
}

pub async fn report_match(
    State(state): State<AppState>,
    Json(request): Json<ReportMatchRequest>,
) -> Result<(StatusCode, Json<ReportMatchResponse>), ApiError> {
    let id = state
        .tournament
        .lock()
        .await
        .report_match(request.winner, request.loser)?;
    Ok((StatusCode::CREATED, Json(ReportMatchResponse { id })))
}

pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let matches = state.tournament.lock().await.matches()?;
    Ok(Json(MatchesResponse { matches }))
}

pub async fn reset_matches(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.tournament.lock().await.reset_matches()?;
    Ok(StatusCode::NO_CONTENT)
}
