use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Pairing, Standing};

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<Standing>,
}

#[derive(Debug, Serialize)]
pub struct PairingsResponse {
    pub pairings: Vec<Pairing>,
}

pub async fn standings(State(state): State<AppState>) -> Result<Json<StandingsResponse>, ApiError> {
    let standings = state.tournament.lock().await.standings()?;
    Ok(Json(StandingsResponse { standings }))
}

pub async fn pairings(State(state): State<AppState>) -> Result<Json<PairingsResponse>, ApiError> {
    let pairings = state.tournament.lock().await.pairings()?;
    Ok(Json(PairingsResponse { pairings }))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{register_all, send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_round_flow() {
        let app = test_app();
        let ids = register_all(&app, &["A", "B", "C", "D"]).await;

        let (status, json) = send(&app, Method::GET, "/api/pairings", None).await;
        assert_eq!(status, StatusCode::OK);
        let pairings = json["pairings"].as_array().unwrap();
        assert_eq!(pairings.len(), 2);
        assert_eq!(pairings[0]["player_a_name"], "A");
        assert_eq!(pairings[0]["player_b_name"], "B");

        for (winner, loser) in [(ids[0], ids[1]), (ids[2], ids[3])] {
            send(
                &app,
                Method::POST,
                "/api/matches",
                Some(json!({ "winner": winner, "loser": loser })),
            )
            .await;
        }

        let (status, json) = send(&app, Method::GET, "/api/standings", None).await;
        assert_eq!(status, StatusCode::OK);
        let order: Vec<&str> = json["standings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(order, vec!["A", "C", "B", "D"]);
        assert_eq!(json["standings"][0]["wins"], 1);
        assert_eq!(json["standings"][0]["matches_played"], 1);

        let (_, json) = send(&app, Method::GET, "/api/pairings", None).await;
        assert_eq!(json["pairings"][0]["player_b_name"], "C");
        assert_eq!(json["pairings"][1]["player_a_name"], "B");
    }

    #[tokio::test]
    async fn test_pairings_odd_count() {
        let app = test_app();
        register_all(&app, &["A", "B", "C"]).await;

        let (status, json) = send(&app, Method::GET, "/api/pairings", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("odd number"));
    }

    #[tokio::test]
    async fn test_empty_standings() {
        let app = test_app();
        let (status, json) = send(&app, Method::GET, "/api/standings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["standings"].as_array().unwrap().is_empty());
    }
}
