pub mod matches;
pub mod players;
pub mod rounds;

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::storage::SqliteStore;
    use crate::tournament::Tournament;

    pub fn test_app() -> axum::Router {
        let store = SqliteStore::open_in_memory().unwrap();
        build_router(AppState::new(Tournament::new(store)), "*")
    }

    pub async fn send(
        app: &axum::Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let resp = app.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    /// Register each name and return the assigned ids.
    pub async fn register_all(app: &axum::Router, names: &[&str]) -> Vec<i64> {
        let mut ids = Vec::new();
        for name in names {
            let (status, json) = send(
                app,
                Method::POST,
                "/api/players",
                Some(serde_json::json!({ "name": name })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            ids.push(json["id"].as_i64().unwrap());
        }
        ids
    }
}
