//! Persona collection endpoint handlers
//!
//! Every response is a JSON envelope with a boolean `success` field.
//! Parse failures map to 400, unknown ids to 404.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use personas_common::model::{ModelError, NewPersona, PersonaUpdate};
use serde_json::{Value, json};

use crate::server::app::AppState;

/// GET /personas - List all personas, ordered by id
pub async fn list_personas(State(state): State<AppState>) -> Response {
    let store = state.store.read().await;
    let personas = store.list();
    drop(store);

    (
        StatusCode::OK,
        Json(json!({"success": true, "personas": personas})),
    )
        .into_response()
}

/// GET /personas/{id} - Get a single persona by id
pub async fn get_persona(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let store = state.store.read().await;

    match store.get(id) {
        Some(persona) => (
            StatusCode::OK,
            Json(json!({"success": true, "persona": persona})),
        )
            .into_response(),
        None => persona_not_found(id),
    }
}

/// POST /personas - Create a new persona
///
/// Requires `nombre`, `apellido`, and `edad`; the server assigns the id.
pub async fn create_persona(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    let new = match NewPersona::from_json(&payload) {
        Ok(new) => new,
        Err(e) => return bad_request(&e),
    };

    let mut store = state.store.write().await;
    let persona = store.insert(new);
    drop(store);

    (
        StatusCode::CREATED,
        Json(json!({"success": true, "persona": persona})),
    )
        .into_response()
}

/// PUT /personas/{id} - Partially update an existing persona
///
/// Only the supplied fields change; the rest keep their prior values.
pub async fn update_persona(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Response {
    let update = match PersonaUpdate::from_json(&payload) {
        Ok(update) => update,
        Err(e) => return bad_request(&e),
    };

    let mut store = state.store.write().await;

    match store.update(id, &update) {
        Some(persona) => (
            StatusCode::OK,
            Json(json!({"success": true, "persona": persona})),
        )
            .into_response(),
        None => persona_not_found(id),
    }
}

/// DELETE /personas/{id} - Delete a persona
pub async fn delete_persona(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut store = state.store.write().await;

    if store.remove(id) {
        (StatusCode::OK, Json(json!({"success": true}))).into_response()
    } else {
        persona_not_found(id)
    }
}

fn bad_request(err: &ModelError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"success": false, "error": err.to_string()})),
    )
        .into_response()
}

fn persona_not_found(id: i64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "error": format!("persona {} not found", id)})),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PersonaStore;
    use http_body_util::BodyExt;

    fn test_state() -> AppState {
        AppState::new(PersonaStore::new())
    }

    async fn response_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn create_body() -> Value {
        json!({
            "nombre": "Ana",
            "apellido": "García",
            "edad": 31,
            "email": "ana@example.com"
        })
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let response = list_personas(State(test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["personas"], json!([]));
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let state = test_state();
        let response = create_persona(State(state), Json(create_body())).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["persona"]["id"], 1);
        assert_eq!(body["persona"]["nombre"], "Ana");
    }

    #[tokio::test]
    async fn test_create_round_trips_submitted_values() {
        let state = test_state();
        create_persona(State(state.clone()), Json(create_body())).await;

        let response = get_persona(State(state), Path(1)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["persona"]["nombre"], "Ana");
        assert_eq!(body["persona"]["apellido"], "García");
        assert_eq!(body["persona"]["edad"], 31);
        assert_eq!(body["persona"]["email"], "ana@example.com");
        assert_eq!(body["persona"]["telefono"], Value::Null);
    }

    #[tokio::test]
    async fn test_create_missing_required_field() {
        let response = create_persona(
            State(test_state()),
            Json(json!({"apellido": "García", "edad": 31})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("nombre"));
    }

    #[tokio::test]
    async fn test_create_invalid_fecha_nacimiento() {
        let response = create_persona(
            State(test_state()),
            Json(json!({
                "nombre": "Ana",
                "apellido": "García",
                "edad": 31,
                "fecha_nacimiento": "mayo 17"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let response = get_persona(State(test_state()), Path(42)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("42"));
    }

    #[tokio::test]
    async fn test_update_merges_partial_body() {
        let state = test_state();
        create_persona(State(state.clone()), Json(create_body())).await;

        let response = update_persona(
            State(state.clone()),
            Path(1),
            Json(json!({"edad": 32, "telefono": "+34 600 111 222"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["persona"]["edad"], 32);
        assert_eq!(body["persona"]["telefono"], "+34 600 111 222");
        // Untouched fields keep their values
        assert_eq!(body["persona"]["nombre"], "Ana");
        assert_eq!(body["persona"]["email"], "ana@example.com");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let response =
            update_persona(State(test_state()), Path(42), Json(json!({"edad": 32}))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_empty_body() {
        let state = test_state();
        create_persona(State(state.clone()), Json(create_body())).await;

        let response = update_persona(State(state), Path(1), Json(json!({}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_removes_persona() {
        let state = test_state();
        create_persona(State(state.clone()), Json(create_body())).await;

        let response = delete_persona(State(state.clone()), Path(1)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!({"success": true}));

        // Deleted id no longer appears in the listing
        let response = list_personas(State(state)).await;
        let body = response_json(response).await;
        assert_eq!(body["personas"], json!([]));
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let response = delete_persona(State(test_state()), Path(42)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
