//! In-process mock of the prediction backend for integration tests.
//!
//! Serves canned fixtures over real HTTP on an ephemeral port so the tests
//! exercise the full client stack (request construction, classification,
//! decoding) without a running backend.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

pub struct MockBackend {
    pub address: String,
}

pub async fn spawn_backend() -> MockBackend {
    let app = Router::new()
        .route("/games", get(list_games))
        .route("/games/:id", get(get_game))
        .route("/games/status/:status", get(games_by_status))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/:id/predictions", get(user_predictions))
        .route(
            "/users/:id/predictions/:game_id",
            get(user_prediction_for_game),
        )
        .route("/predictions", post(create_prediction));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock backend");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { address }
}

fn game_fixtures() -> Vec<Value> {
    vec![
        json!({
            "id": "gm1",
            "status": "scheduled",
            "startTime": "2026-08-08T00:30:00Z",
            "homeTeam": {"name": "Lakers", "abbreviation": "LAL", "record": "12-3"},
            "awayTeam": {"name": "Celtics", "abbreviation": "BOS", "record": "11-4"},
            "odds": {"spread": "-4.5", "favorite": "LAL"}
        }),
        json!({
            "id": "gm2",
            "status": "final",
            "homeTeam": {"name": "Heat", "abbreviation": "MIA", "record": "10-5", "score": 104},
            "awayTeam": {"name": "Mavericks", "abbreviation": "DAL", "record": "9-6", "score": 98},
            "winner": "MIA"
        }),
        json!({
            "id": "gm3",
            "status": "scheduled",
            "startTime": "2026-08-09T02:00:00Z",
            "homeTeam": {"name": "Nuggets", "abbreviation": "DEN", "record": "13-2"},
            "awayTeam": {"name": "Warriors", "abbreviation": "GSW", "record": "8-7"}
        }),
    ]
}

// Oldest first: one settled loss, one settled win, one open pick on gm1.
fn prediction_fixtures() -> Vec<Value> {
    vec![
        json!({
            "gameId": "gm2",
            "userId": "u1",
            "pick": "DAL",
            "amount": 25.0,
            "result": "loss",
            "payout": 0.0
        }),
        json!({
            "gameId": "gm5",
            "userId": "u1",
            "pick": "LAL",
            "amount": 10.0,
            "result": "win",
            "payout": 21.5
        }),
        json!({
            "gameId": "gm1",
            "userId": "u1",
            "pick": "LAL",
            "amount": 15.0,
            "result": "pending"
        }),
    ]
}

fn user_fixture() -> Value {
    json!({
        "id": "u1",
        "email": "hoops@example.com",
        "name": "Jordan Rivers",
        "createdAt": "2026-01-15T12:00:00Z",
        "updatedAt": "2026-08-01T09:30:00Z",
        "username": "hoopshead",
        "balance": 150.0,
        "predictions": prediction_fixtures(),
        "stats": {"wins": 1, "losses": 1, "pending": 1}
    })
}

async fn list_games() -> Json<Value> {
    Json(Value::Array(game_fixtures()))
}

async fn get_game(Path(id): Path<String>) -> impl IntoResponse {
    // A well-formed 200 whose body is not a Game, for decode-failure tests
    if id == "malformed" {
        return (StatusCode::OK, Json(json!({"unexpected": true})));
    }
    match game_fixtures().into_iter().find(|g| g["id"] == id.as_str()) {
        Some(game) => (StatusCode::OK, Json(game)),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Game not found"})),
        ),
    }
}

async fn games_by_status(Path(status): Path<String>) -> Json<Value> {
    let filtered = game_fixtures()
        .into_iter()
        .filter(|g| g["status"] == status.as_str())
        .collect();
    Json(Value::Array(filtered))
}

async fn get_user(Path(id): Path<String>) -> impl IntoResponse {
    match id.as_str() {
        "u1" => (StatusCode::OK, Json(user_fixture())),
        "locked" => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthorized"})),
        ),
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Internal server error"})),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "User not found"})),
        ),
    }
}

async fn list_users() -> Json<Value> {
    Json(json!({
        "users": [
            {
                "id": "u1",
                "email": "hoops@example.com",
                "name": "Jordan Rivers",
                "createdAt": "2026-01-15T12:00:00Z",
                "updatedAt": "2026-08-01T09:30:00Z"
            },
            {
                "id": "u2",
                "email": "bucket@example.com",
                "name": "Bucket Getter",
                "createdAt": "2026-02-20T08:00:00Z",
                "updatedAt": "2026-02-20T08:00:00Z"
            }
        ],
        "total": 2
    }))
}

async fn create_user(Json(body): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(json!({
            "id": "u3",
            "email": body["email"],
            "name": body["name"],
            "createdAt": "2026-08-07T10:00:00Z",
            "updatedAt": "2026-08-07T10:00:00Z"
        })),
    )
}

async fn update_user(Path(id): Path<String>, Json(body): Json<Value>) -> impl IntoResponse {
    if id != "u1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "User not found"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": "u1",
            "email": body.get("email").cloned().unwrap_or(json!("hoops@example.com")),
            "name": body.get("name").cloned().unwrap_or(json!("Jordan Rivers")),
            "createdAt": "2026-01-15T12:00:00Z",
            "updatedAt": "2026-08-07T10:00:00Z"
        })),
    )
}

async fn delete_user(Path(id): Path<String>) -> impl IntoResponse {
    if id != "u1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "User not found"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"message": "User deleted successfully"})),
    )
}

async fn user_predictions(Path(id): Path<String>) -> impl IntoResponse {
    if id != "u1" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "User not found"})),
        );
    }
    (StatusCode::OK, Json(Value::Array(prediction_fixtures())))
}

async fn user_prediction_for_game(
    Path((id, game_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let found = prediction_fixtures()
        .into_iter()
        .find(|p| p["userId"] == id.as_str() && p["gameId"] == game_id.as_str());
    match found {
        Some(prediction) => (StatusCode::OK, Json(prediction)),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Prediction not found"})),
        ),
    }
}

async fn create_prediction(Json(body): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(json!({
            "balance": 90.0,
            "predictions": [{
                "gameId": body["gameId"],
                "userId": body["userId"],
                "pick": body["pick"],
                "amount": body["amount"],
                "result": "pending"
            }],
            "stats": {"wins": 0, "losses": 0, "pending": 1}
        })),
    )
}
