use crate::errors::AppError;
use crate::ledger::{BOARD_SIZE, Ledger};
use crate::models::{
    LeaderboardEntry, LeaderboardQuery, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, ScoreRequest, ScoreResponse, TapRequest, TapResponse, UserResponse,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::error;

pub async fn index() -> Html<&'static str> {
    Html(ui::GAME_HTML)
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let user = ledger.register(&payload.username, &payload.password)?;
    flush(&state, &ledger).await;

    Ok(Json(RegisterResponse {
        message: "registration successful".to_string(),
        username: user.username,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let user = ledger.authenticate(&payload.username, &payload.password)?;
    flush(&state, &ledger).await;

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        username: user.username,
    }))
}

pub async fn update_score(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let user = ledger.update_score(&payload.username, payload.score)?;
    flush(&state, &ledger).await;

    Ok(Json(ScoreResponse {
        message: "score updated".to_string(),
        username: user.username,
        score: user.score,
    }))
}

pub async fn tap(
    State(state): State<AppState>,
    Json(payload): Json<TapRequest>,
) -> Result<Json<TapResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let user = ledger.tap(&payload.username)?;
    flush(&state, &ledger).await;

    Ok(Json(TapResponse {
        username: user.username,
        score: user.score,
    }))
}

pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<Vec<LeaderboardEntry>> {
    let limit = query.limit.unwrap_or(BOARD_SIZE);
    let ledger = state.ledger.lock().await;
    Json(ledger.leaderboard(limit))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let ledger = state.ledger.lock().await;
    let user = ledger.user(&username)?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let ledger = state.ledger.lock().await;
    Json(ledger.users().map(UserResponse::from).collect())
}

// A failed write is logged and the request still succeeds; the in-memory
// ledger stays the source of truth for the rest of the process lifetime.
async fn flush(state: &AppState, ledger: &Ledger) {
    if let Err(err) = persist_data(&state.data_path, ledger).await {
        error!("failed to persist ledger: {}", err.message);
    }
}
