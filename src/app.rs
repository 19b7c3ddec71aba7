use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/update_score", put(handlers::update_score).post(handlers::update_score))
        .route("/api/tap", post(handlers::tap))
        .route("/leaderboard", get(handlers::leaderboard))
        .route("/user/:username", get(handlers::get_user))
        .route("/users", get(handlers::list_users))
        .with_state(state)
}
