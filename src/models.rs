use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub score: u64,
    pub joined: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub score_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u64,
    pub updated: DateTime<Utc>,
}

/// On-disk snapshot, written in full after every mutation. The stored
/// `leaderboard` is advisory: on load the projection is rebuilt from `users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredData {
    pub users: BTreeMap<String, UserRecord>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub username: String,
    pub score: u64,
}

#[derive(Debug, Deserialize)]
pub struct TapRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub message: String,
    pub username: String,
    pub score: u64,
}

#[derive(Debug, Serialize)]
pub struct TapResponse {
    pub username: String,
    pub score: u64,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub score: u64,
    pub joined: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl From<&UserRecord> for UserResponse {
    fn from(user: &UserRecord) -> Self {
        Self {
            username: user.username.clone(),
            score: user.score,
            joined: user.joined,
            last_active: user.last_active,
        }
    }
}
