use crate::models::{LeaderboardEntry, StoredData, UserRecord};
use crate::password;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum number of entries kept in the leaderboard projection.
pub const BOARD_SIZE: usize = 10;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, PartialEq, Eq)]
pub enum LedgerError {
    Validation(String),
    DuplicateUser(String),
    UserNotFound(String),
    InvalidCredential,
    ScoreRegression { current: u64, attempted: u64 },
    Internal(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::DuplicateUser(username) => {
                write!(f, "username '{username}' is already taken")
            }
            Self::UserNotFound(username) => write!(f, "user '{username}' not found"),
            Self::InvalidCredential => write!(f, "wrong password"),
            Self::ScoreRegression { current, attempted } => write!(
                f,
                "new score {attempted} is lower than the current score {current}"
            ),
            Self::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Authoritative user → score store with a derived top-10 leaderboard.
///
/// Purely in-memory and synchronous; persistence happens outside, after a
/// mutating call returns. Every rejected operation leaves the ledger
/// unchanged and usable.
#[derive(Debug, Default)]
pub struct Ledger {
    users: BTreeMap<String, UserRecord>,
    board: Vec<LeaderboardEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from a persisted snapshot. The snapshot's
    /// leaderboard list is ignored; the projection is recomputed from the
    /// user records, which are the source of truth.
    pub fn from_stored(stored: StoredData) -> Self {
        let mut ledger = Self {
            users: stored.users,
            board: Vec::new(),
        };
        ledger.rebuild_board();
        ledger
    }

    pub fn to_stored(&self, now: DateTime<Utc>) -> StoredData {
        StoredData {
            users: self.users.clone(),
            leaderboard: self.board.clone(),
            last_updated: now,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<UserRecord, LedgerError> {
        self.register_at(username, password, Utc::now())
    }

    pub fn register_at(
        &mut self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<UserRecord, LedgerError> {
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(LedgerError::Validation(format!(
                "username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LedgerError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.users.contains_key(username) {
            return Err(LedgerError::DuplicateUser(username.to_string()));
        }

        let password_hash =
            password::hash(password).map_err(|err| LedgerError::Internal(err.to_string()))?;
        let record = UserRecord {
            username: username.to_string(),
            password_hash,
            score: 0,
            joined: now,
            last_active: now,
            score_updated: now,
        };
        self.users.insert(username.to_string(), record.clone());
        self.rebuild_board();
        Ok(record)
    }

    pub fn authenticate(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, LedgerError> {
        self.authenticate_at(username, password, Utc::now())
    }

    pub fn authenticate_at(
        &mut self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<UserRecord, LedgerError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| LedgerError::UserNotFound(username.to_string()))?;
        if !password::verify(password, &user.password_hash) {
            return Err(LedgerError::InvalidCredential);
        }
        user.last_active = now;
        Ok(user.clone())
    }

    /// Sets the user's score. Equal writes succeed; anything below the
    /// stored score is rejected and leaves the record untouched.
    pub fn update_score(
        &mut self,
        username: &str,
        new_score: u64,
    ) -> Result<UserRecord, LedgerError> {
        self.update_score_at(username, new_score, Utc::now())
    }

    pub fn update_score_at(
        &mut self,
        username: &str,
        new_score: u64,
        now: DateTime<Utc>,
    ) -> Result<UserRecord, LedgerError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| LedgerError::UserNotFound(username.to_string()))?;
        if new_score < user.score {
            return Err(LedgerError::ScoreRegression {
                current: user.score,
                attempted: new_score,
            });
        }
        user.score = new_score;
        user.last_active = now;
        user.score_updated = now;
        let record = user.clone();
        self.rebuild_board();
        Ok(record)
    }

    /// One tap: increment the stored score by 1.
    pub fn tap(&mut self, username: &str) -> Result<UserRecord, LedgerError> {
        self.tap_at(username, Utc::now())
    }

    pub fn tap_at(&mut self, username: &str, now: DateTime<Utc>) -> Result<UserRecord, LedgerError> {
        let current = self
            .users
            .get(username)
            .ok_or_else(|| LedgerError::UserNotFound(username.to_string()))?
            .score;
        self.update_score_at(username, current.saturating_add(1), now)
    }

    pub fn user(&self, username: &str) -> Result<&UserRecord, LedgerError> {
        self.users
            .get(username)
            .ok_or_else(|| LedgerError::UserNotFound(username.to_string()))
    }

    pub fn users(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.values()
    }

    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        self.board.iter().take(limit).cloned().collect()
    }

    // Projection: top BOARD_SIZE users by score descending, ties broken by
    // earliest score change, then username. The user map doubles as the
    // username index, so no entry lookup ever scans the board itself.
    fn rebuild_board(&mut self) {
        let mut entries: Vec<LeaderboardEntry> = self
            .users
            .values()
            .map(|user| LeaderboardEntry {
                username: user.username.clone(),
                score: user.score,
                updated: user.score_updated,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.updated.cmp(&b.updated))
                .then_with(|| a.username.cmp(&b.username))
        });
        entries.truncate(BOARD_SIZE);
        self.board = entries;
    }
}
