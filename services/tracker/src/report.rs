//! Exercise log report assembly
//!
//! Resolves the raw `from`/`to`/`limit` query strings into concrete query
//! parameters and combines a user's identity with their bounded, filtered
//! exercise history.

use anyhow::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    models::User,
    models::exercise::{Exercise, LogEntry, LogQuery, LogReport},
    state::AppState,
    validation,
};

/// Limit applied when the caller does not supply one
pub const DEFAULT_LOG_LIMIT: i64 = 100;

/// Resolved log query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct LogParams {
    /// Inclusive lower date bound; `None` leaves the range open
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper date bound; `None` leaves the range open
    pub to: Option<DateTime<Utc>>,
    /// Maximum number of entries returned
    pub limit: i64,
}

impl Default for LogParams {
    fn default() -> Self {
        LogParams {
            from: None,
            to: None,
            limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl LogParams {
    /// Resolve raw query strings into log parameters
    ///
    /// Malformed `from`/`to` values are treated as "no bound" and a
    /// malformed `limit` falls back to the default, never an error.
    pub fn from_query(query: &LogQuery) -> Self {
        let from = query.from.as_deref().and_then(validation::parse_date);
        let to = query.to.as_deref().and_then(validation::parse_date);

        let limit = query
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LOG_LIMIT)
            .max(0);

        LogParams { from, to, limit }
    }
}

/// Combine a user with their filtered exercises into the log report
///
/// `Total` reflects the entries actually returned, after filtering and
/// limiting, not the full history size.
pub fn assemble(user: &User, exercises: &[Exercise]) -> LogReport {
    let entries: Vec<LogEntry> = exercises.iter().map(LogEntry::from).collect();

    LogReport {
        id: user.id,
        username: user.username.clone(),
        total: entries.len(),
        exercises: entries,
    }
}

/// Build the exercise log report for a user
///
/// Returns `Ok(None)` when the user does not exist; the API layer maps
/// that to a not-found response.
pub async fn build_log(
    state: &AppState,
    user_id: Uuid,
    params: LogParams,
) -> Result<Option<LogReport>> {
    let Some(user) = state.user_repository.find_by_id(user_id).await? else {
        return Ok(None);
    };

    let exercises = state
        .exercise_repository
        .find_for_user(user_id, params.from, params.to, params.limit)
        .await?;

    Ok(Some(assemble(&user, &exercises)))
}
