//! Exercise models for the tracker service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::User;

/// Date rendering used on the wire, e.g. `Thu Jan 05 2023`
const DATE_FORMAT: &str = "%a %b %d %Y";

/// Stored exercise record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Duration in whole minutes
    pub duration: i32,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    /// Render the exercise date the way the API reports it
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Request to log an exercise against a user (JSON or form body)
#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub date: Option<String>,
}

/// Wire shape for a created exercise
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl ExerciseResponse {
    pub fn new(exercise: &Exercise, user: &User) -> Self {
        ExerciseResponse {
            id: exercise.id,
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date_string(),
        }
    }
}

/// Raw query parameters for the log endpoint
///
/// All fields are kept as strings; the report builder owns the parsing and
/// its leniency rules.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// One entry in the exercise log report
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        LogEntry {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date_string(),
        }
    }
}

/// The aggregated exercise log for one user
#[derive(Debug, Serialize)]
pub struct LogReport {
    pub id: Uuid,
    pub username: String,
    pub exercises: Vec<LogEntry>,
    /// Count of the exercises returned, after filtering and limiting
    #[serde(rename = "Total")]
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_exercise() -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: "run".to_string(),
            duration: 30,
            date: Utc.with_ymd_and_hms(2023, 1, 5, 0, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 5, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_date_string_matches_wire_format() {
        assert_eq!(sample_exercise().date_string(), "Thu Jan 05 2023");
    }

    #[test]
    fn test_report_serializes_wire_names() {
        let exercise = sample_exercise();
        let report = LogReport {
            id: exercise.user_id,
            username: "alice".to_string(),
            exercises: vec![LogEntry::from(&exercise)],
            total: 1,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["Total"], 1);
        assert_eq!(value["username"], "alice");
        assert_eq!(value["exercises"][0]["description"], "run");
        assert_eq!(value["exercises"][0]["date"], "Thu Jan 05 2023");
    }
}
