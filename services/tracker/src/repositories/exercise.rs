//! Exercise repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::exercise::Exercise;

/// Exercise repository for database operations
#[derive(Clone)]
pub struct ExerciseRepository {
    pool: PgPool,
}

impl ExerciseRepository {
    /// Create a new exercise repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new exercise linked to a user
    ///
    /// The caller resolves the date (supplied or now) and verifies the user
    /// exists before inserting.
    pub async fn create(
        &self,
        user_id: Uuid,
        description: &str,
        duration: i32,
        date: DateTime<Utc>,
    ) -> Result<Exercise> {
        info!("Logging exercise for user: {}", user_id);

        let row = sqlx::query(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(user_id)
        .bind(description)
        .bind(duration)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        let exercise = Exercise {
            id: row.get("id"),
            user_id: row.get("user_id"),
            description: row.get("description"),
            duration: row.get("duration"),
            date: row.get("date"),
            created_at: row.get("created_at"),
        };

        Ok(exercise)
    }

    /// Get a user's exercises within an inclusive date range
    ///
    /// A `None` bound leaves that side of the range open. Results keep
    /// insertion order and are truncated to `limit` rows.
    pub async fn find_for_user(
        &self,
        user_id: Uuid,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<Exercise>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::timestamptz IS NULL OR date >= $2)
              AND ($3::timestamptz IS NULL OR date <= $3)
            ORDER BY created_at
            LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let exercises = rows
            .into_iter()
            .map(|row| Exercise {
                id: row.get("id"),
                user_id: row.get("user_id"),
                description: row.get("description"),
                duration: row.get("duration"),
                date: row.get("date"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(exercises)
    }
}
