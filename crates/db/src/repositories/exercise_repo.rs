//! Repository for the `exercises` table.

use chrono::Utc;
use sportify_core::exercise::NewExercise;
use sqlx::SqlitePool;

use crate::models::exercise::Exercise;

/// Column list for exercises queries.
const COLUMNS: &str = "id, name, description, image, daily_time_mins, created_at, updated_at";

/// Provides persistence operations for exercise records.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// List all exercises in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises ORDER BY id ASC");
        sqlx::query_as::<_, Exercise>(&query).fetch_all(pool).await
    }

    /// Insert a validated exercise, returning the created row.
    ///
    /// `created_at` and `updated_at` are set to the same instant.
    pub async fn create(pool: &SqlitePool, input: &NewExercise) -> Result<Exercise, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO exercises (name, description, image, daily_time_mins, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.daily_time_mins)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }
}
