//! Exercise record model.

use serde::{Deserialize, Serialize};
use sportify_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `exercises` table.
///
/// Serializes with the camelCase field names the mobile client expects.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Daily exercise time in minutes.
    #[serde(rename = "dailyTime")]
    pub daily_time_mins: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new exercise.
///
/// Every field is optional at the wire level. Presence and content are
/// checked by `sportify_core::exercise::validate_new_exercise`, which lets
/// a single response report all missing fields instead of failing on the
/// first one during deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "dailyTime")]
    pub daily_time_mins: Option<i64>,
}
