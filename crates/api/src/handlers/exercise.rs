//! Handlers for the `/exercises` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sportify_core::exercise::validate_new_exercise;
use sportify_db::models::exercise::{CreateExercise, Exercise};
use sportify_db::repositories::ExerciseRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/exercises
///
/// Returns every stored exercise in insertion order. An empty store yields
/// an empty array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Exercise>>> {
    let exercises = ExerciseRepo::list(&state.pool).await?;
    Ok(Json(exercises))
}

/// POST /api/exercises
///
/// Validates the payload before anything touches the database, then inserts
/// the record and returns it with its generated id and timestamps.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExercise>,
) -> AppResult<(StatusCode, Json<Exercise>)> {
    let new_exercise = validate_new_exercise(
        input.name.as_deref(),
        input.description.as_deref(),
        input.image.as_deref(),
        input.daily_time_mins,
    )?;

    let exercise = ExerciseRepo::create(&state.pool, &new_exercise).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}
