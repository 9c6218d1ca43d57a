//! Exercise domain types and create-payload validation.

use crate::error::{FieldFailure, ValidationError};

/// A validated payload for creating an exercise record.
///
/// Values of this type only come out of [`validate_new_exercise`], so
/// holding one means every required field was present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    /// Display name, stored trimmed.
    pub name: String,
    /// Longer description, stored trimmed.
    pub description: String,
    /// Image URI, stored exactly as given.
    pub image: String,
    /// Daily exercise time in minutes.
    pub daily_time_mins: i64,
}

/// Validate raw create input into a [`NewExercise`].
///
/// All failures are collected before returning so the caller can report
/// every bad field in one response. `name` and `description` are trimmed
/// before the empty check and stored trimmed; `image` is only checked for
/// presence and stored as given.
pub fn validate_new_exercise(
    name: Option<&str>,
    description: Option<&str>,
    image: Option<&str>,
    daily_time_mins: Option<i64>,
) -> Result<NewExercise, ValidationError> {
    let mut failures = Vec::new();

    let name = checked_trimmed("name", name, &mut failures);
    let description = checked_trimmed("description", description, &mut failures);
    let image = checked_present("image", image, &mut failures);

    let daily_time_mins = match daily_time_mins {
        None => {
            failures.push(FieldFailure::Missing("dailyTime"));
            None
        }
        some => some,
    };

    // Every None above pushed a failure, so the fallthrough arm always
    // carries at least one.
    match (name, description, image, daily_time_mins) {
        (Some(name), Some(description), Some(image), Some(daily_time_mins)) => Ok(NewExercise {
            name,
            description,
            image,
            daily_time_mins,
        }),
        _ => Err(ValidationError { failures }),
    }
}

/// Require a text field, trimming it before the empty check.
fn checked_trimmed(
    field: &'static str,
    value: Option<&str>,
    failures: &mut Vec<FieldFailure>,
) -> Option<String> {
    match value {
        None => {
            failures.push(FieldFailure::Missing(field));
            None
        }
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                failures.push(FieldFailure::Empty(field));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

/// Require a text field without altering its content.
fn checked_present(
    field: &'static str,
    value: Option<&str>,
    failures: &mut Vec<FieldFailure>,
) -> Option<String> {
    match value {
        None => {
            failures.push(FieldFailure::Missing(field));
            None
        }
        Some("") => {
            failures.push(FieldFailure::Empty(field));
            None
        }
        Some(raw) => Some(raw.to_string()),
    }
}
