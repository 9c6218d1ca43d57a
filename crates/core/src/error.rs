/// A single rejected input field.
///
/// The field name is the wire-level (camelCase) name so error messages
/// match what the client actually sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFailure {
    /// The field was absent from the payload.
    Missing(&'static str),
    /// The field was present but blank.
    Empty(&'static str),
}

impl FieldFailure {
    /// The per-field message shown to clients.
    pub fn message(&self) -> String {
        match self {
            FieldFailure::Missing(field) => format!("{field} is required"),
            FieldFailure::Empty(field) => format!("{field} must not be empty"),
        }
    }
}

/// Validation failure for a create payload.
///
/// Carries one [`FieldFailure`] per rejected field so a single response
/// can report every problem at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.failures))]
pub struct ValidationError {
    pub failures: Vec<FieldFailure>,
}

fn summarize(failures: &[FieldFailure]) -> String {
    failures
        .iter()
        .map(FieldFailure::message)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        assert_eq!(FieldFailure::Missing("name").message(), "name is required");
    }

    #[test]
    fn test_empty_field_message() {
        assert_eq!(
            FieldFailure::Empty("description").message(),
            "description must not be empty"
        );
    }

    #[test]
    fn test_display_joins_all_failures() {
        let err = ValidationError {
            failures: vec![
                FieldFailure::Missing("name"),
                FieldFailure::Empty("image"),
            ],
        };
        assert_eq!(err.to_string(), "name is required, image must not be empty");
    }

    #[test]
    fn test_display_single_failure() {
        let err = ValidationError {
            failures: vec![FieldFailure::Missing("dailyTime")],
        };
        assert_eq!(err.to_string(), "dailyTime is required");
    }
}
