//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async persistence
//! methods that accept `&SqlitePool` as the first argument.

pub mod exercise_repo;

pub use exercise_repo::ExerciseRepo;
