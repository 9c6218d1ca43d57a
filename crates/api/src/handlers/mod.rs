//! Request handlers for the exercise API.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `sportify_db` and
//! map errors via [`AppError`].

pub mod exercise;
