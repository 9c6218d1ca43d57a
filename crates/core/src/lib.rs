//! Domain types and validation for the Sportify backend.
//!
//! This crate is independent of the HTTP and persistence layers. It defines
//! the shared key and timestamp aliases, the validated create payload for
//! exercises, and the error types validation produces.

pub mod error;
pub mod exercise;
pub mod types;
