//! Decide whether a document is an official document under the Freedom of
//! the Press Act, one questionnaire answer at a time.

pub mod config;
pub mod error;
pub mod questionnaire;
pub mod telemetry;
