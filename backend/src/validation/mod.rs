//! Validation for request payloads and path/query parameters.

pub mod rules;

pub use validator::Validate;
