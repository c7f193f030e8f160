// src/application/mod.rs
//
// Application Layer
//
// Boundary between external callers and the services: translates internal
// errors into caller-facing responses.

pub mod error_handling;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
