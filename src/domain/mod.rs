// src/domain/mod.rs
//
// Domain Root - entities, invariants and the capability traits they expose.
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod item;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Item Domain
pub use item::{validate_item, Genre, Item, Playable};

// User Domain
pub use user::{validate_user, User};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants.
/// Every variant is an invalid-input condition from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid genre '{0}'")]
    UnknownGenre(String),

    #[error("{entity} with id '{id}' already exists")]
    AlreadyExists { entity: &'static str, id: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
