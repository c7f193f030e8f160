use super::entity::User;
use crate::domain::{DomainError, DomainResult};

/// Validates all User invariants
pub fn validate_user(user: &User) -> DomainResult<()> {
    if user.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "User id cannot be empty".to_string(),
        ));
    }
    if user.username.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Username cannot be empty".to_string(),
        ));
    }
    if user.subscription.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Subscription cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Critical User Invariants:
///
/// 1. Identity is immutable and unique within the user store
/// 2. Username and subscription are never empty
/// 3. Watch history only grows (never reordered or truncated)
/// 4. Current item is set only while a play is in progress
