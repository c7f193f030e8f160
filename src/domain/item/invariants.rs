use super::entity::Item;
use crate::domain::{DomainError, DomainResult};

/// Validates all Item invariants
/// Genre membership is guaranteed by the `Genre` type itself.
pub fn validate_item(item: &Item) -> DomainResult<()> {
    validate_not_blank("Item id", &item.id)?;
    validate_not_blank("Item title", &item.title)?;
    validate_not_blank("Item url", &item.url)?;
    validate_duration(item.duration_min)?;
    Ok(())
}

fn validate_not_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

fn validate_duration(duration_min: u32) -> DomainResult<()> {
    if duration_min == 0 {
        return Err(DomainError::InvariantViolation(
            "Item duration must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for Item domain:
///
/// 1. Identity is immutable and unique within the item store
/// 2. Title and url are never empty
/// 3. Duration is strictly positive
/// 4. Genre belongs to the fixed catalog set
/// 5. Items are never removed once stored
