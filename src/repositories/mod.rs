// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Stores own their entities and hand out clones
// - Every write re-validates the entity before touching the map
// - A rejected write leaves the store unchanged
// - Errors are returned, never logged here

pub mod item_repository;
pub mod user_repository;

pub use item_repository::{InMemoryItemRepository, ItemRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use item_repository::MockItemRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
