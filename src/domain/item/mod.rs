pub mod entity;
pub mod invariants;

pub use entity::{Genre, Item, Playable};
pub use invariants::validate_item;
