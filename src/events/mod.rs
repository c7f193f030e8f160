// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported.

pub mod bus;
pub mod types;

pub use types::{
    // Catalog
    ContentAdded,
    DomainEvent,
    // Playback
    PlaybackFinished,
    PlaybackStarted,
    // Users
    UserRegistered,
};

pub use bus::{EventBus, EventLogEntry};
