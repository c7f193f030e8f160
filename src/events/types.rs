// src/events/types.rs
//
// Domain events emitted by the platform.
// Each event is an immutable fact that has already happened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// USER EVENTS
// ============================================================================

/// Emitted after a user has been stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub username: String,
    pub subscription: String,
}

impl UserRegistered {
    pub fn new(user_id: String, username: String, subscription: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            username,
            subscription,
        }
    }
}

impl DomainEvent for UserRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserRegistered" }
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted after an item has been stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: String,
    pub title: String,
    pub genre: String,
    pub duration_min: u32,
}

impl ContentAdded {
    pub fn new(item_id: String, title: String, genre: String, duration_min: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            title,
            genre,
            duration_min,
        }
    }
}

impl DomainEvent for ContentAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ContentAdded" }
}

// ============================================================================
// PLAYBACK EVENTS
// ============================================================================

/// Emitted once the user's current item is set, before the simulated wait
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub item_id: String,
    pub url: String,
}

impl PlaybackStarted {
    pub fn new(user_id: String, item_id: String, url: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            item_id,
            url,
        }
    }
}

impl DomainEvent for PlaybackStarted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PlaybackStarted" }
}

/// Emitted after the item was appended to the history and the current item cleared
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackFinished {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
    pub item_id: String,
    pub history_len: usize,
}

impl PlaybackFinished {
    pub fn new(user_id: String, item_id: String, history_len: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            item_id,
            history_len,
        }
    }
}

impl DomainEvent for PlaybackFinished {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PlaybackFinished" }
}
