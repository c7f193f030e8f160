// src/lib.rs
// StreamHub - in-memory streaming catalog and playback simulator
//
// Architecture:
// - Domain-centric: entities validate themselves (domain)
// - Stores own entities and hand out copies (repositories)
// - Services orchestrate stores; the platform is the façade (services)
// - Facts are published on a synchronous bus (events)
// - Callers get stable error categories (application)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{validate_item, validate_user, DomainError, Genre, Item, Playable, User};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, AppResultExt, ErrorKind, Resource};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{PlatformConfig, PlaybackConfig};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    ContentAdded, DomainEvent, EventBus, EventLogEntry, PlaybackFinished, PlaybackStarted,
    UserRegistered,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    InMemoryItemRepository, InMemoryUserRepository, ItemRepository, UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{NoDelay, PlaybackDelay, PlaybackService, SleepDelay, StreamingPlatform};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{ErrorResponse, ErrorType, ToErrorResponse};
