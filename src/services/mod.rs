// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod platform_service;
pub mod playback_service;

pub use platform_service::StreamingPlatform;

pub use playback_service::{NoDelay, PlaybackDelay, PlaybackService, SleepDelay};
