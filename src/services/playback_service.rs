// src/services/playback_service.rs
//
// Playback Service - simulated viewing
//
// Order of effects for one play:
// 1. current item set in the store
// 2. blocking wait through the injected PlaybackDelay
// 3. item id appended to the stored history, current item released
//
// Steps 1 and 3 are each a single store operation, so overlapping plays
// for one user never lose a history entry.
// There is no cancellation and no rollback once step 1 succeeded.

use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::domain::{Playable, User};
use crate::error::AppResult;
use crate::events::{EventBus, PlaybackFinished, PlaybackStarted};
use crate::repositories::UserRepository;

/// Blocks the calling thread for the simulated length of a play.
pub trait PlaybackDelay: Send + Sync {
    fn wait(&self, duration_min: u32);
}

/// Sleeps `per_minute` of real time for every simulated minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepDelay {
    per_minute: Duration,
}

impl SleepDelay {
    pub fn new(per_minute: Duration) -> Self {
        Self { per_minute }
    }

    pub fn per_minute(&self) -> Duration {
        self.per_minute
    }
}

impl Default for SleepDelay {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl PlaybackDelay for SleepDelay {
    fn wait(&self, duration_min: u32) {
        let total = self.per_minute.saturating_mul(duration_min);
        if !total.is_zero() {
            std::thread::sleep(total);
        }
    }
}

/// Returns immediately. Meant for tests and dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl PlaybackDelay for NoDelay {
    fn wait(&self, _duration_min: u32) {}
}

pub struct PlaybackService {
    user_repo: Arc<dyn UserRepository>,
    delay: Arc<dyn PlaybackDelay>,
    event_bus: Arc<EventBus>,
}

impl PlaybackService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        delay: Arc<dyn PlaybackDelay>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            user_repo,
            delay,
            event_bus,
        }
    }

    /// Play `item` for `user`, blocking for the item's simulated duration.
    ///
    /// The store is the source of truth: `user` is overwritten with the
    /// stored state after each step, so it also reflects plays that
    /// overlapped with this one.
    pub fn play(&self, user: &mut User, item: &dyn Playable) -> AppResult<()> {
        info!(
            "starting playback for {}: {} ({}, {} min) from {}",
            user.username,
            item.title(),
            item.genre(),
            item.duration_min(),
            item.url()
        );

        *user = self.user_repo.start_play(&user.id, item.id())?;
        self.event_bus.emit(PlaybackStarted::new(
            user.id.clone(),
            item.id().to_string(),
            item.url().to_string(),
        ));

        self.delay.wait(item.duration_min());

        *user = self.user_repo.finish_play(&user.id, item.id())?;

        info!("playback of {} finished for {}", item.title(), user.username);
        self.event_bus.emit(PlaybackFinished::new(
            user.id.clone(),
            item.id().to_string(),
            user.watch_history().len(),
        ));

        Ok(())
    }
}

impl std::fmt::Debug for PlaybackService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackService").finish_non_exhaustive()
    }
}
