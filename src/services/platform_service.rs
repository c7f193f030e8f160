// src/services/platform_service.rs
//
// Streaming Platform - the façade callers talk to.
//
// Coordinates the item store, the user store and the playback service.
// Ids are derived from the current store size ("user-3" when two users exist).
// That is not a monotonic counter: it only stays unique because nothing is
// ever removed from a store.

use std::sync::Arc;

use log::info;

use crate::config::PlatformConfig;
use crate::domain::{Genre, Item, User};
use crate::error::{AppResult, AppResultExt};
use crate::events::{ContentAdded, EventBus, UserRegistered};
use crate::repositories::{
    InMemoryItemRepository, InMemoryUserRepository, ItemRepository, UserRepository,
};
use crate::services::playback_service::{PlaybackDelay, PlaybackService};

const REGISTER_USER_CONTEXT: &str = "failed to register user";
const ADD_CONTENT_CONTEXT: &str = "failed to add content";

pub struct StreamingPlatform {
    item_repo: Arc<dyn ItemRepository>,
    user_repo: Arc<dyn UserRepository>,
    playback: Arc<PlaybackService>,
    event_bus: Arc<EventBus>,
    user_id_prefix: String,
    item_id_prefix: String,
}

impl StreamingPlatform {
    pub fn new(
        item_repo: Arc<dyn ItemRepository>,
        user_repo: Arc<dyn UserRepository>,
        playback: Arc<PlaybackService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let defaults = PlatformConfig::default();
        Self {
            item_repo,
            user_repo,
            playback,
            event_bus,
            user_id_prefix: defaults.user_id_prefix,
            item_id_prefix: defaults.item_id_prefix,
        }
    }

    pub fn with_id_prefixes(
        mut self,
        user_id_prefix: impl Into<String>,
        item_id_prefix: impl Into<String>,
    ) -> Self {
        self.user_id_prefix = user_id_prefix.into();
        self.item_id_prefix = item_id_prefix.into();
        self
    }

    /// In-memory platform sleeping as configured
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self::from_config_with_delay(config, Arc::new(config.playback.delay()))
    }

    /// In-memory platform with an explicit playback delay
    pub fn from_config_with_delay(
        config: &PlatformConfig,
        delay: Arc<dyn PlaybackDelay>,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let item_repo: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
        let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let playback = Arc::new(PlaybackService::new(
            user_repo.clone(),
            delay,
            event_bus.clone(),
        ));

        Self::new(item_repo, user_repo, playback, event_bus)
            .with_id_prefixes(&config.user_id_prefix, &config.item_id_prefix)
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn register_user(&self, username: &str, subscription: &str) -> AppResult<User> {
        let count = self.user_repo.count().context(REGISTER_USER_CONTEXT)?;
        let user = User::new(
            generate_next_id(&self.user_id_prefix, count),
            username,
            subscription,
        );

        self.user_repo
            .add(user.clone())
            .context(REGISTER_USER_CONTEXT)?;

        info!("registered user {}", user);
        self.event_bus.emit(UserRegistered::new(
            user.id.clone(),
            user.username.clone(),
            user.subscription.clone(),
        ));

        Ok(user)
    }

    pub fn add_content(
        &self,
        title: &str,
        genre: &str,
        url: &str,
        duration_min: u32,
    ) -> AppResult<Item> {
        let genre = genre.parse::<Genre>().context(ADD_CONTENT_CONTEXT)?;
        let count = self.item_repo.count().context(ADD_CONTENT_CONTEXT)?;
        let item = Item::new(
            generate_next_id(&self.item_id_prefix, count),
            title,
            genre,
            url,
            duration_min,
        );

        self.item_repo
            .add(item.clone())
            .context(ADD_CONTENT_CONTEXT)?;

        info!("added content {}", item);
        self.event_bus.emit(ContentAdded::new(
            item.id.clone(),
            item.title.clone(),
            item.genre.to_string(),
            item.duration_min,
        ));

        Ok(item)
    }

    pub fn get_content_details(&self, item_id: &str) -> AppResult<Item> {
        self.item_repo.get(item_id)
    }

    /// Resolve the user, then the item, then play. Blocks for the play.
    pub fn user_watch_item(&self, user_id: &str, item_id: &str) -> AppResult<()> {
        let mut user = self.user_repo.get(user_id)?;
        let item = self.item_repo.get(item_id)?;

        self.playback.play(&mut user, &item)
    }

    pub fn get_watch_history(&self, user_id: &str) -> AppResult<Vec<String>> {
        Ok(self.user_repo.get(user_id)?.watch_history_snapshot())
    }

    pub fn get_user(&self, user_id: &str) -> AppResult<User> {
        self.user_repo.get(user_id)
    }

    pub fn list_content(&self) -> AppResult<Vec<Item>> {
        self.item_repo.list()
    }

    pub fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.list()
    }
}

impl std::fmt::Debug for StreamingPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingPlatform")
            .field("user_id_prefix", &self.user_id_prefix)
            .field("item_id_prefix", &self.item_id_prefix)
            .finish_non_exhaustive()
    }
}

fn generate_next_id(prefix: &str, current_count: usize) -> String {
    format!("{}-{}", prefix, current_count + 1)
}
