// src/main.rs
//
// Demonstration driver: wires the in-memory platform and runs a fixed
// scenario against it.

use std::sync::Arc;

use anyhow::Context;
use log::{error, info};

use streamhub::config::{PlatformConfig, CONFIG_ENV_VAR};
use streamhub::events::{EventBus, PlaybackFinished};
use streamhub::repositories::{
    InMemoryItemRepository, InMemoryUserRepository, ItemRepository, UserRepository,
};
use streamhub::services::{PlaybackService, StreamingPlatform};
use streamhub::ErrorResponse;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => PlatformConfig::load(&path)
            .with_context(|| format!("loading {}", path.to_string_lossy()))?,
        None => PlatformConfig::default(),
    };

    // 2. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());
    event_bus.subscribe::<PlaybackFinished, _>(|event| {
        info!(
            "{} has watched {} item(s), latest {}",
            event.user_id, event.history_len, event.item_id
        );
    });

    // 3. REPOSITORIES
    let item_repo: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());

    // 4. SERVICES
    let playback = Arc::new(PlaybackService::new(
        user_repo.clone(),
        Arc::new(config.playback.delay()),
        event_bus.clone(),
    ));
    let platform = StreamingPlatform::new(item_repo, user_repo, playback, event_bus)
        .with_id_prefixes(&config.user_id_prefix, &config.item_id_prefix);

    run_scenario(&platform)?;
    Ok(())
}

fn run_scenario(platform: &StreamingPlatform) -> anyhow::Result<()> {
    info!("--- registering users ---");
    let alice = platform.register_user("alice", "Premium")?;
    let bob = platform.register_user("bob", "Basic")?;

    info!("--- adding content ---");
    let inception =
        platform.add_content("Inception", "Accion", "http://stream.com/inception", 148)?;
    let breaking_bad =
        platform.add_content("Breaking Bad S1E1", "Drama", "http://stream.com/bb-s1e1", 55)?;
    platform.add_content("Classical Mix", "Musical", "http://stream.com/classical", 60)?;
    if let Err(e) =
        platform.add_content("Unknown Movie", "Fantasy", "http://stream.com/unknown", 90)
    {
        report("adding content", &e);
    }

    info!("--- available content ---");
    let mut catalog = platform.list_content()?;
    catalog.sort_by(|a, b| a.id.cmp(&b.id));
    for item in &catalog {
        info!("{}", item);
    }

    info!("--- playback ---");
    platform.user_watch_item(&alice.id, &inception.id)?;
    platform.user_watch_item(&bob.id, &breaking_bad.id)?;
    if let Err(e) = platform.user_watch_item(&alice.id, "stream-999") {
        report("playing a missing item", &e);
    }
    if let Err(e) = platform.user_watch_item("user-999", &inception.id) {
        report("playing as a missing user", &e);
    }

    info!("--- watch history ---");
    for user in [&alice, &bob] {
        info!("{}: {:?}", user.username, platform.get_watch_history(&user.id)?);
    }

    info!("--- recent events ---");
    for entry in platform.event_bus().get_event_log() {
        info!(
            "{} {} ({}, {} handlers)",
            entry.occurred_at, entry.event_type, entry.event_id, entry.handler_count
        );
    }

    Ok(())
}

fn report(action: &str, err: &streamhub::AppError) {
    let response = ErrorResponse::from_app_error(err);
    error!(
        "{} failed [{:?}]: {}",
        action,
        response.error_type,
        response.details.unwrap_or(response.message)
    );
}
