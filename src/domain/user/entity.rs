use serde::{Deserialize, Serialize};

/// A registered viewer.
/// Watch history is append-only, so it is only reachable through methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Platform identifier (e.g. "user-1")
    pub id: String,

    pub username: String,

    /// Subscription tier ("Premium", "Basic", ...)
    pub subscription: String,

    /// Ids of watched items, in viewing order
    watch_history: Vec<String>,

    /// Id of the item being played right now, if any
    current_item: Option<String>,
}

impl User {
    /// Create a new User with an empty history
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        subscription: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            subscription: subscription.into(),
            watch_history: Vec::new(),
            current_item: None,
        }
    }

    /// Read-only view of the history
    pub fn watch_history(&self) -> &[String] {
        &self.watch_history
    }

    /// Owned copy of the history; changes to it never reach the user
    pub fn watch_history_snapshot(&self) -> Vec<String> {
        self.watch_history.clone()
    }

    pub fn add_to_watch_history(&mut self, item_id: impl Into<String>) {
        self.watch_history.push(item_id.into());
    }

    pub fn current_item(&self) -> Option<&str> {
        self.current_item.as_deref()
    }

    pub fn set_current_item(&mut self, item_id: impl Into<String>) {
        self.current_item = Some(item_id.into());
    }

    /// Record a finished play. The current item is cleared only if it still
    /// points at `item_id`; a play started later keeps its pointer.
    pub fn finish_playing(&mut self, item_id: &str) {
        self.watch_history.push(item_id.to_string());
        if self.current_item.as_deref() == Some(item_id) {
            self.current_item = None;
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.username, self.id, self.subscription)
    }
}
