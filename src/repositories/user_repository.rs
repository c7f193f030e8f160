// src/repositories/user_repository.rs
//
// User persistence (in-memory)

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::domain::user::{validate_user, User};
use crate::domain::DomainError;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Validate and insert. Rejects duplicates; the store is untouched on error.
    fn add(&self, user: User) -> AppResult<()>;
    fn get(&self, id: &str) -> AppResult<User>;
    /// Copy of every stored user, in no particular order
    fn list(&self) -> AppResult<Vec<User>>;
    fn count(&self) -> AppResult<usize>;
    /// Mark `item_id` as the user's current item. Returns the stored user.
    fn start_play(&self, user_id: &str, item_id: &str) -> AppResult<User>;
    /// Append `item_id` to the stored history and release the current item
    /// if it is still `item_id`, in one step. Returns the stored user.
    fn finish_play(&self, user_id: &str, item_id: &str) -> AppResult<User>;
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn add(&self, user: User) -> AppResult<()> {
        validate_user(&user)?;

        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::LockPoisoned("user write"))?;

        if users.contains_key(&user.id) {
            return Err(DomainError::AlreadyExists {
                entity: "User",
                id: user.id,
            }
            .into());
        }

        debug!("storing user {} ({})", user.id, user.username);
        users.insert(user.id.clone(), user);
        Ok(())
    }

    fn get(&self, id: &str) -> AppResult<User> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::LockPoisoned("user read"))?;

        users
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::user_not_found(id))
    }

    fn list(&self) -> AppResult<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::LockPoisoned("user read"))?;

        Ok(users.values().cloned().collect())
    }

    fn count(&self) -> AppResult<usize> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::LockPoisoned("user read"))?;

        Ok(users.len())
    }

    fn start_play(&self, user_id: &str, item_id: &str) -> AppResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::LockPoisoned("user write"))?;

        let stored = users
            .get_mut(user_id)
            .ok_or_else(|| AppError::user_not_found(user_id))?;

        stored.set_current_item(item_id);
        debug!("user {} is playing {}", user_id, item_id);
        Ok(stored.clone())
    }

    fn finish_play(&self, user_id: &str, item_id: &str) -> AppResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::LockPoisoned("user write"))?;

        let stored = users
            .get_mut(user_id)
            .ok_or_else(|| AppError::user_not_found(user_id))?;

        stored.finish_playing(item_id);
        debug!(
            "user {} finished {} (history: {}, playing: {:?})",
            user_id,
            item_id,
            stored.watch_history().len(),
            stored.current_item()
        );
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, Resource};

    #[test]
    fn test_add_then_get_returns_equal_user() {
        let repo = InMemoryUserRepository::new();
        let alice = User::new("user-1", "alice", "Premium");

        repo.add(alice.clone()).unwrap();

        assert_eq!(repo.get("user-1").unwrap(), alice);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let repo = InMemoryUserRepository::new();

        let err = repo.add(User::new("user-1", "", "Premium")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = repo.add(User::new("user-1", "alice", "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.add(User::new("user-1", "alice", "Premium")).unwrap();

        let err = repo.add(User::new("user-1", "bob", "Basic")).unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::AlreadyExists { entity: "User", .. })
        ));
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get("user-1").unwrap().username, "alice");
    }

    #[test]
    fn test_get_missing_is_user_not_found() {
        let repo = InMemoryUserRepository::new();
        let err = repo.get("user-999").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound(Resource::User));
    }

    #[test]
    fn test_returned_user_is_a_copy() {
        let repo = InMemoryUserRepository::new();
        repo.add(User::new("user-1", "alice", "Premium")).unwrap();

        let mut copy = repo.get("user-1").unwrap();
        copy.add_to_watch_history("stream-1");

        assert!(repo.get("user-1").unwrap().watch_history().is_empty());
    }

    #[test]
    fn test_start_play_sets_current_item_in_store() {
        let repo = InMemoryUserRepository::new();
        repo.add(User::new("user-1", "alice", "Premium")).unwrap();

        let returned = repo.start_play("user-1", "stream-1").unwrap();

        assert_eq!(returned.current_item(), Some("stream-1"));
        assert_eq!(repo.get("user-1").unwrap(), returned);
    }

    #[test]
    fn test_finish_play_appends_to_stored_history() {
        let repo = InMemoryUserRepository::new();
        repo.add(User::new("user-1", "alice", "Premium")).unwrap();
        repo.start_play("user-1", "stream-1").unwrap();

        let returned = repo.finish_play("user-1", "stream-1").unwrap();

        assert_eq!(returned.watch_history(), ["stream-1"]);
        assert_eq!(returned.current_item(), None);
        assert_eq!(repo.get("user-1").unwrap(), returned);
    }

    #[test]
    fn test_interleaved_plays_keep_both_entries() {
        let repo = InMemoryUserRepository::new();
        repo.add(User::new("user-1", "alice", "Premium")).unwrap();

        repo.start_play("user-1", "stream-1").unwrap();
        repo.start_play("user-1", "stream-2").unwrap();
        let after_first = repo.finish_play("user-1", "stream-1").unwrap();
        assert_eq!(after_first.current_item(), Some("stream-2"));

        let after_second = repo.finish_play("user-1", "stream-2").unwrap();
        assert_eq!(after_second.watch_history(), ["stream-1", "stream-2"]);
        assert_eq!(after_second.current_item(), None);
    }

    #[test]
    fn test_play_steps_on_missing_user_fail() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(
            repo.start_play("user-9", "stream-1").unwrap_err().kind(),
            ErrorKind::NotFound(Resource::User)
        );
        assert_eq!(
            repo.finish_play("user-9", "stream-1").unwrap_err().kind(),
            ErrorKind::NotFound(Resource::User)
        );
    }
}
