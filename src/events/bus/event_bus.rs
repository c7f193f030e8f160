// src/events/bus/event_bus.rs
//
// Synchronous, typed event bus.
// Handlers run immediately, in subscription order, on the emitting thread.

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use log::{debug, error};

use crate::events::types::DomainEvent;

/// Most recent emissions kept in the event log; older entries are dropped
pub const EVENT_LOG_CAPACITY: usize = 1024;

/// Type-erased event handler function
type EventHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Lets the platform publish facts (user registered, playback finished, ...)
/// without knowing who listens.
///
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in subscription order
/// - Handlers may subscribe further handlers; those see the next emission
/// - A panicking handler is isolated from the others
/// - The last `EVENT_LOG_CAPACITY` emissions are kept in the event log
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
    event_log: Arc<RwLock<VecDeque<EventLogEntry>>>,
}

/// A logged event for debugging and tracing
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    /// Subscribe to a specific event type
    ///
    /// ```ignore
    /// bus.subscribe::<PlaybackFinished, _>(|event| {
    ///     println!("{} finished {}", event.user_id, event.item_id);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();

        let wrapped: EventHandler = Arc::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                error!(
                    "failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        // A poisoned lock still holds a usable map: handlers never mutate it.
        let mut handlers = self.handlers.write().unwrap_or_else(|p| p.into_inner());
        handlers.entry(type_id).or_default().push(wrapped);
    }

    /// Emit an event: record it, then run its handlers in subscription order
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        // Dispatch works on a copy so handlers can take the lock themselves.
        let event_handlers: Vec<EventHandler> = self
            .handlers
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(&type_id)
            .cloned()
            .unwrap_or_default();

        let log_entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: event_handlers.len(),
        };

        debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            log_entry.event_type, log_entry.event_id, log_entry.handler_count
        );

        {
            let mut log = self.event_log.write().unwrap_or_else(|p| p.into_inner());
            if log.len() == EVENT_LOG_CAPACITY {
                log.pop_front();
            }
            log.push_back(log_entry);
        }

        for (idx, handler) in event_handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any);
            }));

            if let Err(e) = result {
                error!(
                    "handler {} for {} panicked: {:?}",
                    idx,
                    event.event_type(),
                    e
                );
            }
        }
    }

    /// Recent emissions, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share handlers and log
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.handlers.read().map(|h| h.len()).unwrap_or(0))
            .field("logged", &self.event_log.read().map(|l| l.len()).unwrap_or(0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn alice_registered() -> UserRegistered {
        UserRegistered::new(
            "user-1".to_string(),
            "alice".to_string(),
            "Premium".to_string(),
        )
    }

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<UserRegistered, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(alice_registered());

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(Mutex::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<ContentAdded, _>(move |_| {
                seq.lock().unwrap().push(n);
            });
        }

        bus.emit(ContentAdded::new(
            "stream-1".to_string(),
            "Inception".to_string(),
            "Action".to_string(),
            148,
        ));

        assert_eq!(*sequence.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();

        bus.emit(PlaybackStarted::new(
            "user-1".to_string(),
            "stream-1".to_string(),
            "http://stream.com/inception".to_string(),
        ));
        bus.emit(PlaybackFinished::new(
            "user-1".to_string(),
            "stream-1".to_string(),
            1,
        ));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "PlaybackStarted");
        assert_eq!(log[1].event_type, "PlaybackFinished");
    }

    #[test]
    fn test_event_log_keeps_only_recent_entries() {
        let bus = EventBus::new();
        let mut first_kept = String::new();

        for n in 0..EVENT_LOG_CAPACITY + 5 {
            let event = alice_registered();
            if n == 5 {
                first_kept = event.event_id.to_string();
            }
            bus.emit(event);
        }

        let log = bus.get_event_log();
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(log[0].event_id, first_kept);
    }

    #[test]
    fn test_handler_can_subscribe_during_dispatch() {
        let bus = EventBus::new();
        let late_calls = Arc::new(AtomicUsize::new(0));
        let subscribed = Arc::new(AtomicBool::new(false));

        let inner_bus = bus.clone();
        let inner_calls = Arc::clone(&late_calls);
        bus.subscribe::<UserRegistered, _>(move |_| {
            if !subscribed.swap(true, Ordering::SeqCst) {
                let calls = Arc::clone(&inner_calls);
                inner_bus.subscribe::<UserRegistered, _>(move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        bus.emit(alice_registered());
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        bus.emit(alice_registered());
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
        assert_eq!(bus.get_event_log()[1].handler_count, 2);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<PlaybackFinished, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<PlaybackFinished, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(PlaybackFinished::new(
            "user-1".to_string(),
            "stream-1".to_string(),
            1,
        ));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
