//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] carries [`EntityEvent`]s from request handlers to the
//! [`SearchIndexer`](crate::indexer::SearchIndexer). It is shared via
//! `Arc<EventBus>` in the application state.

use souk_db::models::search::Searchable;
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// EntityEvent
// ---------------------------------------------------------------------------

/// Notice that a searchable entity was written or deleted.
///
/// Events carry no snapshot of the entity. The indexer reloads the row
/// when it handles the event, so the order in which events from
/// overlapping requests arrive does not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityEvent {
    pub entity_type: String,
    pub entity_id: String,
}

impl EntityEvent {
    /// Build a change notice for the entity type of `T`.
    pub fn changed<T: Searchable>(entity_id: impl ToString) -> Self {
        Self {
            entity_type: T::ENTITY_TYPE.to_string(),
            entity_id: entity_id.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
pub const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use souk_events::bus::{EntityEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(EntityEvent {
///     entity_type: "product".into(),
///     entity_id: "1".into(),
/// });
/// ```
pub struct EventBus {
    sender: broadcast::Sender<EntityEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unread events are dropped and
    /// slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: EntityEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EntityEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use souk_db::models::comment::CommentDto;
    use souk_db::models::product::ProductDto;

    use super::*;

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(EntityEvent::changed::<ProductDto>(5));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");
        assert_eq!(e1, e2);
        assert_eq!(e1.entity_type, "product");
        assert_eq!(e1.entity_id, "5");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(EntityEvent::changed::<CommentDto>(1));
    }

    #[tokio::test]
    async fn small_buffer_reports_lag() {
        let bus = EventBus::new(1);
        let mut rx = bus.subscribe();
        bus.publish(EntityEvent::changed::<CommentDto>(1));
        bus.publish(EntityEvent::changed::<CommentDto>(2));

        assert_matches!(rx.recv().await, Err(broadcast::error::RecvError::Lagged(1)));
        assert_eq!(rx.recv().await.unwrap().entity_id, "2");
    }
}
