//! Broadcast hub relaying events to all connected clients.

use tokio::sync::broadcast;
use tracing::debug;

use codehive_core::config::RealtimeConfig;
use codehive_core::events::RealtimeEvent;

/// Fan-out hub over a single broadcast channel.
///
/// Every connected client subscribes to the same channel; a published
/// event reaches all of them, including the sender. Slow consumers
/// that fall behind the channel capacity see a lagged receive and skip
/// ahead.
#[derive(Debug)]
pub struct RealtimeHub {
    /// Broadcast sender; receivers are created per connection.
    sender: broadcast::Sender<RealtimeEvent>,
}

impl RealtimeHub {
    /// Creates a hub with the configured channel capacity.
    pub fn new(config: &RealtimeConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity);
        Self { sender }
    }

    /// Publishes an event to all current subscribers. Returns the
    /// number of receivers the event was delivered to.
    pub fn publish(&self, event: RealtimeEvent) -> usize {
        let delivered = self.sender.send(event).unwrap_or(0);
        debug!(delivered, "Published realtime event");
        delivered
    }

    /// Subscribes a new client to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.sender.subscribe()
    }

    /// Number of currently subscribed clients.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hub() -> RealtimeHub {
        RealtimeHub::new(&RealtimeConfig {
            channel_capacity: 16,
        })
    }

    #[tokio::test]
    async fn event_reaches_all_subscribers() {
        let hub = hub();
        let mut a = hub.subscribe();
        let mut b = hub.subscribe();

        let delivered = hub.publish(RealtimeEvent::ChatMessage(json!({"text": "hi"})));
        assert_eq!(delivered, 2);

        for rx in [&mut a, &mut b] {
            let event = rx.recv().await.unwrap();
            assert_eq!(event.name(), "chat:message");
        }
    }

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let hub = hub();
        let delivered = hub.publish(RealtimeEvent::ProjectUpdate(json!({})));
        assert_eq!(delivered, 0);
    }
}
