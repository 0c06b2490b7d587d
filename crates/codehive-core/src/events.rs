//! Real-time event envelopes exchanged over the WebSocket transport.

use serde::{Deserialize, Serialize};

/// An event flowing through the real-time hub.
///
/// The wire format matches what clients send and receive:
/// `{"event": "chat:message", "data": ...}`. Payloads are opaque to the
/// server; every received event is fanned out to all connected peers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum RealtimeEvent {
    /// A chat message relayed between peers.
    #[serde(rename = "chat:message")]
    ChatMessage(serde_json::Value),
    /// A project mutation notification relayed between peers.
    #[serde(rename = "project:update")]
    ProjectUpdate(serde_json::Value),
}

impl RealtimeEvent {
    /// Returns the event name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChatMessage(_) => "chat:message",
            Self::ProjectUpdate(_) => "project:update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_round_trips_wire_format() {
        let raw = r#"{"event":"chat:message","data":{"text":"hi"}}"#;
        let event: RealtimeEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.name(), "chat:message");

        let encoded = serde_json::to_value(&event).unwrap();
        assert_eq!(encoded["event"], "chat:message");
        assert_eq!(encoded["data"]["text"], "hi");
    }

    #[test]
    fn unknown_event_is_rejected() {
        let raw = r#"{"event":"presence:ping","data":{}}"#;
        assert!(serde_json::from_str::<RealtimeEvent>(raw).is_err());
    }
}
