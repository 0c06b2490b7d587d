//! WebSocket upgrade and event relay.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use codehive_core::events::RealtimeEvent;

use crate::state::AppState;

/// GET /ws — WebSocket upgrade.
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_connection(state, socket))
}

/// Relays events between one client and the hub.
///
/// Inbound text frames that parse as a known event are published to
/// the hub; the hub's stream, which includes the sender's own events,
/// is forwarded back out as text frames.
async fn handle_connection(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut events = state.hub.subscribe();

    info!(
        subscribers = state.hub.subscriber_count(),
        "WebSocket connection established"
    );

    let outbound_task = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let text = match serde_json::to_string(&event) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(error = %e, "Failed to serialize realtime event");
                            continue;
                        }
                    };
                    if ws_tx.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "WebSocket client lagged behind event stream");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Text(text)) => match serde_json::from_str::<RealtimeEvent>(&text) {
                Ok(event) => {
                    debug!(event = event.name(), "Relaying realtime event");
                    state.hub.publish(event);
                }
                Err(e) => {
                    warn!(error = %e, "Ignoring unrecognized WebSocket message");
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    outbound_task.abort();
    info!("WebSocket connection closed");
}
