use crate::server::state::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};

pub(crate) async fn upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| session(socket, state))
}

/// Push every frame to one client until either side goes away.
///
/// Inbound data frames are read and discarded so pings and closes are seen.
async fn session(socket: WebSocket, state: AppState) {
    let mut subscription = state.hub.subscribe(&state.store);
    let id = subscription.id();
    let mut shutdown = state.shutdown.clone();
    let (mut sink, mut stream) = socket.split();

    tracing::info!(subscriber = %id, "websocket opened");

    loop {
        tokio::select! {
            frame = subscription.next() => {
                let Some(frame) = frame else { break };
                if let Err(e) = sink.send(Message::Text(frame.json.to_string())).await {
                    tracing::debug!(subscriber = %id, error = %e, "websocket send failed");
                    break;
                }
            }
            inbound = stream.next() => match inbound {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(e)) => {
                    tracing::debug!(subscriber = %id, error = %e, "websocket read failed");
                    break;
                }
                Some(Ok(_)) => {}
            },
            _ = shutdown.wait() => {
                let _ = sink.send(Message::Close(None)).await;
                break;
            }
        }
    }

    tracing::info!(subscriber = %id, "websocket closed");
}
