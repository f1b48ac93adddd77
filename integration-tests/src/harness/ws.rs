use futures_util::StreamExt;
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

pub type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub async fn connect(url: &str) -> Socket {
    let (socket, _) = connect_async(url).await.expect("ws connect failed");
    socket
}

/// The next snapshot pushed on `socket`, skipping control frames.
pub async fn next_snapshot(socket: &mut Socket) -> Value {
    let read = async {
        loop {
            match socket.next().await {
                Some(Ok(Message::Text(text))) => {
                    return serde_json::from_str(&text).expect("frame is not JSON");
                }
                Some(Ok(_)) => continue,
                other => panic!("socket ended: {other:?}"),
            }
        }
    };

    tokio::time::timeout(Duration::from_secs(10), read)
        .await
        .expect("no snapshot within 10s")
}

/// Read snapshots until one satisfies `accept`.
pub async fn wait_for_snapshot(socket: &mut Socket, accept: impl Fn(&Value) -> bool) -> Value {
    loop {
        let snapshot = next_snapshot(socket).await;
        if accept(&snapshot) {
            return snapshot;
        }
    }
}
