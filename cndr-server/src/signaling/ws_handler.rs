use crate::signaling::{ConnectionId, ConnectionSender, HandshakeSession, decode_client_event};
use axum::extract::WebSocketUpgrade;
use axum::extract::ws::{Message, WebSocket};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    let connection_id = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, connection_id))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId) {
    info!("New WebSocket connection: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        let outgoing = ConnectionSender::new(connection_id, tx);
        let mut session = HandshakeSession::new(connection_id);

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match decode_client_event(&text) {
                    Ok(event) => {
                        let Some(reply) = session.handle(event) else {
                            continue;
                        };
                        if !outgoing.send_event(&reply) {
                            break;
                        }
                    }
                    Err(e) => warn!("Invalid client event from {}: {}", connection_id, e),
                },
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        // the reader owns the only sender, so the writer drains what is queued and stops
        _ = (&mut recv_task) => { let _ = send_task.await; }
    };

    info!("WebSocket disconnected: {}", connection_id);
}
