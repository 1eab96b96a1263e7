use crate::sessions::message_types::ServerSentSocketMessage;
use axum::extract::ws::Message;
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::{atomic::AtomicUsize, Arc};
use tokio::sync::{mpsc, RwLock};

pub static NEXT_SOCKET_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Clone, Default)]
pub struct HashMapClientSocketsStorage {
    storage: Arc<RwLock<HashMap<usize, mpsc::UnboundedSender<Message>>>>,
}

impl HashMapClientSocketsStorage {
    pub async fn add(&self, socket: mpsc::UnboundedSender<Message>) -> usize {
        let socket_id = NEXT_SOCKET_ID.fetch_add(1, Ordering::Relaxed);
        self.storage.write().await.insert(socket_id, socket);
        socket_id
    }

    pub async fn remove(&self, socket_id: usize) {
        self.storage.write().await.remove(&socket_id);
    }

    pub async fn send_msg(&self, msg: &str, socket_id: usize) {
        let storage_guard = self.storage.read().await;
        let Some(tx) = storage_guard.get(&socket_id) else {
            tracing::warn!("No socket with id {socket_id} to send a message to.");
            return;
        };
        if let Err(_disconnected) = tx.send(Message::Text(msg.to_string())) {
            // The receiving half is gone, the socket handler cleans up after itself.
            tracing::warn!("Failed to send a message to socket {socket_id}.");
        }
    }

    pub async fn broadcast_msg(&self, msg: &str, sockets_ids: &[usize]) {
        for (&socket_id, tx) in self.storage.read().await.iter() {
            if sockets_ids.contains(&socket_id) {
                if let Err(_disconnected) = tx.send(Message::Text(msg.to_string())) {
                    tracing::warn!("Failed to broadcast a message to socket {socket_id}.");
                }
            }
        }
    }

    pub async fn broadcast_event(&self, event: &ServerSentSocketMessage, sockets_ids: &[usize]) {
        match serde_json::to_string(event) {
            Ok(msg) => self.broadcast_msg(&msg, sockets_ids).await,
            Err(error) => tracing::error!("Failed to serialize {event:?}: {error}"),
        }
    }
}
