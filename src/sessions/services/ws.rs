use crate::app_context::{AppContext, RequestContext};
use crate::sessions::message_types::{ClientSentSocketMessage, ServerSentSocketMessage};
use crate::storage::interface::ISessionStorage;
use axum::extract::ws::{Message, WebSocket};
use futures_util::{
    stream::{SplitSink, SplitStream},
    SinkExt, StreamExt,
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub struct SessionWsHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: RequestContext,
    socket_id: usize,
    client_ws_tx: Option<SplitSink<WebSocket, Message>>,
    client_ws_rx: SplitStream<WebSocket>,
    rx: Option<UnboundedReceiverStream<Message>>,
}

impl<SS> SessionWsHandler<SS>
where
    SS: ISessionStorage,
{
    pub async fn new(app_context: AppContext<SS>, session_id: String, websocket: WebSocket) -> Self {
        // Messages for the client are buffered in an unbounded channel and flushed to the
        // websocket by a dedicated task.
        let (client_ws_tx, client_ws_rx) = websocket.split();
        let (tx, rx) = mpsc::unbounded_channel();
        let rx = UnboundedReceiverStream::new(rx);
        let socket_id = app_context.sockets.add(tx).await;
        Self {
            app_context,
            request_context: RequestContext { session_id },
            socket_id,
            client_ws_tx: Some(client_ws_tx),
            client_ws_rx,
            rx: Some(rx),
        }
    }

    pub async fn on_client_connected(&mut self) {
        let (Some(mut client_ws_tx), Some(mut rx)) = (self.client_ws_tx.take(), self.rx.take())
        else {
            return;
        };
        let socket_id = self.socket_id;
        tokio::task::spawn(async move {
            while let Some(message) = rx.next().await {
                if let Err(error) = client_ws_tx.send(message).await {
                    tracing::warn!("Websocket send error (socket_id={socket_id}): {error}");
                    break;
                }
            }
        });
        if let Err(error) = self
            .app_context
            .sessions
            .attach_socket(&self.request_context.session_id, socket_id)
            .await
        {
            tracing::warn!("Can't attach socket {socket_id}: {error}");
            self.on_client_disconnected().await;
            return;
        }
        tracing::info!(
            task = "socket_connected",
            session_id = %self.request_context.session_id,
            socket_id,
        );
        self.send_session_state().await;
        while let Some(result) = self.client_ws_rx.next().await {
            let message = match result {
                Ok(message) => message,
                Err(error) => {
                    tracing::warn!("Websocket error (socket_id={socket_id}): {error}");
                    break;
                }
            };
            self.on_new_message(message).await;
        }
        self.on_client_disconnected().await;
    }

    async fn on_new_message(&self, message: Message) {
        let raw_message = match message {
            Message::Text(text) => text,
            // Protocol-level pings are answered by axum, closing ends the read loop.
            _ => return,
        };
        let socket_message = match serde_json::from_str::<ClientSentSocketMessage>(&raw_message) {
            Ok(socket_message) => socket_message,
            Err(error) => {
                tracing::warn!("Failed to deserialize socket message {raw_message:?}: {error}");
                return;
            }
        };
        match socket_message {
            ClientSentSocketMessage::Ping => {
                self.send(&ServerSentSocketMessage::Pong).await;
            }
        }
    }

    async fn send_session_state(&self) {
        if let Ok(snapshot) = self
            .app_context
            .sessions
            .snapshot(&self.request_context.session_id)
            .await
        {
            self.send(&ServerSentSocketMessage::SessionState(snapshot))
                .await;
        }
    }

    async fn send(&self, event: &ServerSentSocketMessage) {
        match serde_json::to_string(event) {
            Ok(msg) => self.app_context.sockets.send_msg(&msg, self.socket_id).await,
            Err(error) => tracing::error!("Failed to serialize {event:?}: {error}"),
        }
    }

    async fn on_client_disconnected(&self) {
        self.app_context.sockets.remove(self.socket_id).await;
        self.app_context
            .sessions
            .detach_socket(&self.request_context.session_id, self.socket_id)
            .await;
        tracing::info!(
            task = "socket_disconnected",
            session_id = %self.request_context.session_id,
            socket_id = self.socket_id,
        );
    }
}
