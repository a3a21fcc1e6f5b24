//! Helpers for in-process integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use hiroba_server::{
    domain::MessageCodec,
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryConnectionRepository,
    },
    ui::{CorsPolicy, Server},
    usecase::{GetRoomDetailUseCase, GetRoomsUseCase, PresenceCoordinator},
};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

const RECV_TIMEOUT: Duration = Duration::from_secs(3);

/// Server running on an ephemeral port inside the test runtime
pub struct TestServer {
    pub addr: SocketAddr,
}

impl TestServer {
    pub async fn start() -> Self {
        let repository = Arc::new(InMemoryConnectionRepository::default());
        let message_pusher = Arc::new(WebSocketMessagePusher::default());
        let (events, _coordinator) =
            PresenceCoordinator::new(repository.clone(), message_pusher, MessageCodec::default())
                .spawn();
        let server = Server::new(
            events,
            Arc::new(GetRoomsUseCase::new(repository.clone())),
            Arc::new(GetRoomDetailUseCase::new(repository)),
            CorsPolicy::Disabled,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(server.serve(listener));

        TestServer { addr }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// WebSocket client speaking the JSON wire protocol
pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    /// Connect and consume the private welcome message
    pub async fn connect(server: &TestServer) -> Self {
        let (stream, _response) = connect_async(server.ws_url())
            .await
            .expect("Failed to connect");
        let mut client = TestClient { stream };
        let welcome = client.recv().await;
        assert_eq!(welcome["name"], "Admin");
        assert_eq!(welcome["text"], "Welcome to the Chat!");
        client
    }

    pub async fn send(&mut self, value: serde_json::Value) {
        self.stream
            .send(Message::Text(value.to_string().into()))
            .await
            .expect("Failed to send frame");
    }

    pub async fn send_raw(&mut self, text: &str) {
        self.stream
            .send(Message::Text(text.to_string().into()))
            .await
            .expect("Failed to send frame");
    }

    pub async fn enter(&mut self, name: &str, room: &str) {
        self.send(serde_json::json!({"type": "enterRoom", "name": name, "room": room}))
            .await;
    }

    /// Next JSON frame, failing the test after a timeout
    pub async fn recv(&mut self) -> serde_json::Value {
        loop {
            let frame = tokio::time::timeout(RECV_TIMEOUT, self.stream.next())
                .await
                .expect("Timed out waiting for a frame")
                .expect("Stream ended")
                .expect("WebSocket error");
            if let Message::Text(text) = frame {
                return serde_json::from_str(&text).expect("Frame is not JSON");
            }
        }
    }

    /// Receive `count` frames
    pub async fn recv_n(&mut self, count: usize) -> Vec<serde_json::Value> {
        let mut frames = Vec::with_capacity(count);
        for _ in 0..count {
            frames.push(self.recv().await);
        }
        frames
    }

    /// Assert that nothing arrives within `window`
    pub async fn expect_silence(&mut self, window: Duration) {
        if let Ok(Some(Ok(frame))) = tokio::time::timeout(window, self.stream.next()).await {
            panic!("Expected no frame, got {:?}", frame);
        }
    }

    pub async fn close(mut self) {
        self.stream.close(None).await.ok();
    }
}

/// Display names in a userList frame, in order
pub fn user_names(frame: &serde_json::Value) -> Vec<String> {
    frame["users"]
        .as_array()
        .expect("userList frame has users")
        .iter()
        .map(|user| user["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
