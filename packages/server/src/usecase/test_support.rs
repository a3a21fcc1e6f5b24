//! UseCase テスト用の共通ヘルパー

use std::sync::Arc;

use chrono::{Local, TimeZone};
use hiroba_shared::time::FixedClock;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessageCodec, MessagePusher, RoomName, UserName},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryConnectionRepository,
    },
};

use super::BroadcastRouter;

/// FixedClock が返す時刻の表記
pub const FIXED_TIME: &str = "3:04:05 PM";

pub struct TestContext {
    pub repository: Arc<InMemoryConnectionRepository>,
    pub message_pusher: Arc<WebSocketMessagePusher>,
    pub router: Arc<BroadcastRouter>,
    pub codec: MessageCodec,
}

impl TestContext {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryConnectionRepository::default());
        let message_pusher = Arc::new(WebSocketMessagePusher::default());
        let router = Arc::new(BroadcastRouter::new(
            repository.clone(),
            message_pusher.clone(),
        ));
        let time = Local
            .with_ymd_and_hms(2024, 6, 1, 15, 4, 5)
            .single()
            .unwrap();
        let codec = MessageCodec::new(Arc::new(FixedClock::new(time)));
        Self {
            repository,
            message_pusher,
            router,
            codec,
        }
    }

    /// 接続を MessagePusher に登録し、その接続の受信側を返す
    pub async fn connect(&self, value: &str) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.message_pusher.register_client(id(value), tx).await;
        rx
    }
}

/// 受信済みのフレームをすべて取り出して JSON として返す
pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<serde_json::Value> {
    let mut frames = Vec::new();
    while let Ok(text) = rx.try_recv() {
        frames.push(serde_json::from_str(&text).unwrap());
    }
    frames
}

pub fn admin(text: &str) -> serde_json::Value {
    serde_json::json!({"type": "message", "name": "Admin", "text": text, "time": FIXED_TIME})
}

pub fn id(value: &str) -> ConnectionId {
    ConnectionId::new(value.to_string()).unwrap()
}

pub fn name(value: &str) -> UserName {
    UserName::new(value.to_string()).unwrap()
}

pub fn room(value: &str) -> RoomName {
    RoomName::new(value.to_string()).unwrap()
}
