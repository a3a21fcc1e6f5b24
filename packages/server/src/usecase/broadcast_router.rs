//! Broadcast Router
//!
//! 4 種類の宛先スコープでイベントを届ける。
//!
//! - `to_connection`: 1 つの接続
//! - `to_room`: ルームの全在室者（送信者を含む）
//! - `to_room_except_sender`: ルームの在室者のうち送信者以外
//! - `to_everyone`: ルームに関係なく接続中の全員
//!
//! ルームの宛先は送信のたびに Registry から引き直す。購読者リストはキャッシュしない。
//! すべて fire-and-forget で、届かなかった宛先はログを残して無視する。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRepository, MessagePusher, RoomName, ServerEvent};

pub struct BroadcastRouter {
    /// Repository（宛先の導出に使う、読み取り専用）
    repository: Arc<dyn ConnectionRepository>,
    /// MessagePusher（実際の送信）
    message_pusher: Arc<dyn MessagePusher>,
}

impl BroadcastRouter {
    pub fn new(
        repository: Arc<dyn ConnectionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn to_connection(&self, id: &ConnectionId, event: ServerEvent) {
        if let Err(e) = self.message_pusher.push_to(id, &event).await {
            tracing::debug!("'{}' was not delivered to '{}': {}", event.kind(), id, e);
        }
    }

    pub async fn to_room(&self, room: &RoomName, event: ServerEvent) {
        let targets = self.room_targets(room, None).await;
        self.deliver(targets, event).await;
    }

    pub async fn to_room_except_sender(
        &self,
        room: &RoomName,
        sender: &ConnectionId,
        event: ServerEvent,
    ) {
        let targets = self.room_targets(room, Some(sender)).await;
        self.deliver(targets, event).await;
    }

    pub async fn to_everyone(&self, event: ServerEvent) {
        if let Err(e) = self.message_pusher.broadcast_all(&event).await {
            tracing::warn!("Failed to broadcast '{}' to everyone: {}", event.kind(), e);
        }
    }

    async fn room_targets(
        &self,
        room: &RoomName,
        exclude: Option<&ConnectionId>,
    ) -> Vec<ConnectionId> {
        self.repository
            .occupants_of(room)
            .await
            .into_iter()
            .map(|connection| connection.id)
            .filter(|id| Some(id) != exclude)
            .collect()
    }

    async fn deliver(&self, targets: Vec<ConnectionId>, event: ServerEvent) {
        // 空のルームへの送信は何もしない
        if targets.is_empty() {
            return;
        }
        if let Err(e) = self.message_pusher.broadcast(targets, &event).await {
            tracing::warn!("Failed to broadcast '{}': {}", event.kind(), e);
        }
    }
}
