//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectUseCase::execute() メソッド
//! - 入室済みの接続の切断（退室通知・在室者リスト・ルーム一覧）
//!
//! ### なぜこのテストが必要か
//! - 切断時に残った在室者へ正しく通知されることを保証する
//! - 入室前に切断した接続では何も起きないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：在室者が残るルームからの切断
//! - エッジケース：最後の在室者の切断（ルームが消える）、入室前の切断

use std::sync::Arc;

use crate::domain::{
    Connection, ConnectionId, ConnectionRepository, MessageCodec, MessagePusher, ServerEvent,
};

use super::BroadcastRouter;

/// 切断のユースケース
pub struct DisconnectUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
    /// MessagePusher（送信チャンネルの登録解除）
    message_pusher: Arc<dyn MessagePusher>,
    router: Arc<BroadcastRouter>,
    codec: MessageCodec,
}

impl DisconnectUseCase {
    pub fn new(
        repository: Arc<dyn ConnectionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        router: Arc<BroadcastRouter>,
        codec: MessageCodec,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            router,
            codec,
        }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Some(Connection)` - 削除したレコード
    /// * `None` - 入室前の切断（通知なし）
    pub async fn execute(&self, id: ConnectionId) -> Option<Connection> {
        // 1. 削除する前に、どのルームに知らせるかを調べる
        let departed = self.repository.find(&id).await;

        // 2. Registry と MessagePusher から外す
        self.repository.remove(&id).await;
        self.message_pusher.unregister_client(&id).await;

        let Some(departed) = departed else {
            tracing::info!("Connection '{}' disconnected before entering a room", id);
            return None;
        };

        // 3. 残った在室者に知らせる
        self.router
            .to_room(
                &departed.room,
                ServerEvent::Message(self.codec.has_left(&departed.name)),
            )
            .await;

        let occupants = self.repository.occupants_of(&departed.room).await;
        self.router
            .to_room(&departed.room, ServerEvent::UserList(occupants))
            .await;

        let rooms = self.repository.active_room_names().await;
        self.router.to_everyone(ServerEvent::RoomList(rooms)).await;

        tracing::info!(
            "Connection '{}' ('{}') disconnected from '{}'",
            departed.id,
            departed.name,
            departed.room
        );
        Some(departed)
    }
}
