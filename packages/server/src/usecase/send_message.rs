//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者のルームの在室者全員（送信者を含む）へのエンベロープ配信
//!
//! ### なぜこのテストが必要か
//! - 宛先は送信者が申告した名前ではなく、Registry 上のルームで決まることを保証する
//! - 入室前の接続からのメッセージが黙って捨てられることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：同じルームの在室者への配信、別ルームには届かない
//! - エッジケース：入室前の接続からの送信（配信なし）

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRepository, MessageCodec, RoomName, ServerEvent};

use super::BroadcastRouter;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（送信者のルームの解決に使う）
    repository: Arc<dyn ConnectionRepository>,
    router: Arc<BroadcastRouter>,
    codec: MessageCodec,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn ConnectionRepository>,
        router: Arc<BroadcastRouter>,
        codec: MessageCodec,
    ) -> Self {
        Self {
            repository,
            router,
            codec,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 送信した接続の ID
    /// * `name` - クライアントが申告した表示名（エンベロープにそのまま載る）
    /// * `text` - 本文
    ///
    /// # Returns
    ///
    /// * `Some(RoomName)` - 配信したルーム
    /// * `None` - 送信者がどのルームにもいないため何もしなかった
    pub async fn execute(
        &self,
        id: ConnectionId,
        name: String,
        text: String,
    ) -> Option<RoomName> {
        let Some(sender) = self.repository.find(&id).await else {
            tracing::debug!("Ignoring message from '{}' without a room", id);
            return None;
        };

        let envelope = self.codec.build_envelope(name, text);
        self.router
            .to_room(&sender.room, ServerEvent::Message(envelope))
            .await;

        Some(sender.room)
    }
}
