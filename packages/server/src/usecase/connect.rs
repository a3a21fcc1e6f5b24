//! UseCase: 接続処理
//!
//! トランスポート層で接続が確立した時点の処理。Registry にはまだ何も書かない
//! （レコードは入室して初めて作られる）。送信チャンネルを登録し、
//! 本人にだけウェルカムメッセージを送る。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessageCodec, MessagePusher, PusherChannel, ServerEvent};

use super::BroadcastRouter;

/// 接続のユースケース
pub struct ConnectUseCase {
    /// MessagePusher（送信チャンネルの登録先）
    message_pusher: Arc<dyn MessagePusher>,
    router: Arc<BroadcastRouter>,
    codec: MessageCodec,
}

impl ConnectUseCase {
    pub fn new(
        message_pusher: Arc<dyn MessagePusher>,
        router: Arc<BroadcastRouter>,
        codec: MessageCodec,
    ) -> Self {
        Self {
            message_pusher,
            router,
            codec,
        }
    }

    /// 接続を実行
    ///
    /// # Arguments
    ///
    /// * `id` - トランスポート層が払い出した接続 ID
    /// * `sender` - クライアントへの送信チャンネル
    pub async fn execute(&self, id: ConnectionId, sender: PusherChannel) {
        self.message_pusher.register_client(id.clone(), sender).await;
        self.router
            .to_connection(&id, ServerEvent::Message(self.codec.welcome()))
            .await;
        tracing::info!("Connection '{}' connected", id);
    }
}
