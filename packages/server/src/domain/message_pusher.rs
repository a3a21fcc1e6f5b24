//! MessagePusher trait 定義
//!
//! 接続中のクライアントへイベントを届けるためのインターフェース。
//! 宛先の選定（ルーム・送信者除外など）は UseCase 層の Broadcast Router が行い、
//! この trait は「どの接続に届けるか」が決まったイベントを送るだけです。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, ServerEvent};

/// クライアントへの送信チャンネル（シリアライズ済みのテキストフレーム）
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録する（接続直後、入室前）
    async fn register_client(&self, id: ConnectionId, sender: PusherChannel);

    /// 接続の登録を解除する
    async fn unregister_client(&self, id: &ConnectionId);

    /// 1 つの接続に送る
    async fn push_to(&self, id: &ConnectionId, event: &ServerEvent)
    -> Result<(), MessagePushError>;

    /// 複数の接続に送る。一部の宛先への送信失敗は許容する
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// ルームの有無に関係なく、登録済みの全接続に送る
    async fn broadcast_all(&self, event: &ServerEvent) -> Result<(), MessagePushError>;

    /// 登録済みの接続数
    async fn count_clients(&self) -> usize;
}
