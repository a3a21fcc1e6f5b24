//! サーバーとクライアントの間でやり取りするイベント

use super::{
    entity::{Connection, MessageEnvelope},
    message_pusher::PusherChannel,
    value_object::{ConnectionId, RoomName, UserName},
};

/// Outbound event（閉じた列挙型）
///
/// ワイヤ形式への変換は Infrastructure 層の DTO が担当する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// チャットメッセージ（ウェルカム・管理メッセージを含む）
    Message(MessageEnvelope),
    /// ルームの在室者一覧
    UserList(Vec<Connection>),
    /// アクティブなルーム名の一覧（サーバー全体）
    RoomList(Vec<RoomName>),
    /// 入力中通知。クライアントが送ってきた名前をそのまま中継する
    Activity(String),
}

impl ServerEvent {
    /// ログ出力用のイベント名（ワイヤ上の `type` と同じ）
    pub fn kind(&self) -> &'static str {
        match self {
            ServerEvent::Message(_) => "message",
            ServerEvent::UserList(_) => "userList",
            ServerEvent::RoomList(_) => "roomList",
            ServerEvent::Activity(_) => "activity",
        }
    }
}

/// クライアントからサーバーへのイベント（閉じた列挙型）
///
/// Connection Gateway がワイヤ形式を検証して組み立て、Presence Coordinator に渡す。
#[derive(Debug)]
pub enum InboundEvent {
    /// トランスポート層での接続。送信チャンネルを伴う
    Connect {
        id: ConnectionId,
        channel: PusherChannel,
    },
    /// 入室（ルーム移動・再入室を含む）
    EnterRoom {
        id: ConnectionId,
        name: UserName,
        room: RoomName,
    },
    /// チャットメッセージ。`name` はクライアント申告の表示名
    Message {
        id: ConnectionId,
        name: String,
        text: String,
    },
    /// 入力中通知
    Activity { id: ConnectionId, name: String },
    /// トランスポート層での切断
    Disconnect { id: ConnectionId },
}

impl InboundEvent {
    /// イベントを発生させた接続の ID
    pub fn connection_id(&self) -> &ConnectionId {
        match self {
            InboundEvent::Connect { id, .. }
            | InboundEvent::EnterRoom { id, .. }
            | InboundEvent::Message { id, .. }
            | InboundEvent::Activity { id, .. }
            | InboundEvent::Disconnect { id } => id,
        }
    }
}
