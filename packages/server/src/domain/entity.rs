//! エンティティ

use super::value_object::{ConnectionId, RoomName, UserName};

/// ルームに入室済みの接続
///
/// レコードは不変。名前やルームが変わるときはフィールドを書き換えず、
/// 新しいレコードを作って Registry 上で置き換える。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: UserName,
    pub room: RoomName,
}

impl Connection {
    pub fn new(id: ConnectionId, name: UserName, room: RoomName) -> Self {
        Self { id, name, room }
    }

    /// 指定したルームにいるかどうか
    pub fn is_in(&self, room: &RoomName) -> bool {
        &self.room == room
    }
}

/// チャットメッセージのエンベロープ
///
/// 1 回のブロードキャストの間だけ存在し、保存されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    /// 送信者の表示名（管理メッセージの場合は "Admin"）
    pub name: String,
    pub text: String,
    /// 生成時点のローカル時刻（`h:mm:ss AM/PM`）
    pub time: String,
}
