//! Repository trait 定義
//!
//! ドメイン層が必要とする Connection Registry へのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Connection, ConnectionId, RoomName, UserName};

/// Connection Registry trait
///
/// 「誰がどのルームにいるか」の唯一の情報源。
/// 書き込みは Presence Coordinator（UseCase 層）だけが行う。
///
/// ## 不変条件
///
/// - 1 つの接続 ID につきレコードは高々 1 つ
/// - レコードが存在する ⇔ その接続が入室済みで、まだ切断していない
///
/// インメモリの操作なので、いずれのメソッドも失敗しない。
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// コレクション全体を一度に置き換える
    async fn set_all(&self, connections: Vec<Connection>);

    /// `id` の既存レコードを取り除いてから新しいレコードを追加し、追加したレコードを返す
    async fn upsert(&self, id: ConnectionId, name: UserName, room: RoomName) -> Connection;

    /// `id` のレコードを削除する（存在しなければ何もしない）
    async fn remove(&self, id: &ConnectionId);

    /// `id` のレコードを取得する
    async fn find(&self, id: &ConnectionId) -> Option<Connection>;

    /// 全レコードのスナップショット（Registry の並び順）
    async fn all(&self) -> Vec<Connection>;

    /// `room` の在室者
    async fn occupants_of(&self, room: &RoomName) -> Vec<Connection> {
        super::room_index::occupants_of(&self.all().await, room)
    }

    /// アクティブなルーム名（重複なし）
    async fn active_room_names(&self) -> Vec<RoomName> {
        super::room_index::active_room_names(&self.all().await)
    }

    /// レコード数
    async fn count(&self) -> usize {
        self.all().await.len()
    }
}
