//! InMemory Connection Repository 実装
//!
//! ドメイン層が定義する ConnectionRepository trait の具体的な実装。
//! `Vec<Connection>` をプロセス内の Connection Registry として使用します。
//!
//! 書き込みはすべて「新しいコレクションを組み立てて丸ごと代入する」形で行い、
//! 読み手から途中状態が見えないようにしています。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRepository, RoomName, UserName};

/// インメモリ Connection Repository 実装
pub struct InMemoryConnectionRepository {
    /// Connection Registry（順序は挿入順）
    connections: Arc<Mutex<Vec<Connection>>>,
}

impl InMemoryConnectionRepository {
    /// 新しい InMemoryConnectionRepository を作成
    pub fn new(connections: Arc<Mutex<Vec<Connection>>>) -> Self {
        Self { connections }
    }
}

impl Default for InMemoryConnectionRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(Vec::new())))
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepository {
    async fn set_all(&self, connections: Vec<Connection>) {
        let mut guard = self.connections.lock().await;
        *guard = connections;
    }

    async fn upsert(&self, id: ConnectionId, name: UserName, room: RoomName) -> Connection {
        let connection = Connection::new(id, name, room);

        let mut guard = self.connections.lock().await;
        let next: Vec<Connection> = guard
            .iter()
            .filter(|existing| existing.id != connection.id)
            .cloned()
            .chain(std::iter::once(connection.clone()))
            .collect();
        *guard = next;

        tracing::debug!(
            "Connection '{}' is now '{}' in room '{}'",
            connection.id,
            connection.name,
            connection.room
        );
        connection
    }

    async fn remove(&self, id: &ConnectionId) {
        let mut guard = self.connections.lock().await;
        let next: Vec<Connection> = guard
            .iter()
            .filter(|existing| &existing.id != id)
            .cloned()
            .collect();
        *guard = next;
    }

    async fn find(&self, id: &ConnectionId) -> Option<Connection> {
        let guard = self.connections.lock().await;
        guard.iter().find(|connection| &connection.id == id).cloned()
    }

    async fn all(&self) -> Vec<Connection> {
        let guard = self.connections.lock().await;
        guard.clone()
    }
}
