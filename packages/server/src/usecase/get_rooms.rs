//! UseCase: アクティブなルーム一覧の取得（読み取り専用）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRepository, RoomName};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    repository: Arc<dyn ConnectionRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    /// アクティブなルームと、その在室者を返す
    pub async fn execute(&self) -> Vec<(RoomName, Vec<Connection>)> {
        let mut rooms = Vec::new();
        for room in self.repository.active_room_names().await {
            let occupants = self.repository.occupants_of(&room).await;
            rooms.push((room, occupants));
        }
        rooms
    }
}
