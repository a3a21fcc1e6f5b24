//! UseCase: ルーム詳細の取得（読み取り専用）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRepository, RoomName};

use super::error::GetRoomDetailError;

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    repository: Arc<dyn ConnectionRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn ConnectionRepository>) -> Self {
        Self { repository }
    }

    /// 指定したルームの在室者を返す
    ///
    /// ルームは在室者がいる間だけ存在するので、在室者が 0 人なら `RoomNotFound`。
    pub async fn execute(
        &self,
        room: String,
    ) -> Result<(RoomName, Vec<Connection>), GetRoomDetailError> {
        let room = RoomName::try_from(room).map_err(|_| GetRoomDetailError::RoomNotFound)?;
        let occupants = self.repository.occupants_of(&room).await;
        if occupants.is_empty() {
            return Err(GetRoomDetailError::RoomNotFound);
        }
        Ok((room, occupants))
    }
}
