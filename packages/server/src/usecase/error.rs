//! UseCase 層のエラー型

use thiserror::Error;

/// ルーム詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("room is not active")]
    RoomNotFound,
}
