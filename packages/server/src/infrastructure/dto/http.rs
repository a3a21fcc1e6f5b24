//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::UserDto;

/// Active room with its current occupants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub name: String,
    pub occupants: Vec<UserDto>,
}
