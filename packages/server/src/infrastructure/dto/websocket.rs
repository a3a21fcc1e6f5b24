//! WebSocket event DTOs.
//!
//! Every frame is a JSON object tagged by `"type"`.

use serde::{Deserialize, Serialize};

/// Client → server events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEventDto {
    /// `{"type":"enterRoom","name":"Alice","room":"lobby"}`
    EnterRoom { name: String, room: String },
    /// `{"type":"message","name":"Alice","text":"hi"}`
    Message { name: String, text: String },
    /// `{"type":"activity","name":"Alice"}`
    Activity { name: String },
}

/// Server → client events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEventDto {
    Message(MessageDto),
    UserList { users: Vec<UserDto> },
    RoomList { rooms: Vec<String> },
    Activity { name: String },
}

/// Chat message envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub name: String,
    pub text: String,
    pub time: String,
}

/// Room occupant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub room: String,
}
