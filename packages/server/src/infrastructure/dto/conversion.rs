//! Conversion logic between DTOs and domain types.

use crate::domain::{
    Connection, ConnectionId, InboundEvent, MessageEnvelope, RoomName, ServerEvent, UserName,
    ValueObjectError,
};
use crate::infrastructure::dto::{
    http::RoomSummaryDto,
    websocket::{ClientEventDto, MessageDto, ServerEventDto, UserDto},
};

// ========================================
// DTO → Domain
// ========================================

impl ClientEventDto {
    /// Validate the payload and attach the sending connection's id.
    ///
    /// Only `enterRoom` carries values that must be valid; message and
    /// activity payloads are opaque display text.
    pub fn into_inbound_event(self, id: ConnectionId) -> Result<InboundEvent, ValueObjectError> {
        let event = match self {
            ClientEventDto::EnterRoom { name, room } => InboundEvent::EnterRoom {
                id,
                name: UserName::try_from(name)?,
                room: RoomName::try_from(room)?,
            },
            ClientEventDto::Message { name, text } => InboundEvent::Message { id, name, text },
            ClientEventDto::Activity { name } => InboundEvent::Activity { id, name },
        };
        Ok(event)
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<MessageEnvelope> for MessageDto {
    fn from(envelope: MessageEnvelope) -> Self {
        Self {
            name: envelope.name,
            text: envelope.text,
            time: envelope.time,
        }
    }
}

impl From<Connection> for UserDto {
    fn from(connection: Connection) -> Self {
        Self {
            id: connection.id.into_string(),
            name: connection.name.into_string(),
            room: connection.room.into_string(),
        }
    }
}

impl From<ServerEvent> for ServerEventDto {
    fn from(event: ServerEvent) -> Self {
        match event {
            ServerEvent::Message(envelope) => ServerEventDto::Message(envelope.into()),
            ServerEvent::UserList(users) => ServerEventDto::UserList {
                users: users.into_iter().map(UserDto::from).collect(),
            },
            ServerEvent::RoomList(rooms) => ServerEventDto::RoomList {
                rooms: rooms.into_iter().map(RoomName::into_string).collect(),
            },
            ServerEvent::Activity(name) => ServerEventDto::Activity { name },
        }
    }
}

impl RoomSummaryDto {
    pub fn new(room: RoomName, occupants: Vec<Connection>) -> Self {
        Self {
            name: room.into_string(),
            occupants: occupants.into_iter().map(UserDto::from).collect(),
        }
    }
}
