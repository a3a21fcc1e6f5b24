//! Domain layer: presence model of the room-scoped chat relay.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_codec;
pub mod message_pusher;
pub mod repository;
pub mod room_index;
pub mod value_object;

pub use entity::{Connection, MessageEnvelope};
pub use error::{MessagePushError, ValueObjectError};
pub use event::{InboundEvent, ServerEvent};
pub use message_codec::{ADMIN_NAME, MessageCodec};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::ConnectionRepository;
pub use value_object::{ConnectionId, ConnectionIdFactory, RoomName, UserName};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
