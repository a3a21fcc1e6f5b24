//! UseCase layer: presence transitions, message relay and read-side queries.

mod broadcast_router;
mod connect;
mod disconnect;
mod enter_room;
mod error;
mod get_room_detail;
mod get_rooms;
mod presence_coordinator;
mod relay_activity;
mod send_message;

#[cfg(test)]
mod test_support;

pub use broadcast_router::BroadcastRouter;
pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use enter_room::EnterRoomUseCase;
pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use presence_coordinator::{InboundEventSender, PresenceCoordinator};
pub use relay_activity::RelayActivityUseCase;
pub use send_message::SendMessageUseCase;
