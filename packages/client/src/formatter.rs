//! Message formatting utilities for client display.

use hiroba_server::{
    domain::ADMIN_NAME,
    infrastructure::dto::websocket::{MessageDto, ServerEventDto, UserDto},
};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any server event, marking `me` in user lists
    pub fn format_event(event: &ServerEventDto, me: &str) -> String {
        match event {
            ServerEventDto::Message(message) => Self::format_chat_message(message),
            ServerEventDto::UserList { users } => Self::format_user_list(users, me),
            ServerEventDto::RoomList { rooms } => Self::format_room_list(rooms),
            ServerEventDto::Activity { name } => Self::format_activity(name),
        }
    }

    /// Format a chat message.
    ///
    /// Notices from the relay itself are set apart with `***`.
    pub fn format_chat_message(message: &MessageDto) -> String {
        if message.name == ADMIN_NAME {
            format!("\n[{}] *** {}\n", message.time, message.text)
        } else {
            format!("\n[{}] {}: {}\n", message.time, message.name, message.text)
        }
    }

    /// Format the occupants of the current room
    pub fn format_user_list(users: &[UserDto], me: &str) -> String {
        let Some(first) = users.first() else {
            return "\nNo users in this room\n".to_string();
        };

        let names = users
            .iter()
            .map(|user| {
                if user.name == me {
                    format!("{} (me)", user.name)
                } else {
                    user.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("\nUsers in {}: {}\n", first.room, names)
    }

    /// Format the list of active rooms
    pub fn format_room_list(rooms: &[String]) -> String {
        if rooms.is_empty() {
            "\nNo active rooms\n".to_string()
        } else {
            format!("\nActive rooms: {}\n", rooms.join(", "))
        }
    }

    /// Format a typing notice
    pub fn format_activity(name: &str) -> String {
        format!("\n{} is typing...\n", name)
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← {}\n", text)
    }
}
