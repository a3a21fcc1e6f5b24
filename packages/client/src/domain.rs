//! Domain logic for client-side operations.
//!
//! Pure functions turning typed lines into wire events, kept free of I/O so
//! they are easy to test.

use hiroba_server::{
    domain::{RoomName, UserName},
    infrastructure::dto::websocket::ClientEventDto,
};

use crate::error::ClientError;

/// A line typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/join <room>`
    Join(RoomName),
    /// Any line that is not a command
    Say(String),
    /// `/quit`
    Quit,
}

/// Parse one input line.
///
/// Lines starting with `/` are commands; everything else is chat text.
pub fn parse_command(line: &str) -> Result<Command, ClientError> {
    let line = line.trim();

    let Some(command) = line.strip_prefix('/') else {
        return Ok(Command::Say(line.to_string()));
    };

    let (keyword, argument) = command
        .split_once(char::is_whitespace)
        .unwrap_or((command, ""));

    match keyword {
        "quit" => Ok(Command::Quit),
        "join" => Ok(Command::Join(RoomName::new(argument.trim().to_string())?)),
        other => Err(ClientError::InvalidInput(format!(
            "Unknown command '/{}'. Use /join <room> or /quit",
            other
        ))),
    }
}

/// `enterRoom` event announcing `name` in `room`
pub fn enter_room_event(name: &UserName, room: &RoomName) -> ClientEventDto {
    ClientEventDto::EnterRoom {
        name: name.as_str().to_string(),
        room: room.as_str().to_string(),
    }
}

/// `message` event carrying chat text
pub fn message_event(name: &UserName, text: String) -> ClientEventDto {
    ClientEventDto::Message {
        name: name.as_str().to_string(),
        text,
    }
}

/// `activity` event announcing that `name` started typing
pub fn activity_event(name: &UserName) -> ClientEventDto {
    ClientEventDto::Activity {
        name: name.as_str().to_string(),
    }
}

/// Check if the client should attempt to reconnect.
///
/// `current_attempt` counts failed sessions so far.
pub fn should_attempt_reconnect(current_attempt: u32, max_attempts: u32) -> bool {
    current_attempt < max_attempts
}
