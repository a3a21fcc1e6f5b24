//! WebSocket client session management.

use std::fmt::Display;

use futures_util::{Sink, SinkExt, StreamExt};
use hiroba_server::{
    domain::{RoomName, UserName},
    infrastructure::dto::websocket::{ClientEventDto, ServerEventDto},
};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    domain::{Command, activity_event, enter_room_event, message_event, parse_command},
    error::ClientError,
};

use super::{
    formatter::MessageFormatter,
    ui::{UserInput, redisplay_prompt},
};

/// Run one WebSocket session.
///
/// Returns `Ok` when the user quits and `Err` when the connection is lost.
/// `current_room` tracks the last room entered so a reconnect can re-enter it.
pub async fn run_client_session(
    url: &str,
    name: &UserName,
    current_room: &watch::Sender<RoomName>,
    input_rx: &mut mpsc::UnboundedReceiver<UserInput>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}'. Type messages and press Enter to send. \
         Use /join <room> to switch rooms and /quit to exit.\n",
        name
    );

    let (mut write, mut read) = ws_stream.split();

    let room = current_room.borrow().clone();
    send_event(&mut write, &enter_room_event(name, &room)).await?;

    let prompt = name.to_string();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerEventDto>(&text) {
                        Ok(event) => MessageFormatter::format_event(&event, &prompt),
                        Err(_) => MessageFormatter::format_raw_message(&text),
                    };
                    print!("{}", formatted);
                    redisplay_prompt(&prompt);
                }
                Ok(Message::Binary(data)) => {
                    print!("{}", MessageFormatter::format_binary_message(data.len()));
                    redisplay_prompt(&prompt);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    let result = tokio::select! {
        _ = &mut read_task => {
            Err(ClientError::ConnectionError("Connection lost".to_string()))
        }
        write_result = forward_input(&mut write, input_rx, name, current_room) => {
            read_task.abort();
            write_result
        }
    };

    if result.is_ok() {
        write.close().await.ok();
    }

    result
}

/// Send user input until the user quits or the input closes.
///
/// Starting a new line is relayed as `activity`.
async fn forward_input<S>(
    write: &mut S,
    input_rx: &mut mpsc::UnboundedReceiver<UserInput>,
    name: &UserName,
    current_room: &watch::Sender<RoomName>,
) -> Result<(), ClientError>
where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    let prompt = name.to_string();

    while let Some(input) = input_rx.recv().await {
        let line = match input {
            UserInput::Typing => {
                send_event(write, &activity_event(name)).await?;
                continue;
            }
            UserInput::Line(line) => line,
        };

        let event = match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Join(room)) => {
                let event = enter_room_event(name, &room);
                current_room.send_replace(room);
                event
            }
            Ok(Command::Say(text)) => message_event(name, text),
            Err(e) => {
                println!("{}", e);
                redisplay_prompt(&prompt);
                continue;
            }
        };

        send_event(write, &event).await?;
    }

    Ok(())
}

async fn send_event<S>(write: &mut S, event: &ClientEventDto) -> Result<(), ClientError>
where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    let json = serde_json::to_string(event)
        .map_err(|e| ClientError::InvalidInput(format!("Failed to serialize event: {}", e)))?;

    write
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent_values(sent: Vec<Message>) -> Vec<serde_json::Value> {
        sent.into_iter()
            .map(|message| match message {
                Message::Text(text) => serde_json::from_str(&text).unwrap(),
                other => panic!("unexpected frame: {:?}", other),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_forward_input_sends_activity_message_and_room_switch() {
        // テスト項目: 入力開始は activity、通常の行は message、/join は enterRoom として送られ、/quit で終わる
        // given (前提条件):
        let name = UserName::new("Alice".to_string()).unwrap();
        let (current_room, _) = watch::channel(RoomName::new("lobby".to_string()).unwrap());
        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        for input in [
            UserInput::Typing,
            UserInput::Line("hi".to_string()),
            UserInput::Line("/join kitchen".to_string()),
            UserInput::Line("/quit".to_string()),
            UserInput::Line("never sent".to_string()),
        ] {
            input_tx.send(input).unwrap();
        }
        let mut sent: Vec<Message> = Vec::new();

        // when (操作):
        let result = forward_input(&mut sent, &mut input_rx, &name, &current_room).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(
            sent_values(sent),
            vec![
                serde_json::json!({"type": "activity", "name": "Alice"}),
                serde_json::json!({"type": "message", "name": "Alice", "text": "hi"}),
                serde_json::json!({"type": "enterRoom", "name": "Alice", "room": "kitchen"}),
            ]
        );
        assert_eq!(current_room.borrow().as_str(), "kitchen");
    }

    #[tokio::test]
    async fn test_forward_input_skips_invalid_commands() {
        // テスト項目: 不正なコマンドは送られず、入力が閉じると正常終了する
        // given (前提条件):
        let name = UserName::new("Alice".to_string()).unwrap();
        let (current_room, _) = watch::channel(RoomName::new("lobby".to_string()).unwrap());
        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        input_tx.send(UserInput::Line("/dance".to_string())).unwrap();
        input_tx.send(UserInput::Line("/join".to_string())).unwrap();
        drop(input_tx);
        let mut sent: Vec<Message> = Vec::new();

        // when (操作):
        let result = forward_input(&mut sent, &mut input_rx, &name, &current_room).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(sent.is_empty());
        assert_eq!(current_room.borrow().as_str(), "lobby");
    }
}
