//! Message Codec
//!
//! チャットメッセージのエンベロープを組み立てる。時刻は呼び出しのたびに
//! 注入された Clock から取得し、キャッシュしない。

use std::sync::Arc;

use hiroba_shared::time::{Clock, SystemClock, current_time_of_day};

use super::{
    entity::MessageEnvelope,
    value_object::{RoomName, UserName},
};

/// 管理メッセージの送信者名
pub const ADMIN_NAME: &str = "Admin";

#[derive(Clone)]
pub struct MessageCodec {
    clock: Arc<dyn Clock>,
}

impl MessageCodec {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// 送信者名とテキストからエンベロープを作る
    pub fn build_envelope(
        &self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> MessageEnvelope {
        MessageEnvelope {
            name: name.into(),
            text: text.into(),
            time: current_time_of_day(self.clock.as_ref()),
        }
    }

    /// "Admin" 名義のエンベロープを作る
    pub fn admin(&self, text: impl Into<String>) -> MessageEnvelope {
        self.build_envelope(ADMIN_NAME, text)
    }

    /// 接続直後に本人だけへ送るウェルカムメッセージ
    pub fn welcome(&self) -> MessageEnvelope {
        self.admin("Welcome to the Chat!")
    }

    /// 入室した本人だけへ送る確認メッセージ
    pub fn joined_room(&self, room: &RoomName) -> MessageEnvelope {
        self.admin(format!("You have joined the {} room.", room))
    }

    /// 入室をルームの他の在室者へ知らせるメッセージ
    pub fn has_joined(&self, name: &UserName) -> MessageEnvelope {
        self.admin(format!("{} has joined.", name))
    }

    /// 退室をルームへ知らせるメッセージ
    pub fn has_left(&self, name: &UserName) -> MessageEnvelope {
        self.admin(format!("{} has left.", name))
    }
}

impl Default for MessageCodec {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use hiroba_shared::time::FixedClock;

    #[test]
    fn test_build_envelope_uses_clock() {
        // テスト項目: エンベロープの time は Clock の時刻を整形したものになる
        // given (前提条件):
        let time = Local
            .with_ymd_and_hms(2024, 6, 1, 21, 15, 0)
            .single()
            .unwrap();
        let codec = MessageCodec::new(Arc::new(FixedClock::new(time)));

        // when (操作):
        let envelope = codec.build_envelope("Alice", "hi");

        // then (期待する結果):
        assert_eq!(
            envelope,
            MessageEnvelope {
                name: "Alice".to_string(),
                text: "hi".to_string(),
                time: "9:15:00 PM".to_string(),
            }
        );
    }

    #[test]
    fn test_admin_envelope_sender() {
        // テスト項目: 管理メッセージの送信者名は "Admin" になる
        // given (前提条件):
        let codec = MessageCodec::default();

        // when (操作):
        let envelope = codec.admin("Welcome to the Chat!");

        // then (期待する結果):
        assert_eq!(envelope.name, ADMIN_NAME);
        assert_eq!(envelope.text, "Welcome to the Chat!");
        assert!(!envelope.time.is_empty());
    }

    #[test]
    fn test_admin_announcement_texts() {
        // テスト項目: 入退室の管理メッセージの文言
        // given (前提条件):
        let codec = MessageCodec::default();
        let alice = UserName::new("Alice".to_string()).unwrap();
        let lobby = RoomName::new("lobby".to_string()).unwrap();

        // when (操作):
        let welcome = codec.welcome();
        let joined_room = codec.joined_room(&lobby);
        let has_joined = codec.has_joined(&alice);
        let has_left = codec.has_left(&alice);

        // then (期待する結果):
        assert_eq!(welcome.text, "Welcome to the Chat!");
        assert_eq!(joined_room.text, "You have joined the lobby room.");
        assert_eq!(has_joined.text, "Alice has joined.");
        assert_eq!(has_left.text, "Alice has left.");
    }
}
