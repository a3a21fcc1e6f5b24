//! Room Index
//!
//! Connection Registry のスナップショットから、ルームの在室者と
//! アクティブなルーム名を導出する純粋関数群。独自の状態は持たない。

use std::collections::HashSet;

use super::{entity::Connection, value_object::RoomName};

/// `room` にいる接続を Registry の並び順のまま返す
pub fn occupants_of(connections: &[Connection], room: &RoomName) -> Vec<Connection> {
    connections
        .iter()
        .filter(|connection| connection.is_in(room))
        .cloned()
        .collect()
}

/// 在室者が 1 人以上いるルーム名を重複なしで返す
///
/// 順序に意味はないが、初出順を保つ。
pub fn active_room_names(connections: &[Connection]) -> Vec<RoomName> {
    let mut seen = HashSet::new();
    connections
        .iter()
        .filter(|connection| seen.insert(&connection.room))
        .map(|connection| connection.room.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, UserName};

    fn connection(id: &str, name: &str, room: &str) -> Connection {
        Connection::new(
            ConnectionId::new(id.to_string()).unwrap(),
            UserName::new(name.to_string()).unwrap(),
            RoomName::new(room.to_string()).unwrap(),
        )
    }

    fn room(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_occupants_of_with_empty_registry() {
        // テスト項目: Registry が空の場合、在室者は空になる
        // given (前提条件):
        let connections = vec![];

        // when (操作):
        let result = occupants_of(&connections, &room("lobby"));

        // then (期待する結果):
        assert!(result.is_empty());
    }

    #[test]
    fn test_occupants_of_filters_by_room() {
        // テスト項目: 指定したルームの接続だけが Registry の順序で返される
        // given (前提条件):
        let connections = vec![
            connection("a", "Alice", "lobby"),
            connection("b", "Bob", "kitchen"),
            connection("c", "Carol", "lobby"),
        ];

        // when (操作):
        let result = occupants_of(&connections, &room("lobby"));

        // then (期待する結果):
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name.as_str(), "Alice");
        assert_eq!(result[1].name.as_str(), "Carol");
    }

    #[test]
    fn test_active_room_names_deduplicates() {
        // テスト項目: 複数人が同じルームにいても、ルーム名は 1 回だけ現れる
        // given (前提条件):
        let connections = vec![
            connection("a", "Alice", "lobby"),
            connection("b", "Bob", "lobby"),
            connection("c", "Carol", "kitchen"),
            connection("d", "Dave", "lobby"),
        ];

        // when (操作):
        let result = active_room_names(&connections);

        // then (期待する結果):
        assert_eq!(result, vec![room("lobby"), room("kitchen")]);
    }

    #[test]
    fn test_active_room_names_with_empty_registry() {
        // テスト項目: Registry が空の場合、アクティブなルームはない
        // given (前提条件):
        let connections: Vec<Connection> = vec![];

        // when (操作):
        let result = active_room_names(&connections);

        // then (期待する結果):
        assert!(result.is_empty());
    }
}
