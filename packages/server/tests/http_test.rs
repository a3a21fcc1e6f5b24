//! HTTP API tests.

mod common;

use hiroba_server::infrastructure::dto::http::RoomSummaryDto;

use common::{TestClient, TestServer};

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let body: serde_json::Value = reqwest::get(server.http_url("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_rooms_reflect_presence() {
    // テスト項目: ルーム一覧・ルーム詳細が現在の在室状況を反映する
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    alice.enter("Alice", "lobby").await;
    alice.recv_n(3).await;

    // when (操作):
    let rooms: Vec<RoomSummaryDto> = reqwest::get(server.http_url("/api/rooms"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let lobby = reqwest::get(server.http_url("/api/rooms/lobby"))
        .await
        .unwrap();
    let missing = reqwest::get(server.http_url("/api/rooms/kitchen"))
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].name, "lobby");
    assert_eq!(rooms[0].occupants.len(), 1);
    assert_eq!(rooms[0].occupants[0].name, "Alice");

    assert_eq!(lobby.status(), reqwest::StatusCode::OK);
    let lobby: RoomSummaryDto = lobby.json().await.unwrap();
    assert_eq!(lobby.occupants[0].room, "lobby");

    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rooms_empty_after_everyone_leaves() {
    // テスト項目: 全員が切断するとルーム一覧が空になる
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = TestClient::connect(&server).await;
    let mut observer = TestClient::connect(&server).await;
    alice.enter("Alice", "lobby").await;
    alice.recv_n(3).await;
    observer.recv().await;

    // when (操作):
    alice.close().await;
    // wait until the disconnect has been processed
    assert_eq!(
        observer.recv().await,
        serde_json::json!({"type": "roomList", "rooms": []})
    );
    let rooms: Vec<RoomSummaryDto> = reqwest::get(server.http_url("/api/rooms"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert!(rooms.is_empty());
}
