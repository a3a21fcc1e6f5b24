//! UseCase: 入室処理（ルーム移動・再入室を含む）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EnterRoomUseCase::execute() メソッド
//! - 初回入室・ルーム移動・同じ接続での名前変更
//!
//! ### なぜこのテストが必要か
//! - 在室状態の遷移と、どのアナウンスを誰に送るかを決める中核のロジック
//! - 移動元ルームと移動先ルームの両方に正しい在室者リストが届くことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：初回入室、2 人目の入室、ルーム移動
//! - エッジケース：移動元ルームが空になる、同じルームへの再入室

use std::sync::Arc;

use crate::domain::{
    Connection, ConnectionId, ConnectionRepository, MessageCodec, RoomName, ServerEvent, UserName,
};

use super::BroadcastRouter;

/// 入室のユースケース
pub struct EnterRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ConnectionRepository>,
    router: Arc<BroadcastRouter>,
    codec: MessageCodec,
}

impl EnterRoomUseCase {
    pub fn new(
        repository: Arc<dyn ConnectionRepository>,
        router: Arc<BroadcastRouter>,
        codec: MessageCodec,
    ) -> Self {
        Self {
            repository,
            router,
            codec,
        }
    }

    /// 入室を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 入室する接続の ID
    /// * `name` - 表示名（既存レコードの名前は上書きされる）
    /// * `room` - 入室先のルーム
    ///
    /// # Returns
    ///
    /// Registry に書き込まれた新しいレコード
    pub async fn execute(&self, id: ConnectionId, name: UserName, room: RoomName) -> Connection {
        // 1. 書き換える前に移動元のルームを調べる
        let previous = self.repository.find(&id).await;

        // 2. 移動元に退室を知らせる（本人もまだ移動元の在室者として受け取る）
        if let Some(previous) = &previous {
            self.router
                .to_room(
                    &previous.room,
                    ServerEvent::Message(self.codec.has_left(&previous.name)),
                )
                .await;
        }

        // 3. レコードを置き換える
        let connection = self.repository.upsert(id, name, room).await;

        // 4. 移動元の在室者リストを更新する
        if let Some(previous) = &previous {
            let occupants = self.repository.occupants_of(&previous.room).await;
            self.router
                .to_room(&previous.room, ServerEvent::UserList(occupants))
                .await;
        }

        // 5. 本人に入室確認を送る
        self.router
            .to_connection(
                &connection.id,
                ServerEvent::Message(self.codec.joined_room(&connection.room)),
            )
            .await;

        // 6. 移動先の他の在室者に入室を知らせる
        self.router
            .to_room_except_sender(
                &connection.room,
                &connection.id,
                ServerEvent::Message(self.codec.has_joined(&connection.name)),
            )
            .await;

        // 7. 移動先の在室者リストを更新する（本人を含む）
        let occupants = self.repository.occupants_of(&connection.room).await;
        self.router
            .to_room(&connection.room, ServerEvent::UserList(occupants))
            .await;

        // 8. ルームの有無はグローバルな情報なので全員に送る
        let rooms = self.repository.active_room_names().await;
        self.router.to_everyone(ServerEvent::RoomList(rooms)).await;

        match &previous {
            Some(previous) => tracing::info!(
                "Connection '{}' moved from '{}' to '{}' as '{}'",
                connection.id,
                previous.room,
                connection.room,
                connection.name
            ),
            None => tracing::info!(
                "Connection '{}' entered '{}' as '{}'",
                connection.id,
                connection.room,
                connection.name
            ),
        }

        connection
    }
}
