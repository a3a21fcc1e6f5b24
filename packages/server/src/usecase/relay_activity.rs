//! UseCase: 入力中通知の中継
//!
//! 送信者のルームの、送信者以外の在室者へ名前をそのまま中継する。
//! 保存も応答もしない。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRepository, RoomName, ServerEvent};

use super::BroadcastRouter;

/// 入力中通知のユースケース
pub struct RelayActivityUseCase {
    repository: Arc<dyn ConnectionRepository>,
    router: Arc<BroadcastRouter>,
}

impl RelayActivityUseCase {
    pub fn new(repository: Arc<dyn ConnectionRepository>, router: Arc<BroadcastRouter>) -> Self {
        Self { repository, router }
    }

    /// 入力中通知を中継する
    ///
    /// 送信者がどのルームにもいなければ何もせず `None` を返す。
    pub async fn execute(&self, id: ConnectionId, name: String) -> Option<RoomName> {
        let Some(sender) = self.repository.find(&id).await else {
            tracing::debug!("Ignoring activity from '{}' without a room", id);
            return None;
        };

        self.router
            .to_room_except_sender(&sender.room, &sender.id, ServerEvent::Activity(name))
            .await;

        Some(sender.room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{TestContext, drain, id, name, room};
    use serde_json::json;

    #[tokio::test]
    async fn test_activity_excludes_sender() {
        // テスト項目: 入力中通知は送信者以外の同じルームの在室者にだけ届く
        // given (前提条件):
        let ctx = TestContext::new();
        let mut rx_a = ctx.connect("a").await;
        let mut rx_b = ctx.connect("b").await;
        let mut rx_c = ctx.connect("c").await;
        ctx.repository.upsert(id("a"), name("Alice"), room("lobby")).await;
        ctx.repository.upsert(id("b"), name("Bob"), room("lobby")).await;
        ctx.repository.upsert(id("c"), name("Carol"), room("kitchen")).await;
        let usecase = RelayActivityUseCase::new(ctx.repository.clone(), ctx.router.clone());

        // when (操作):
        let result = usecase.execute(id("a"), "Alice".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Some(room("lobby")));
        assert!(drain(&mut rx_a).is_empty());
        assert_eq!(
            drain(&mut rx_b),
            vec![json!({"type": "activity", "name": "Alice"})]
        );
        assert!(drain(&mut rx_c).is_empty());
    }

    #[tokio::test]
    async fn test_activity_without_room_is_ignored() {
        // テスト項目: 入室前の接続からの入力中通知は誰にも届かない
        // given (前提条件):
        let ctx = TestContext::new();
        let mut rx_a = ctx.connect("a").await;
        let mut rx_b = ctx.connect("b").await;
        ctx.repository.upsert(id("b"), name("Bob"), room("lobby")).await;
        let usecase = RelayActivityUseCase::new(ctx.repository.clone(), ctx.router.clone());

        // when (操作):
        let result = usecase.execute(id("a"), "Alice".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, None);
        assert!(drain(&mut rx_a).is_empty());
        assert!(drain(&mut rx_b).is_empty());
    }
}
