//! Presence Coordinator
//!
//! 受信イベントを 1 つずつ順番に処理する単一のイベントループ。
//! 各ハンドラは次のイベントを取り出す前に完了するので、異なる接続のハンドラが
//! Registry の更新途中で入り混じることはない。
//!
//! Connection Gateway（UI 層）は `InboundEventSender` にイベントを積むだけで、
//! 状態の変更とアナウンスはすべてこのループの中で行われる。

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::domain::{ConnectionRepository, InboundEvent, MessageCodec, MessagePusher};

use super::{
    BroadcastRouter, ConnectUseCase, DisconnectUseCase, EnterRoomUseCase, RelayActivityUseCase,
    SendMessageUseCase,
};

/// イベントループへの送信口
pub type InboundEventSender = mpsc::UnboundedSender<InboundEvent>;

/// Presence Coordinator
pub struct PresenceCoordinator {
    connect_usecase: ConnectUseCase,
    enter_room_usecase: EnterRoomUseCase,
    send_message_usecase: SendMessageUseCase,
    relay_activity_usecase: RelayActivityUseCase,
    disconnect_usecase: DisconnectUseCase,
}

impl PresenceCoordinator {
    /// Repository と MessagePusher から各ユースケースを組み立てる
    pub fn new(
        repository: Arc<dyn ConnectionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        codec: MessageCodec,
    ) -> Self {
        let router = Arc::new(BroadcastRouter::new(
            repository.clone(),
            message_pusher.clone(),
        ));

        Self {
            connect_usecase: ConnectUseCase::new(
                message_pusher.clone(),
                router.clone(),
                codec.clone(),
            ),
            enter_room_usecase: EnterRoomUseCase::new(
                repository.clone(),
                router.clone(),
                codec.clone(),
            ),
            send_message_usecase: SendMessageUseCase::new(
                repository.clone(),
                router.clone(),
                codec.clone(),
            ),
            relay_activity_usecase: RelayActivityUseCase::new(repository.clone(), router.clone()),
            disconnect_usecase: DisconnectUseCase::new(repository, message_pusher, router, codec),
        }
    }

    /// イベントを 1 つ処理する
    pub async fn handle(&self, event: InboundEvent) {
        match event {
            InboundEvent::Connect { id, channel } => {
                self.connect_usecase.execute(id, channel).await;
            }
            InboundEvent::EnterRoom { id, name, room } => {
                self.enter_room_usecase.execute(id, name, room).await;
            }
            InboundEvent::Message { id, name, text } => {
                self.send_message_usecase.execute(id, name, text).await;
            }
            InboundEvent::Activity { id, name } => {
                self.relay_activity_usecase.execute(id, name).await;
            }
            InboundEvent::Disconnect { id } => {
                self.disconnect_usecase.execute(id).await;
            }
        }
    }

    /// 送信口がすべて閉じるまでイベントを順番に処理する
    pub async fn run(self, mut receiver: mpsc::UnboundedReceiver<InboundEvent>) {
        tracing::info!("Presence coordinator started");
        while let Some(event) = receiver.recv().await {
            self.handle(event).await;
        }
        tracing::info!("Presence coordinator stopped");
    }

    /// イベントループを tokio タスクとして起動する
    pub fn spawn(self) -> (InboundEventSender, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(self.run(receiver));
        (sender, handle)
    }
}
