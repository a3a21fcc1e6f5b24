//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::{GetRoomDetailUseCase, GetRoomsUseCase, InboundEventSender};

use super::{
    cors::CorsPolicy,
    handler::{
        http::{get_room_detail, get_rooms, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat relay server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let (events, _coordinator) = PresenceCoordinator::new(repository, pusher, codec).spawn();
/// let server = Server::new(events, get_rooms_usecase, get_room_detail_usecase, cors);
/// server.run("127.0.0.1".to_string(), 3500).await?;
/// ```
pub struct Server {
    /// Presence Coordinator のイベントループへの送信口
    events: InboundEventSender,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    /// クロスオリジンの許可設定
    cors: CorsPolicy,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `events` - Sender of the running presence coordinator
    /// * `get_rooms_usecase` - UseCase for listing active rooms
    /// * `get_room_detail_usecase` - UseCase for getting one room
    /// * `cors` - Cross-origin policy for the HTTP API
    pub fn new(
        events: InboundEventSender,
        get_rooms_usecase: Arc<GetRoomsUseCase>,
        get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
        cors: CorsPolicy,
    ) -> Self {
        Self {
            events,
            get_rooms_usecase,
            get_room_detail_usecase,
            cors,
        }
    }

    fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            events: self.events,
            get_rooms_usecase: self.get_rooms_usecase,
            get_room_detail_usecase: self.get_room_detail_usecase,
        });

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room}", get(get_room_detail))
            .with_state(app_state)
            .layer(TraceLayer::new_for_http());

        match self.cors.layer() {
            Some(cors) => app.layer(cors),
            None => app,
        }
    }

    /// Run the WebSocket chat relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 3500)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener).await?;
        Ok(())
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        tracing::info!(
            "WebSocket chat relay listening on {}",
            listener.local_addr()?
        );

        // Set up graceful shutdown signal handler
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
