//! Room-scoped WebSocket chat relay server.
//!
//! Clients enter named rooms and exchange messages and typing notices with the
//! other occupants. Presence updates are pushed as users come and go.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3000
//! PORT=8080 cargo run --bin hiroba-server -- --production
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use hiroba_server::{
    domain::MessageCodec,
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryConnectionRepository,
    },
    ui::{CorsPolicy, Server},
    usecase::{GetRoomDetailUseCase, GetRoomsUseCase, PresenceCoordinator},
};
use hiroba_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "Room-scoped WebSocket chat relay with presence updates", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HIROBA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3500")]
    port: u16,

    /// Origins allowed to call the server cross-origin (development only)
    #[arg(long = "cors-origin", env = "HIROBA_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Production mode: disallow cross-origin access
    #[arg(long, env = "HIROBA_PRODUCTION")]
    production: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. Presence Coordinator (event loop)
    // 4. Read-side UseCases
    // 5. Server

    // 1. Create Repository (in-memory Connection Registry)
    let repository = Arc::new(InMemoryConnectionRepository::new(Arc::new(Mutex::new(
        Vec::new(),
    ))));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. Start the Presence Coordinator
    let codec = MessageCodec::new(Arc::new(SystemClock));
    let (events, _coordinator) =
        PresenceCoordinator::new(repository.clone(), message_pusher, codec).spawn();

    // 4. Create read-side UseCases
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(repository.clone()));
    let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(repository));

    // 5. Create and run the server
    let cors = CorsPolicy::from_config(args.production, args.cors_origins);
    tracing::info!("Cross-origin policy: {:?}", cors);
    let server = Server::new(events, get_rooms_usecase, get_room_detail_usecase, cors);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
