//! Terminal chat client for the Hiroba relay.
//!
//! Connects, enters the given room and sends each typed line as a chat
//! message. `/join <room>` switches rooms and `/quit` exits. Reconnects on
//! disconnection (max 5 attempts with 5 second interval) into the last room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --name Alice --room lobby
//! cargo run --bin hiroba-client -- -n Bob -r kitchen
//! ```

use clap::Parser;

use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-client")]
#[command(about = "Terminal client for the Hiroba room-scoped chat relay", long_about = None)]
struct Args {
    /// Display name shown to other users
    #[arg(short = 'n', long)]
    name: String,

    /// Room to enter after connecting
    #[arg(short = 'r', long, default_value = "lobby")]
    room: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3500/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = hiroba_client::run_client(args.url, args.name, args.room).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
