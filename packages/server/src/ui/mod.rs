//! WebSocket chat relay server: Connection Gateway and HTTP API.

mod cors;
mod handler;
mod server;
mod signal;
pub mod state;

pub use cors::CorsPolicy;
pub use server::Server;
