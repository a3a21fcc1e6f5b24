//! Room-scoped WebSocket chat relay.
//!
//! Clients connect over WebSocket, enter a named room and exchange messages
//! and typing notices with the other occupants. Presence (who is in which
//! room, which rooms exist) is announced as connections enter, switch rooms
//! and disconnect. All state lives in memory for the lifetime of the process.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
