//! HTTP transport for the three remote operations.
//!
//! - `POST /register`: `{"name"}` → `{"player_id"}`
//! - `GET /status/{player_id}`: status record, or `{"error"}` for unknown ids
//! - `POST /move`: `{"player_id", "word"}` → `{"reply"}`
mod request;
mod server;

pub mod handlers;

pub use request::*;
pub use server::*;
