//! Chat-facing side of the sweeper: per-conversation sessions, the controller that
//! applies player actions, and a console transport for local play.

pub use controller::*;
pub use error::*;
pub use store::*;

pub mod config;
pub mod console;
mod controller;
mod error;
pub mod render;
mod store;
