//! HTTP and WebSocket surface.

mod assets;
pub mod pid;
mod routes;
mod setup;
mod state;
mod ws;


pub use assets::Assets;
pub use routes::router;
pub use setup::{run, serve, serve_on};
pub use state::AppState;
