mod config;
pub mod server;
pub mod tracing;
pub mod upstream;
pub mod ws;

pub use server::TestServer;
pub use tracing::{CapturedEvent, events_with_message, init_test_tracing};
pub use upstream::{Reply, Upstream, fixture_page};
