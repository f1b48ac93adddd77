pub mod board;
pub mod broadcast;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod scheduler;
pub mod server;
pub mod shutdown;
pub mod snapshot;
pub mod source;
pub mod translate;

#[cfg(test)]
mod test_support;
