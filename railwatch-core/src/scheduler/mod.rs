//! The periodic update loop.

mod cycle;
mod settings;
mod update;


pub use cycle::{CycleError, CycleReport, CycleStage};
pub use settings::{SHUTDOWN_POLL, SchedulerSettings};
pub use update::UpdateScheduler;
pub(crate) use update::now;
