//! Fan-out of committed snapshots to live subscribers.

mod guard;
mod hub;


pub use guard::SubscriptionGuard;
pub use hub::{BroadcastHub, SubscriberId, Subscription};
