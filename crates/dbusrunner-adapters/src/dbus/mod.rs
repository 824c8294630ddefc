//! Session-bus adapter.
//!
//! [`RunnerInterface`] exposes a [`Runner`](dbusrunner_core::application::Runner)
//! as `org.kde.krunner1`; [`RunnerService`] owns the connection and the
//! well-known name.

mod interface;
mod service;
mod wire;

pub use interface::RunnerInterface;
pub use service::{Registered, RunnerService, Unregistered};
pub use wire::{WireAction, WireMatch};
