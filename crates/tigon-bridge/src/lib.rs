//! Tigon bridge library entry.
//!
//! This crate wires the content controller (transport slot), the dispatcher
//! trampoline, the executor capability and the host view into a working
//! native <-> JavaScript bridge. It is consumed by the `tigon-host` binary
//! and by integration tests.

pub mod config;
pub mod dispatch;
pub mod executor;
pub mod host;
pub mod services;
pub mod transport;
pub mod view;

pub use dispatch::{Dispatcher, MessageHandler};
pub use executor::{Executor, ScriptHost};
pub use transport::{ScriptMessageReceiver, UserContentController};
pub use view::BridgeView;
