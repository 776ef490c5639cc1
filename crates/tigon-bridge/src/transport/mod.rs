//! Transport layer: the channel registry the web runtime posts into.
//!
//! A real host view backs this with its native script-message plumbing;
//! `UserContentController` is the in-memory equivalent used by the headless
//! host and by tests.

pub mod controller;

pub use controller::{ScriptMessageReceiver, UserContentController};
