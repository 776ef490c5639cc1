//! Tigon core: transport-agnostic protocol primitives and error types.
//!
//! This crate defines the wire-level contract shared by the native bridge and
//! the `tigon.js` side: the channel message, the `{id, payload}` envelope, the
//! response value model and the script calls emitted back into the web
//! runtime. It carries no runtime dependencies so any host view can reuse it.
//!
//! # Guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed envelopes surface as [`ProtocolError`] and unencodable responses
//! degrade to `{}`, so a hostile page cannot crash the host.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result and error types.
pub use error::{ProtocolError, Result, TigonError};
