//! Top-level facade crate for Tigon.
//!
//! Re-exports the protocol core and the bridge library so users can depend on a single crate.

pub mod core {
    pub use tigon_core::*;
}

pub mod bridge {
    pub use tigon_bridge::*;
}
