//! Built-in message handlers.

pub mod echo;

pub use echo::EchoHandler;
