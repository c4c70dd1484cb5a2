//! Wire types for the Messenger Platform.

mod send;
mod webhook;

pub use send::*;
pub use webhook::*;
