//! Error types for the inspector protocol layer.

mod protocol;
mod selector;
mod style;

pub use protocol::*;
pub use selector::*;
pub use style::*;
