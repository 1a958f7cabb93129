//! Plain data types shared by every inspector crate.

mod attribute;
mod geometry;
mod style;
mod template;

pub use attribute::*;
pub use geometry::*;
pub use style::*;
pub use template::*;
