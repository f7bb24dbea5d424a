//! Error types

mod data;
mod layout;

pub use data::*;
pub use layout::*;

/// Result alias for layout builders.
pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
