mod options;
mod style;

pub use options::{OptionValue, SelectOption};
pub use style::Style;
