//! Declarative component trees for Dash front-ends.
//!
//! Elements are built with chained methods and rendered to the Dash
//! component JSON format (`{"type", "namespace", "props"}`).

pub mod element;
pub mod render;
pub mod types;

pub use element::{collect_ids, count_kind, find_element, find_kind, Content, Element, Kind, Namespace, Node};
pub use render::{outline, to_json_pretty, to_value};
pub use types::*;
