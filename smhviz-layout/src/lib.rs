//! Layout fragments for Scenario Modeling Hub visualization pages
//!
//! Builds the sidebar, plot filter bars, tab bars, notes and metadata pages
//! of a hub website as [`dashdom`] element trees.

pub mod config;
pub mod error;
pub mod metadata;
pub mod notes;
pub mod plot_bar;
pub mod plot_tab;
pub mod scenario;
pub mod sidebar;
pub mod tabs;
pub mod target;
pub mod widgets;

pub use config::LayoutConfig;
pub use error::{DataError, LayoutError, Result};
pub use metadata::{make_abstract_tab, make_dt_metadata, render_abstract};
pub use notes::make_notes_definition;
pub use plot_bar::make_plot_bar;
pub use plot_tab::PlotTab;
pub use scenario::{Scenario, ScenarioSet};
pub use sidebar::{build_sidebar, build_sidebar_from_csv, make_sidebar};
pub use tabs::{make_round_tab, make_tab_plots};
pub use target::{prep_target, Target};
