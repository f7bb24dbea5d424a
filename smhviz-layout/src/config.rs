//! Layout configuration.
//!
//! Every field has a default, so a configuration file only needs the keys
//! that differ from the stock dashboard.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dashdom::{OptionValue, SelectOption, Style};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DataError;
use crate::plot_bar::OtherPathogen;
use crate::target::Target;

/// Default location of the model abstracts, relative to the dashboard root.
pub const DEFAULT_ABSTRACTS_PATH: &str = "./visualization/data-visualization/model_abstracts/";

/// Top-level configuration of the layout builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Folder holding one `round<N>` folder of abstracts per round.
    pub abstracts_path: PathBuf,
    /// Scenario CSV (`id`, `fullname`, `round`).
    pub scenario_file: Option<PathBuf>,
    /// Model metadata CSV.
    pub metadata_file: Option<PathBuf>,
    pub sidebar: SidebarConfig,
    pub plot_bar: PlotBarConfig,
    pub tabs: TabsConfig,
    pub notes: NotesCss,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            abstracts_path: PathBuf::from(DEFAULT_ABSTRACTS_PATH),
            scenario_file: None,
            metadata_file: None,
            sidebar: SidebarConfig::default(),
            plot_bar: PlotBarConfig::default(),
            tabs: TabsConfig::default(),
            notes: NotesCss::default(),
        }
    }
}

impl LayoutConfig {
    /// Load a JSON configuration file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No configuration at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(DataError::io(path, e)),
        };
        let config = Self::from_json(&text).map_err(|source| DataError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// ============================================================================
// Sidebar
// ============================================================================

/// Optional group selector (age group, race/ethnicity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    pub groups: Vec<Target>,
    pub default: Option<String>,
    /// Greyed out unless explicitly enabled.
    pub disabled: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            default: None,
            disabled: true,
        }
    }
}

/// Inputs of the sidebar that do not come from the scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub locations: Vec<String>,
    pub default_location: String,
    pub targets: Vec<Target>,
    /// Outcome type filter: `"inc"`, `"cum"` or `"all"`.
    pub target_type: String,
    /// Suffix identifying the default target (e.g. `" hosp"`).
    pub default_target: String,
    /// Scenario ids left unselected by default.
    pub unselect_scenario: Vec<String>,
    pub ui_options: Vec<SelectOption>,
    pub ui_value: OptionValue,
    /// Offer the "Multi" uncertainty interval on tabs that support it.
    pub multi_ui: bool,
    pub age_group: Option<GroupConfig>,
    pub race_ethnicity: Option<GroupConfig>,
    /// Displayed round name, `"Round <n>"` when unset.
    pub round_name: Option<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            locations: vec!["US".to_string()],
            default_location: "US".to_string(),
            targets: Vec::new(),
            target_type: "inc".to_string(),
            default_target: " hosp".to_string(),
            unselect_scenario: Vec::new(),
            ui_options: default_ui_options(),
            ui_value: OptionValue::Int(95),
            multi_ui: false,
            age_group: None,
            race_ethnicity: None,
            round_name: None,
        }
    }
}

/// `None`, `50%` and `95%` uncertainty intervals.
pub fn default_ui_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("None", 0),
        SelectOption::new("50%", 50),
        SelectOption::new("95%", 95),
    ]
}

// ============================================================================
// Plot bar
// ============================================================================

/// Inputs of the plot specific filter bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotBarConfig {
    /// Default ensemble of the round, preselected in the model dropdown.
    pub val_default: String,
    /// Maximum projection horizon (weeks) of the round.
    pub max_horizon: i64,
    /// Hide the "Show Additional Ensemble" checkbox.
    pub hide_ens: bool,
    /// Panel names of the scenario comparison plot.
    pub sc_panel_name: Vec<String>,
    pub sc_multi_panel: bool,
    pub sc_sidebar_option: bool,
    pub pathogen: String,
    /// Scenario ids of the round, for the heatmap comparison dropdown.
    pub scen_choice: Vec<String>,
    pub other_pathogen: Vec<OtherPathogen>,
    pub quant_opt: Vec<f64>,
    pub sel_quant: f64,
    pub method_list: Vec<String>,
    pub tf_options: Vec<String>,
    pub traj_min: i64,
    pub traj_max: i64,
    pub traj_step: i64,
    pub check_med: bool,
    pub traj_by_model: bool,
    pub style_checkbox: Option<Style>,
    pub css_sel: String,
    pub inline_radio: bool,
    pub clearable: bool,
    pub tooltip: Option<Value>,
    pub radio_comp_style: Option<Style>,
    pub multi_note_style: Option<Style>,
    pub multi_bar_style: Option<Style>,
    pub css_multi_radio: String,
    pub traj_slider_style: Option<Style>,
    pub css_h_radio: String,
    pub css_h_drop: String,
    pub css_bar_plot: String,
    pub heatmap_style: Option<Style>,
    pub mod_drop_id: String,
}

impl Default for PlotBarConfig {
    fn default() -> Self {
        Self {
            val_default: "ensemble".to_string(),
            max_horizon: 26,
            hide_ens: true,
            sc_panel_name: Vec::new(),
            sc_multi_panel: false,
            sc_sidebar_option: false,
            pathogen: String::new(),
            scen_choice: Vec::new(),
            other_pathogen: Vec::new(),
            quant_opt: default_quantiles(),
            sel_quant: 0.5,
            method_list: vec!["population size".to_string(), "all projection".to_string()],
            tf_options: default_time_frames(),
            traj_min: 10,
            traj_max: 100,
            traj_step: 10,
            check_med: true,
            traj_by_model: false,
            style_checkbox: None,
            css_sel: "plot_bar_sel".to_string(),
            inline_radio: true,
            clearable: false,
            tooltip: None,
            radio_comp_style: None,
            multi_note_style: None,
            multi_bar_style: None,
            css_multi_radio: "multi_bar_radio".to_string(),
            traj_slider_style: None,
            css_h_radio: "radio_heatmap".to_string(),
            css_h_drop: "dropdown_heatmap".to_string(),
            css_bar_plot: "plot_bar".to_string(),
            heatmap_style: None,
            mod_drop_id: "model_dropdown".to_string(),
        }
    }
}

/// Quantiles offered by the quantile dropdowns.
pub fn default_quantiles() -> Vec<f64> {
    vec![0.05, 0.25, 0.5, 0.75, 0.95]
}

/// Time frames of the peak plot.
pub fn default_time_frames() -> Vec<String> {
    ["summer 2023", "winter 2023", "year 2023", "summer 2024", "winter 2024", "year 2024"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ============================================================================
// Tabs and notes
// ============================================================================

/// CSS classes of the plot and round tab bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabCss {
    pub plot_tabs: String,
    pub plot_tabs_container: String,
    pub right_sidebar: String,
    pub plot_tab: String,
    pub plot_tab_sel: String,
    pub round_tab: String,
    pub round_tab_sel: String,
}

impl Default for TabCss {
    fn default() -> Self {
        Self {
            plot_tabs: "plot_tabs".to_string(),
            plot_tabs_container: "plot_tabs-container".to_string(),
            right_sidebar: "column right-sidebar".to_string(),
            plot_tab: "plot_tab".to_string(),
            plot_tab_sel: "plot_tab--selected".to_string(),
            round_tab: "round_tab".to_string(),
            round_tab_sel: "round_tab--selected".to_string(),
        }
    }
}

/// Tab labels and classes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Tab id to displayed label.
    pub names: BTreeMap<String, String>,
    pub css: TabCss,
}

/// CSS classes of the notes and definitions section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesCss {
    pub title: String,
    pub column_left: String,
    pub column_right: String,
    pub column_notes_left: String,
    pub column_notes_right: String,
    pub row: String,
    pub row_bottom_notes: String,
}

impl Default for NotesCss {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            column_left: "column left".to_string(),
            column_right: "column right".to_string(),
            column_notes_left: "column_notes left_notes".to_string(),
            column_notes_right: "column_notes right_notes".to_string(),
            row: "row".to_string(),
            row_bottom_notes: "row bottom_notes".to_string(),
        }
    }
}
