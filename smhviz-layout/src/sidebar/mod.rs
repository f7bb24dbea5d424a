//! The left sidebar: round title and the scenario, location, target and
//! uncertainty interval selectors.

mod preset;
mod selection;

pub use preset::SidebarPreset;
pub use selection::{location_selection, scenario_selection, target_selection, ui_selection, ScenarioWidget};

use std::path::Path;

use dashdom::{Element, SelectOption};
use log::{debug, warn};
use serde_json::Value;

use crate::config::{GroupConfig, SidebarConfig};
use crate::error::Result;
use crate::plot_tab::PlotTab;
use crate::scenario::ScenarioSet;
use crate::target::{prep_target, Target};

/// Description shown below the uncertainty intervals when "Multi" is offered.
pub const MULTI_UI_DESCRIPTION: &str = "'multi' displays 95%, 90%, 80%, and 50% uncertainty intervals, \
shaded from lightest (95%) to darkest (50%)";

/// Option value of the "Multi" uncertainty interval.
pub const MULTI_UI_VALUE: i64 = -1;

/// An optional group selector of the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSelection {
    pub groups: Vec<Target>,
    pub default: Option<String>,
    pub disabled: bool,
}

impl GroupSelection {
    fn build(&self, title: &str, id: &str) -> Element {
        Element::div()
            .child(target_selection(&self.groups, self.default.as_deref(), title, id, self.disabled))
            .child(Element::br())
    }
}

/// Sidebar builder.
#[derive(Debug, Clone)]
pub struct Sidebar {
    round_number: String,
    round_name: Option<String>,

    scenarios: ScenarioSet,
    scenario_widget: ScenarioWidget,
    scenario_disabled: bool,
    unselect_scenario: Vec<String>,

    locations: Vec<String>,
    default_location: String,
    location_disabled: bool,

    targets: Vec<Target>,
    default_target: Option<String>,
    target_disabled: bool,

    ui_options: Vec<SelectOption>,
    ui_value: Value,
    ui_description: Option<Element>,
    ui_disabled: bool,

    age_group: Option<GroupSelection>,
    race_ethnicity: Option<GroupSelection>,
}

/// Start a sidebar for a round. Selectors default to enabled, with a radio
/// scenario selector and the `None`/`50%`/`95%` uncertainty intervals.
pub fn make_sidebar(round_number: impl Into<String>, scenarios: ScenarioSet) -> Sidebar {
    Sidebar {
        round_number: round_number.into(),
        round_name: None,
        scenarios,
        scenario_widget: ScenarioWidget::Radio,
        scenario_disabled: false,
        unselect_scenario: Vec::new(),
        locations: vec!["US".to_string()],
        default_location: "US".to_string(),
        location_disabled: false,
        targets: Vec::new(),
        default_target: None,
        target_disabled: false,
        ui_options: crate::config::default_ui_options(),
        ui_value: Value::from(95),
        ui_description: None,
        ui_disabled: false,
        age_group: None,
        race_ethnicity: None,
    }
}

impl Sidebar {
    /// Displayed round name, `"Round <n>"` by default.
    pub fn round_name(mut self, name: Option<String>) -> Self {
        self.round_name = name;
        self
    }

    pub fn scenario_widget(mut self, widget: ScenarioWidget, disabled: bool) -> Self {
        self.scenario_widget = widget;
        self.scenario_disabled = disabled;
        self
    }

    pub fn unselect_scenario(mut self, ids: Vec<String>) -> Self {
        self.unselect_scenario = ids;
        self
    }

    pub fn locations(mut self, locations: Vec<String>, default: impl Into<String>, disabled: bool) -> Self {
        self.locations = locations;
        self.default_location = default.into();
        self.location_disabled = disabled;
        self
    }

    pub fn targets(mut self, targets: Vec<Target>, default: Option<String>, disabled: bool) -> Self {
        self.targets = targets;
        self.default_target = default;
        self.target_disabled = disabled;
        self
    }

    pub fn uncertainty(
        mut self,
        options: Vec<SelectOption>,
        value: impl Into<Value>,
        description: Option<Element>,
        disabled: bool,
    ) -> Self {
        self.ui_options = options;
        self.ui_value = value.into();
        self.ui_description = description;
        self.ui_disabled = disabled;
        self
    }

    pub fn age_group(mut self, group: Option<GroupSelection>) -> Self {
        self.age_group = group;
        self
    }

    pub fn race_ethnicity(mut self, group: Option<GroupSelection>) -> Self {
        self.race_ethnicity = group;
        self
    }

    pub fn build(self) -> Result<Element> {
        let scenario_sel = scenario_selection(
            &self.scenarios,
            &self.unselect_scenario,
            self.scenario_widget,
            self.scenario_disabled,
        )?;
        let location_sel = location_selection(&self.locations, &self.default_location, self.location_disabled, false);
        let target_sel = target_selection(
            &self.targets,
            self.default_target.as_deref(),
            "Target:",
            "target-radio",
            self.target_disabled,
        );
        let ui_sel = ui_selection(&self.ui_options, self.ui_value, self.ui_disabled, self.ui_description);

        let age_group_sel = self
            .age_group
            .as_ref()
            .map(|g| g.build("Age Group:", "age_group-radio"));
        let race_ethnicity_sel = self
            .race_ethnicity
            .as_ref()
            .map(|g| g.build("Race Ethnicity Group:", "race_ethnicity-radio"));

        let round_name = self
            .round_name
            .unwrap_or_else(|| format!("Round {}", self.round_number));

        Ok(Element::div()
            .child(Element::h2("Model Projection").class_name("title"))
            .child(Element::div().text("New scenario for models are defined in each round"))
            .child(Element::h3(round_name).class_name("title"))
            .child(scenario_sel)
            .child(Element::hr().class_name("hr-notes"))
            .child(location_sel)
            .child(Element::br())
            .child(target_sel)
            .child(Element::br())
            .maybe_child(age_group_sel)
            .maybe_child(race_ethnicity_sel)
            .child(ui_sel))
    }
}

fn group_selection(group: &Option<GroupConfig>) -> Option<GroupSelection> {
    group.as_ref().map(|g| GroupSelection {
        groups: g.groups.clone(),
        default: g.default.clone(),
        disabled: g.disabled,
    })
}

/// Build the sidebar of `round` for a plot tab.
///
/// The tab picks the [`SidebarPreset`]; targets are filtered with
/// [`prep_target`]. Unknown tabs render every selector disabled.
pub fn build_sidebar(config: &SidebarConfig, scenarios: ScenarioSet, round: &str, tab: &PlotTab) -> Result<Element> {
    if !tab.is_known() {
        warn!("Unknown plot tab '{}', rendering a disabled sidebar", tab);
    }
    let preset = SidebarPreset::for_tab(tab);
    let prepared = prep_target(&config.target_type, &config.targets, &config.default_target)?;

    let mut ui_options = config.ui_options.clone();
    let mut ui_description = None;
    if preset.multi_ui && config.multi_ui {
        ui_options.push(SelectOption::new("Multi", MULTI_UI_VALUE));
        ui_description = Some(Element::span().text(MULTI_UI_DESCRIPTION).class_name("span_sidebar"));
    }

    debug!("Building sidebar for round {} tab {} ({:?})", round, tab, preset);

    make_sidebar(round, scenarios)
        .round_name(config.round_name.clone())
        .scenario_widget(preset.scenario_widget, preset.scenario_disabled)
        .unselect_scenario(config.unselect_scenario.clone())
        .locations(config.locations.clone(), config.default_location.clone(), preset.location_disabled)
        .targets(prepared.targets, prepared.default, preset.target_disabled)
        .uncertainty(ui_options, config.ui_value.clone(), ui_description, preset.ui_disabled)
        .age_group(group_selection(&config.age_group))
        .race_ethnicity(group_selection(&config.race_ethnicity))
        .build()
}

/// Read the scenarios of `round` from `scenario_file`, then build the sidebar.
pub fn build_sidebar_from_csv(
    config: &SidebarConfig,
    scenario_file: impl AsRef<Path>,
    round: &str,
    tab: &PlotTab,
) -> Result<Element> {
    let scenarios = ScenarioSet::from_csv(scenario_file, round)?;
    build_sidebar(config, scenarios, round, tab)
}
