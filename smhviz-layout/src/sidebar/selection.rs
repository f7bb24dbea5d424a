//! Individual sidebar selectors.

use std::str::FromStr;

use dashdom::{Element, SelectOption};
use serde_json::Value;

use crate::error::{LayoutError, Result};
use crate::scenario::ScenarioSet;
use crate::target::Target;

/// Component used for the scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioWidget {
    /// Single choice, first remaining scenario selected (`scenario-radio`).
    Radio,
    /// Multiple choice, every remaining scenario selected (`scenario-checklist`).
    Checklist,
    /// Greyed-out radio group (`scenario-radio`).
    Disabled,
}

impl FromStr for ScenarioWidget {
    type Err = std::convert::Infallible;

    /// Unrecognized widget names render the disabled selector.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "radio" => Self::Radio,
            "checklist" => Self::Checklist,
            _ => Self::Disabled,
        })
    }
}

/// Build the scenario selector.
///
/// Enabled selectors use the display index as option value. Every scenario
/// is selected by default except those listed in `unselect`; the radio form
/// selects the first remaining one. Disabled selectors list the scenario ids
/// as greyed-out options with nothing selected.
pub fn scenario_selection(
    scenarios: &ScenarioSet,
    unselect: &[String],
    widget: ScenarioWidget,
    disabled: bool,
) -> Result<Element> {
    let choices: Vec<SelectOption> = scenarios
        .iter()
        .map(|s| SelectOption::new(s.label(), s.order))
        .collect();
    let selected: Vec<Value> = scenarios
        .iter()
        .filter(|s| !unselect.contains(&s.id))
        .map(|s| Value::from(s.order))
        .collect();
    let greyed: Vec<SelectOption> = scenarios
        .iter()
        .map(|s| SelectOption::new(s.label(), s.id.as_str()).disabled(true))
        .collect();

    let selector = match (widget, disabled) {
        (ScenarioWidget::Radio, false) => {
            let first = selected
                .first()
                .cloned()
                .ok_or(LayoutError::NoSelectableScenario)?;
            Element::radio_items()
                .id("scenario-radio")
                .options(choices)
                .value(first)
        }
        (ScenarioWidget::Checklist, false) => Element::checklist()
            .id("scenario-checklist")
            .options(choices)
            .value(selected),
        (ScenarioWidget::Checklist, true) => Element::checklist()
            .id("scenario-checklist")
            .options(greyed),
        (ScenarioWidget::Radio, true) | (ScenarioWidget::Disabled, _) => Element::radio_items()
            .id("scenario-radio")
            .options(greyed),
    };

    Ok(Element::div().child(Element::p("Scenario:")).child(selector))
}

/// Build the location dropdown (`location-dropdown`).
///
/// The disabled dropdown has no value and is never clearable.
pub fn location_selection(locations: &[String], sel_value: &str, disabled: bool, clearable: bool) -> Element {
    let options = SelectOption::plain_list(locations.iter());
    let dropdown = if disabled {
        Element::dropdown()
            .id("location-dropdown")
            .clearable(false)
            .options(options)
            .value(Value::Null)
            .disabled(true)
    } else {
        Element::dropdown()
            .id("location-dropdown")
            .clearable(clearable)
            .options(options)
            .value(sel_value)
    };
    Element::div().child(Element::p("Location:")).child(dropdown)
}

/// Build a target-like radio selector (targets, age groups, ...).
pub fn target_selection(
    targets: &[Target],
    def_target: Option<&str>,
    title: &str,
    id: &str,
    disabled: bool,
) -> Element {
    let radio = if disabled {
        let options = targets
            .iter()
            .map(|t| SelectOption::new(t.name.as_str(), t.code.as_str()).disabled(true));
        Element::radio_items().id(id).options(options)
    } else {
        let options = targets
            .iter()
            .map(|t| SelectOption::new(t.name.as_str(), t.code.as_str()));
        Element::radio_items()
            .id(id)
            .options(options)
            .value(def_target.map_or(Value::Null, Value::from))
    };
    Element::div().child(Element::p(title)).child(radio)
}

/// Build the uncertainty interval selector (`ui-radio`).
///
/// `description` is appended below the radio group, after a line break,
/// when the selector is enabled.
pub fn ui_selection(
    options: &[SelectOption],
    value: Value,
    disabled: bool,
    description: Option<Element>,
) -> Element {
    let title = Element::p("Uncertainty Interval: ");
    if disabled {
        let options = options.iter().cloned().map(|o| o.disabled(true));
        return Element::div()
            .child(title)
            .child(Element::radio_items().id("ui-radio").options(options));
    }

    let ui_sel = Element::div()
        .child(title)
        .child(Element::radio_items().id("ui-radio").options(options.to_vec()).value(value));
    match description {
        Some(description) => ui_sel.child(Element::br()).child(description),
        None => ui_sel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashdom::find_element;

    fn scenarios() -> ScenarioSet {
        ScenarioSet::new([("A", "Optimistic"), ("B", "Pessimistic"), ("C", "Baseline")])
    }

    #[test]
    fn test_checklist_excludes_unselected() {
        let el = scenario_selection(&scenarios(), &["B".to_string()], ScenarioWidget::Checklist, false).unwrap();
        let check = find_element(&el, "scenario-checklist").unwrap();
        assert_eq!(check.get_prop("value"), Some(&serde_json::json!([1, 3])));
        assert_eq!(check.get_options().len(), 3);
    }

    #[test]
    fn test_radio_skips_unselected_first() {
        let el = scenario_selection(&scenarios(), &["A".to_string()], ScenarioWidget::Radio, false).unwrap();
        let radio = find_element(&el, "scenario-radio").unwrap();
        assert_eq!(radio.get_prop("value"), Some(&Value::from(2)));
    }

    #[test]
    fn test_radio_all_unselected_fails() {
        let all: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let err = scenario_selection(&scenarios(), &all, ScenarioWidget::Radio, false).unwrap_err();
        assert!(matches!(err, LayoutError::NoSelectableScenario));
    }

    #[test]
    fn test_disabled_lists_ids() {
        for (widget, id) in [
            (ScenarioWidget::Radio, "scenario-radio"),
            (ScenarioWidget::Checklist, "scenario-checklist"),
        ] {
            let el = scenario_selection(&scenarios(), &[], widget, true).unwrap();
            let sel = find_element(&el, id).unwrap();
            assert!(sel.get_prop("value").is_none());
            let opts = sel.get_options();
            assert!(opts.iter().all(|o| o.disabled));
            assert_eq!(opts[0].value.as_str(), Some("A"));
        }
    }

    #[test]
    fn test_unknown_widget_is_disabled_radio() {
        let widget: ScenarioWidget = "dropdown".parse().unwrap();
        assert_eq!(widget, ScenarioWidget::Disabled);
        let el = scenario_selection(&scenarios(), &[], widget, false).unwrap();
        let sel = find_element(&el, "scenario-radio").unwrap();
        assert!(sel.get_prop("value").is_none());
    }

    #[test]
    fn test_location_disabled() {
        let locs = vec!["US".to_string(), "Alabama".to_string()];
        let el = location_selection(&locs, "US", true, true);
        let drop = find_element(&el, "location-dropdown").unwrap();
        assert_eq!(drop.get_prop("value"), Some(&Value::Null));
        assert_eq!(drop.get_prop("clearable"), Some(&Value::Bool(false)));
        assert_eq!(drop.get_prop("disabled"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_target_selection_default() {
        let targets = vec![Target::new("inc hosp", "Incident Hospitalizations")];
        let el = target_selection(&targets, Some("inc hosp"), "Target:", "target-radio", false);
        let radio = find_element(&el, "target-radio").unwrap();
        assert_eq!(radio.get_prop("value"), Some(&Value::from("inc hosp")));
        assert_eq!(radio.get_options()[0].label, "Incident Hospitalizations");
    }

    #[test]
    fn test_ui_description_only_when_enabled() {
        let opts = vec![SelectOption::new("None", 0), SelectOption::new("95%", 95)];
        let note = || Some(Element::span().text("note").class_name("span_sidebar"));

        let enabled = ui_selection(&opts, Value::from(95), false, note());
        assert_eq!(enabled.child_elements().count(), 4);

        let disabled = ui_selection(&opts, Value::from(95), true, note());
        assert_eq!(disabled.child_elements().count(), 2);
        let radio = find_element(&disabled, "ui-radio").unwrap();
        assert!(radio.get_options().iter().all(|o| o.disabled));
        assert!(radio.get_prop("value").is_none());
    }
}
