//! Plot specific filter bars, shown above the plot of the selected tab.

mod bars;
mod multi;

pub use bars::{heatmap_bar, sample_peak_bar, scen_comp_bar, spaghetti_bar};
pub use multi::{multi_pathogen_bar, multi_pathogen_bar_comp, multi_pathogen_notes, OtherPathogen, PathogenScenarios};

use dashdom::{Element, SelectOption, Style};
use log::{debug, warn};

use crate::config::PlotBarConfig;
use crate::error::{LayoutError, Result};
use crate::plot_tab::PlotTab;
use crate::widgets::{make_checkbox, make_dropdown, make_radio_items, make_slider};
use bars::{ensemble_checkbox, location_order_radio};

fn target_type_radio(config: &PlotBarConfig) -> Element {
    make_radio_items(
        "Outcome type",
        "target_type-radio",
        vec![SelectOption::new("Incident", "inc"), SelectOption::new("Cumulative", "cum")],
        "inc",
    )
    .class_name(&config.css_sel)
    .inline(config.inline_radio)
    .build()
}

fn model_dropdown(config: &PlotBarConfig) -> Element {
    make_dropdown(
        "Model",
        &config.mod_drop_id,
        SelectOption::plain_list([config.val_default.as_str()]),
        config.val_default.as_str(),
    )
    .class_name(&config.css_sel)
    .clearable(config.clearable)
    .build()
}

fn checkbox(config: &PlotBarConfig) -> Element {
    ensemble_checkbox("True", config.hide_ens)
        .maybe_style(config.style_checkbox.clone())
        .build()
}

fn week_radio(config: &PlotBarConfig) -> Element {
    let half = config.max_horizon as f64 / 2.0;
    make_radio_items(
        "Week",
        "week-radio",
        vec![SelectOption::plain(half), SelectOption::plain(config.max_horizon)],
        half,
    )
    .class_name(&config.css_sel)
    .inline(config.inline_radio)
    .build()
}

/// Build the filter bar of a plot tab, wrapped in a `Div.plot_bar`.
///
/// | Tab                                      | Content                                         |
/// |------------------------------------------|-------------------------------------------------|
/// | `scenario`, `scenario_disp`              | ensemble checkbox                               |
/// | `model_specific`, `model_disp`           | outcome type, model, ensemble checkbox          |
/// | `scen_sample_comp`                       | absolute/relative type, ensemble checkbox       |
/// | `scen_comparison`                        | [`scen_comp_bar`]                               |
/// | `state_deviation`                        | y-axis scale                                    |
/// | `trend_map`                              | model, ensemble checkbox, week slider           |
/// | `model_distribution`                     | ensemble checkbox, outcome type, week           |
/// | `multipat_plot`                          | [`multi_pathogen_bar`] with the first pathogen  |
/// | `multipat_plot_comb`, `multipat_plot_comb1` | [`multi_pathogen_bar_comp`]                  |
/// | `spaghetti`, `spaghetti_disp`            | [`spaghetti_bar`]                               |
/// | `heatmap`                                | [`heatmap_bar`]                                 |
/// | `sample_peak`                            | [`sample_peak_bar`]                             |
/// | `peak_time_model`                        | model, hidden checkbox, location order          |
///
/// Any other tab gets an empty bar.
pub fn make_plot_bar(config: &PlotBarConfig, tab: &PlotTab) -> Result<Element> {
    let children: Vec<Element> = match tab {
        PlotTab::Scenario | PlotTab::ScenarioDisp => vec![checkbox(config)],
        PlotTab::ModelSpecific | PlotTab::ModelDisp => {
            vec![target_type_radio(config), model_dropdown(config), checkbox(config)]
        }
        PlotTab::ScenSampleComp => {
            let radio_type_target = make_radio_items(
                "Type",
                "comp-type-radio",
                vec![SelectOption::new("Absolute", "abs"), SelectOption::new("Relative", "rel")],
                "abs",
            )
            .class_name(&config.css_sel)
            .inline(config.inline_radio)
            .build();
            vec![radio_type_target, checkbox(config)]
        }
        PlotTab::ScenComparison => vec![scen_comp_bar(config)?],
        PlotTab::StateDeviation => {
            let radio_yaxis = make_radio_items(
                "Y-axis Scale",
                "yaxis-scale-radio",
                vec![SelectOption::new("Linear", "linear"), SelectOption::new("Log", "log")],
                "linear",
            )
            .class_name(&config.css_sel)
            .inline(config.inline_radio)
            .build();
            vec![radio_yaxis]
        }
        PlotTab::TrendMap => {
            let week_slider = make_slider(
                "Wks to Show Beyond Observed Data",
                "week-slider",
                6,
                config.max_horizon,
                4,
            )
            .class_name(&config.css_sel)
            .tooltip(config.tooltip.clone())
            .build();
            vec![model_dropdown(config), checkbox(config), week_slider]
        }
        PlotTab::ModelDistribution => {
            vec![checkbox(config), target_type_radio(config), week_radio(config)]
        }
        PlotTab::MultipatPlot => {
            let other = config
                .other_pathogen
                .first()
                .ok_or(LayoutError::MissingOtherPathogen)?;
            vec![multi_pathogen_bar(&config.pathogen, other, config)]
        }
        PlotTab::MultipatPlotComb | PlotTab::MultipatPlotComb1 => {
            vec![multi_pathogen_bar_comp(&config.pathogen, &config.other_pathogen, config)?]
        }
        PlotTab::Spaghetti | PlotTab::SpaghettiDisp => {
            let traj_model_id = if tab.is_disp() { "t_disp_model_check" } else { "t_model_check" };
            vec![spaghetti_bar(config, traj_model_id)]
        }
        PlotTab::Heatmap => {
            vec![heatmap_bar(model_dropdown(config), &config.scen_choice, config.hide_ens, config)?]
        }
        PlotTab::SamplePeak => vec![sample_peak_bar(config)?],
        PlotTab::PeakTimeModel => {
            let checkbox_hide = make_checkbox(
                "",
                "ensemble-checkbox",
                vec![SelectOption::new("", "False")],
            )
            .hide(true)
            .style(Style::new())
            .build();
            vec![
                model_dropdown(config),
                checkbox_hide,
                location_order_radio(&config.css_h_radio),
            ]
        }
        PlotTab::Other(name) => {
            warn!("No filter bar for plot tab '{}'", name);
            Vec::new()
        }
    };

    debug!("Plot bar for tab {} has {} parts", tab, children.len());
    Ok(Element::div().children(children).class_name("plot_bar"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashdom::{collect_ids, find_element};
    use serde_json::Value;

    #[test]
    fn test_unknown_tab_empty() {
        let bar = make_plot_bar(&PlotBarConfig::default(), &PlotTab::parse("violin")).unwrap();
        assert_eq!(bar.child_elements().count(), 0);
        assert_eq!(bar.class_name.as_deref(), Some("plot_bar"));
    }

    #[test]
    fn test_scenario_checkbox_only() {
        let bar = make_plot_bar(&PlotBarConfig::default(), &PlotTab::Scenario).unwrap();
        assert_eq!(collect_ids(&bar), vec!["ensemble-checkbox"]);
        // hide_ens defaults to true
        assert!(bar.child_elements().next().unwrap().hidden);
    }

    #[test]
    fn test_checkbox_style_override() {
        let default_bar = make_plot_bar(&PlotBarConfig::default(), &PlotTab::ScenarioDisp).unwrap();
        let container = default_bar.child_elements().next().unwrap().child_elements().next().unwrap();
        assert_eq!(container.style, Some(crate::widgets::default_checkbox_style()));

        let config = PlotBarConfig {
            hide_ens: false,
            style_checkbox: Some(Style::new().width("40%")),
            ..Default::default()
        };
        let bar = make_plot_bar(&config, &PlotTab::ScenarioDisp).unwrap();
        let container = bar.child_elements().next().unwrap();
        assert!(!container.hidden);
        assert_eq!(container.style, Some(Style::new().width("40%")));
    }

    #[test]
    fn test_model_distribution_week() {
        let bar = make_plot_bar(&PlotBarConfig::default(), &PlotTab::ModelDistribution).unwrap();
        let radio = find_element(&bar, "week-radio").unwrap();
        assert_eq!(radio.get_prop("value"), Some(&Value::from(13.0)));
        let labels: Vec<String> = radio.get_options().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["13.0", "26"]);
    }

    #[test]
    fn test_spaghetti_disp_model_id() {
        let config = PlotBarConfig {
            traj_by_model: true,
            ..Default::default()
        };
        let bar = make_plot_bar(&config, &PlotTab::SpaghettiDisp).unwrap();
        assert!(find_element(&bar, "t_disp_model_check").is_some());
        let bar = make_plot_bar(&config, &PlotTab::Spaghetti).unwrap();
        assert!(find_element(&bar, "t_model_check").is_some());
    }

    #[test]
    fn test_custom_model_dropdown_id() {
        let config = PlotBarConfig {
            mod_drop_id: "model_dropdown_disp".to_string(),
            val_default: "Ensemble_LOP".to_string(),
            ..Default::default()
        };
        let bar = make_plot_bar(&config, &PlotTab::ModelDisp).unwrap();
        let drop = find_element(&bar, "model_dropdown_disp").unwrap();
        assert_eq!(drop.get_prop("value"), Some(&Value::from("Ensemble_LOP")));
    }

    #[test]
    fn test_multipat_without_pathogen_fails() {
        let err = make_plot_bar(&PlotBarConfig::default(), &PlotTab::MultipatPlot).unwrap_err();
        assert!(matches!(err, LayoutError::MissingOtherPathogen));
    }
}
