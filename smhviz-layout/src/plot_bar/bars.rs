//! Plot specific filter bars with more than a couple of widgets.

use dashdom::{Element, SelectOption, Style};
use serde_json::{Map, Value};

use crate::config::PlotBarConfig;
use crate::error::{LayoutError, Result};
use crate::widgets::{make_checkbox, make_dropdown, make_radio_items, make_slider};

/// Checkbox adding the additional ensembles to the model dropdown.
pub(crate) fn ensemble_checkbox(value: &str, hide: bool) -> crate::widgets::Checkbox {
    make_checkbox(
        "",
        "ensemble-checkbox",
        vec![SelectOption::new("Show Additional Ensemble", value)],
    )
    .hide(hide)
}

/// Alphabetical / geographical ordering of the location axis.
pub(crate) fn location_order_radio(class_name: &str) -> Element {
    make_radio_items(
        "Location Order",
        "order_heatmap",
        SelectOption::plain_list(["Alphabetical", "Geographical"]),
        "Geographical",
    )
    .inline(true)
    .class_name(class_name)
    .build()
}

/// Scenario comparison bar.
///
/// The week slider (`week-slider`, weeks 1 to `max_horizon`) is shown only
/// with `sc_sidebar_option`; the panel radio group (`multi-ref`, first panel
/// selected) only with `sc_multi_panel`. Hidden parts stay in the tree.
pub fn scen_comp_bar(config: &PlotBarConfig) -> Result<Element> {
    let first_panel = config
        .sc_panel_name
        .first()
        .ok_or(LayoutError::EmptyList("panel name"))?;
    let radio_style = config.radio_comp_style.clone().unwrap_or_else(|| {
        Style::new()
            .display("inline-block")
            .margin_left("5%")
            .width("45%")
    });

    let mut week_slider = make_slider(
        "Cumulative Starting From Projection Week:",
        "week-slider",
        1,
        config.max_horizon,
        4,
    )
    .class_name(&config.css_sel)
    .tooltip(config.tooltip.clone())
    .build();
    let mut panel_choice = Element::div()
        .child(Element::br())
        .child(
            Element::radio_items()
                .id("multi-ref")
                .options(SelectOption::plain_list(config.sc_panel_name.iter()))
                .value(first_panel.as_str()),
        )
        .style(radio_style);

    if !config.sc_sidebar_option {
        week_slider = Element::hidden_wrapper(week_slider);
    }
    if !config.sc_multi_panel {
        panel_choice = Element::hidden_wrapper(panel_choice);
    }

    Ok(Element::div()
        .child(week_slider)
        .child(panel_choice)
        .style(Style::new().width("100%")))
}

/// Individual trajectories bar.
///
/// A trajectory count slider (`sample-slider`) with a performance note, the
/// "Show Median" checklist (`median-checkbox`, hidden unless `check_med`)
/// and, with `traj_by_model`, an initially empty team-model checklist.
pub fn spaghetti_bar(config: &PlotBarConfig, traj_model_id: &str) -> Element {
    let slider_style = config.traj_slider_style.clone().unwrap_or_else(|| {
        Style::new()
            .display("inline-block")
            .margin_left("5%")
            .width("60%")
    });

    let traj_slider = Element::div()
        .child(Element::p("Number of Trajectories to plot"))
        .child(Element::div().text(
            "The performance of the website might be impacted negatively by the selection of high \
             number of trajectories to plot",
        ))
        .child(Element::br())
        .child(
            Element::slider()
                .prop("min", config.traj_min)
                .prop("max", config.traj_max)
                .prop("step", config.traj_step)
                .value(config.traj_step)
                .id("sample-slider"),
        )
        .style(slider_style);

    let check_med = Element::div()
        .child(
            Element::checklist()
                .id("median-checkbox")
                .options([SelectOption::new("Show Median", true)]),
        )
        .class_name(&config.css_sel)
        .hidden(!config.check_med);

    let model_checkbox = config.traj_by_model.then(|| {
        let mut label_style = Map::new();
        label_style.insert("padding-right".to_string(), Value::from(10));
        Element::div()
            .child(Element::p("Select Team-Model to include in the plot:"))
            .child(
                Element::checklist()
                    .id(traj_model_id)
                    .options(Vec::new())
                    .style(Style::new().display("inline-flex"))
                    .prop("labelStyle", Value::Object(label_style)),
            )
            .style(
                Style::new()
                    .display("inline-block")
                    .margin_left("5%")
                    .width("95%"),
            )
    });

    Element::div()
        .child(traj_slider)
        .child(check_med)
        .maybe_child(model_checkbox)
}

/// Heatmap (spatiotemporal waves) bar.
///
/// First line: model dropdown, additional ensemble checkbox, location order
/// and standardization approach. Second line, unavailable for the observed
/// data: comparison scenario (`scenario2-dropdown`, second scenario selected,
/// always clearable) and quantile.
pub fn heatmap_bar(model_sel: Element, scen_choice: &[String], hide_ens: bool, config: &PlotBarConfig) -> Result<Element> {
    if scen_choice.len() < 2 {
        return Err(LayoutError::NotEnoughScenarios {
            needed: 2,
            found: scen_choice.len(),
        });
    }
    let first_method = config
        .method_list
        .first()
        .ok_or(LayoutError::EmptyList("method"))?;

    let checkbox = ensemble_checkbox("True", hide_ens)
        .style(
            Style::new()
                .display("inline-block")
                .margin_left("5%")
                .width("15%"),
        )
        .build();
    let quant_drop = make_dropdown(
        "Quantile",
        "heatmap-quantile_dropdown",
        SelectOption::plain_list(config.quant_opt.iter().copied()),
        config.sel_quant,
    )
    .clearable(config.clearable)
    .class_name(&config.css_sel)
    .build();
    let scenario_sel2 = make_dropdown(
        "Comparison Scenario",
        "scenario2-dropdown",
        SelectOption::plain_list(scen_choice.iter()),
        scen_choice[1].as_str(),
    )
    .clearable(true)
    .build();
    let order_radio = location_order_radio(&config.css_h_radio);
    let method_dropdown = make_dropdown(
        "Standardization Approach",
        "method_dropdown",
        SelectOption::plain_list(config.method_list.iter()),
        first_method.as_str(),
    )
    .class_name(&config.css_h_drop)
    .clearable(config.clearable)
    .build();

    let style = config
        .heatmap_style
        .clone()
        .unwrap_or_else(|| Style::new().display("inline-block").width("100%"));

    Ok(Element::div()
        .child(
            Element::div()
                .children([model_sel, checkbox, order_radio, method_dropdown])
                .class_name(&config.css_bar_plot),
        )
        .child(Element::br())
        .child(
            Element::div()
                .text("Following options are not available for the model 'Ground Truth':")
                .style(Style::new().margin_left("5%")),
        )
        .child(
            Element::div()
                .children([scenario_sel2, quant_drop])
                .class_name(&config.css_bar_plot),
        )
        .style(style))
}

/// Peak bar: the peak ensemble model, the time frame (first one selected)
/// and a hidden, unchecked additional ensemble checkbox.
pub fn sample_peak_bar(config: &PlotBarConfig) -> Result<Element> {
    let first_tf = config
        .tf_options
        .first()
        .ok_or(LayoutError::EmptyList("time frame"))?;

    let model_tf_sel = make_dropdown(
        "Model",
        "model_dropdown",
        vec![SelectOption::new("Ensemble", "ensemble")],
        "ensemble",
    )
    .class_name(&config.css_sel)
    .clearable(config.clearable)
    .build();
    let tf_drop = make_dropdown(
        "Time Frame",
        "tf_dropdown",
        SelectOption::plain_list(config.tf_options.iter()),
        first_tf.as_str(),
    )
    .class_name(&config.css_sel)
    .clearable(config.clearable)
    .build();
    let checkbox = ensemble_checkbox("False", true).style(Style::new()).build();

    Ok(Element::div()
        .child(
            Element::div()
                .children([model_tf_sel, tf_drop])
                .class_name(&config.css_bar_plot),
        )
        .child(Element::div().child(checkbox))
        .class_name("plot_bar"))
}
