//! Plot and round tab bars.

use std::collections::BTreeMap;

use dashdom::Element;
use log::warn;

use crate::config::TabCss;
use crate::error::{LayoutError, Result};

/// Build the plot tab bar (`tabs-plot`) and the plot content placeholder.
///
/// Without a plot list the tab set is empty and `show` is displayed in
/// `plot_tabs_content` instead. Otherwise every plot id becomes a tab
/// labelled from `tab_names`, `plot_sel` (or the first plot) is selected and
/// the content goes to `plot_tabs-content`.
pub fn make_tab_plots(
    sel_plot: Option<&[String]>,
    tab_names: &BTreeMap<String, String>,
    show: Option<&str>,
    plot_sel: Option<&str>,
    css: &TabCss,
) -> Result<Element> {
    let tabs = Element::tabs()
        .id("tabs-plot")
        .prop("parent_className", css.plot_tabs.as_str())
        .class_name(&css.plot_tabs_container);

    let Some(sel_plot) = sel_plot else {
        let content = Element::div().id("plot_tabs_content");
        let content = match show {
            Some(show) => content.text(show),
            None => content,
        };
        return Ok(Element::div()
            .child(tabs.prop("children", Vec::<serde_json::Value>::new()))
            .child(Element::br())
            .child(content)
            .class_name(&css.right_sidebar));
    };

    let first = sel_plot.first().ok_or(LayoutError::EmptyList("plot tab"))?;
    let plot_tabs = sel_plot.iter().map(|id| {
        let label = tab_names.get(id).cloned().unwrap_or_else(|| {
            warn!("No label for plot tab '{}'", id);
            id.clone()
        });
        Element::tab()
            .label(label)
            .value(id.as_str())
            .class_name(&css.plot_tab)
            .prop("selected_className", css.plot_tab_sel.as_str())
    });

    Ok(Element::div()
        .child(
            tabs.value(plot_sel.unwrap_or(first.as_str()))
                .children(plot_tabs),
        )
        .child(Element::div().id("plot_tabs-content"))
        .class_name(&css.right_sidebar))
}

/// One tab per round label (e.g. "Round 1").
pub fn make_round_tab(rounds: &[String], css: &TabCss) -> Vec<Element> {
    rounds
        .iter()
        .map(|round| {
            Element::tab()
                .label(round.as_str())
                .value(round.as_str())
                .class_name(&css.round_tab)
                .prop("selected_className", css.round_tab_sel.as_str())
        })
        .collect()
}
