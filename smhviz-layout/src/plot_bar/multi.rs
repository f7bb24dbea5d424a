//! Multi-pathogen filter bars.

use dashdom::{Element, SelectOption, Style};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PlotBarConfig;
use crate::error::{LayoutError, Result};
use crate::widgets::{make_checkbox, make_dropdown, make_radio_items};

/// Scenario ids and names of another pathogen's round, index aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathogenScenarios {
    pub id: Vec<String>,
    pub name: Vec<String>,
}

impl PathogenScenarios {
    fn options(&self) -> Vec<SelectOption> {
        SelectOption::from_pairs(self.id.iter().zip(&self.name))
    }
}

/// Another pathogen shown alongside the hub's own projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherPathogen {
    pub name: String,
    /// Round of the other hub used for the combination.
    pub round_int: u32,
    /// Website of the other hub.
    pub website: String,
    /// Scenario id(s) selected by default.
    pub default_sel: Vec<String>,
    pub scenario: PathogenScenarios,
}

impl OtherPathogen {
    fn selection_title(&self) -> String {
        format!("{} Round {} Scenario Selection:", self.name, self.round_int)
    }
}

fn default_bar_style() -> Style {
    Style::new().width("100%").display("flex")
}

fn default_note_style() -> Style {
    Style::new().margin_left("5%").width("95%")
}

fn quantile_options(quantiles: &[f64]) -> Vec<SelectOption> {
    SelectOption::plain_list(quantiles.iter().copied())
}

/// Notes below a multi-pathogen plot, linking to the other hubs.
pub fn multi_pathogen_notes(
    pathogen: &str,
    other_names: &[String],
    websites: &[String],
    style: Option<Style>,
    ensemble: bool,
) -> Element {
    let other_name = other_names.join(", ");
    let ensemble = if ensemble { "ensemble " } else { "" };

    let link = |i: usize, href: &str| {
        let name = other_names.get(i).map(String::as_str).unwrap_or_default();
        Element::a(format!("{name} Scenario Modeling Hub Website"))
            .prop("target", "blank")
            .prop("href", href)
    };
    let mut links = Element::span();
    for (i, href) in websites.iter().enumerate() {
        let web = link(i, href);
        links = if i + 1 < websites.len() {
            links.child(Element::span().child(web).child(", "))
        } else {
            links.child(web)
        };
    }

    let text = format!(
        "These projections were produced by combining separate multi-model {ensemble}projections of \
         {pathogen}, {other_name}. We do not account for any interaction between these diseases, which \
         could include behavioral or immunological interactions that might modify the impacts of one or \
         more of these viruses. For more information on {other_name} projections and scenarios, please \
         consult the "
    );

    Element::div()
        .child(
            Element::p(text)
                .child(links)
                .child(Element::span().text(".")),
        )
        .style(style.unwrap_or_else(default_note_style))
}

/// Bar comparing the hub's projections with a single other pathogen.
///
/// Holds a quantile dropdown per pathogen (`<pathogen>-quantile_dropdown`,
/// `other-quantile_dropdown`) around a radio group of the other pathogen's
/// scenarios (`other-scenario`), followed by the notes.
pub fn multi_pathogen_bar(pathogen: &str, other: &OtherPathogen, config: &PlotBarConfig) -> Element {
    let default_sel = other
        .default_sel
        .first()
        .map_or(Value::Null, |s| Value::from(s.as_str()));

    let bar = Element::div()
        .child(
            make_dropdown(
                format!("{pathogen} Quantile"),
                format!("{}-quantile_dropdown", pathogen.to_lowercase()),
                quantile_options(&config.quant_opt),
                config.sel_quant,
            )
            .clearable(config.clearable)
            .class_name(&config.css_sel)
            .build(),
        )
        .child(
            make_radio_items(other.selection_title(), "other-scenario", other.scenario.options(), default_sel)
                .class_name(&config.css_multi_radio)
                .build(),
        )
        .child(
            make_dropdown(
                format!("{} Quantile", other.name),
                "other-quantile_dropdown",
                quantile_options(&config.quant_opt),
                config.sel_quant,
            )
            .clearable(config.clearable)
            .class_name(&config.css_sel)
            .build(),
        )
        .style(config.multi_bar_style.clone().unwrap_or_else(default_bar_style));

    let notes = multi_pathogen_notes(
        pathogen,
        std::slice::from_ref(&other.name),
        std::slice::from_ref(&other.website),
        config.multi_note_style.clone(),
        true,
    );
    Element::div().child(bar).child(notes)
}

/// Column width in percent; halves round to the even neighbour (99 / 6 gives 16).
fn column_width(count: usize) -> i64 {
    (99.0 / count as f64).round_ties_even() as i64
}

/// Bar combining several other pathogens, one scenario checklist each
/// (`other-scenario_<name>`), followed by the notes.
pub fn multi_pathogen_bar_comp(pathogen: &str, others: &[OtherPathogen], config: &PlotBarConfig) -> Result<Element> {
    if others.is_empty() {
        return Err(LayoutError::MissingOtherPathogen);
    }
    let width = column_width(others.len());

    let checkboxes = others.iter().map(|other| {
        let default_sel: Vec<Value> = other.default_sel.iter().map(|s| Value::from(s.as_str())).collect();
        make_checkbox(
            other.selection_title(),
            format!("other-scenario_{}", other.name.to_lowercase()),
            other.scenario.options(),
        )
        .value(default_sel)
        .style(
            Style::new()
                .display("inline-block")
                .margin_left("5%")
                .width(&format!("{width}%")),
        )
        .check_style(Style::new().display("inline-grid"))
        .build()
    });
    let bar = Element::div()
        .children(checkboxes)
        .style(config.multi_bar_style.clone().unwrap_or_else(default_bar_style));

    let names: Vec<String> = others.iter().map(|o| o.name.clone()).collect();
    let websites: Vec<String> = others.iter().map(|o| o.website.clone()).collect();
    let notes = multi_pathogen_notes(pathogen, &names, &websites, config.multi_note_style.clone(), false);

    Ok(Element::div().child(bar).child(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashdom::find_element;

    fn flu() -> OtherPathogen {
        OtherPathogen {
            name: "Flu".to_string(),
            round_int: 4,
            website: "https://fluscenariomodelinghub.org".to_string(),
            default_sel: vec!["A-2023-08-14".to_string()],
            scenario: PathogenScenarios {
                id: vec!["A-2023-08-14".to_string(), "B-2023-08-14".to_string()],
                name: vec!["High vaccine".to_string(), "Low vaccine".to_string()],
            },
        }
    }

    #[test]
    fn test_column_width_rounds_half_even() {
        assert_eq!(column_width(1), 99);
        assert_eq!(column_width(2), 50);
        assert_eq!(column_width(4), 25);
        assert_eq!(column_width(6), 16);
    }

    #[test]
    fn test_notes_single_link() {
        let notes = multi_pathogen_notes(
            "COVID-19",
            &["Flu".to_string()],
            &["https://flu.example".to_string()],
            None,
            true,
        );
        let text = notes.text_content();
        assert!(text.contains("multi-model ensemble projections of COVID-19, Flu."));
        assert!(text.contains("Flu Scenario Modeling Hub Website."));
        assert_eq!(notes.style, Some(default_note_style()));
    }

    #[test]
    fn test_notes_multiple_links_separated() {
        let notes = multi_pathogen_notes(
            "COVID-19",
            &["Flu".to_string(), "RSV".to_string()],
            &["https://flu.example".to_string(), "https://rsv.example".to_string()],
            None,
            false,
        );
        let text = notes.text_content();
        assert!(text.contains("multi-model projections of COVID-19, Flu, RSV."));
        assert!(text.contains("Flu Scenario Modeling Hub Website, RSV Scenario Modeling Hub Website."));
    }

    #[test]
    fn test_multi_bar_ids() {
        let bar = multi_pathogen_bar("COVID-19", &flu(), &PlotBarConfig::default());
        assert!(find_element(&bar, "covid-19-quantile_dropdown").is_some());
        assert!(find_element(&bar, "other-quantile_dropdown").is_some());
        let radio = find_element(&bar, "other-scenario").unwrap();
        assert_eq!(radio.get_prop("value"), Some(&Value::from("A-2023-08-14")));
        assert_eq!(radio.get_options()[1].label, "Low vaccine");
    }

    #[test]
    fn test_multi_bar_comp_requires_pathogen() {
        let err = multi_pathogen_bar_comp("COVID-19", &[], &PlotBarConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::MissingOtherPathogen));
    }

    #[test]
    fn test_multi_bar_comp_checkbox_per_pathogen() {
        let mut rsv = flu();
        rsv.name = "RSV".to_string();
        let bar = multi_pathogen_bar_comp("COVID-19", &[flu(), rsv], &PlotBarConfig::default()).unwrap();
        let flu_check = find_element(&bar, "other-scenario_flu").unwrap();
        assert_eq!(flu_check.get_prop("value"), Some(&serde_json::json!(["A-2023-08-14"])));
        assert!(find_element(&bar, "other-scenario_rsv").is_some());
    }
}
