use dashdom::collect_ids;
use smhviz_layout::{make_plot_bar, LayoutConfig, PlotTab};

fn config() -> LayoutConfig {
    LayoutConfig::from_json(
        r#"{
            "plot_bar": {
                "pathogen": "COVID-19",
                "sc_panel_name": ["Scenario A", "Scenario B"],
                "scen_choice": ["A-2023-04-16", "B-2023-04-16", "C-2023-04-16"],
                "traj_by_model": true,
                "other_pathogen": [{
                    "name": "Flu",
                    "round_int": 4,
                    "website": "https://fluscenariomodelinghub.org",
                    "default_sel": ["A-2023-08-14"],
                    "scenario": {
                        "id": ["A-2023-08-14", "B-2023-08-14"],
                        "name": ["High vaccine", "Low vaccine"]
                    }
                }]
            }
        }"#,
    )
    .unwrap()
}

const EXPECTED: [(&str, &[&str]); 17] = [
    ("scenario", &["ensemble-checkbox"]),
    ("scenario_disp", &["ensemble-checkbox"]),
    ("model_specific", &["target_type-radio", "model_dropdown", "ensemble-checkbox"]),
    ("model_disp", &["target_type-radio", "model_dropdown", "ensemble-checkbox"]),
    ("scen_sample_comp", &["comp-type-radio", "ensemble-checkbox"]),
    ("scen_comparison", &["week-slider", "multi-ref"]),
    ("state_deviation", &["yaxis-scale-radio"]),
    ("trend_map", &["model_dropdown", "ensemble-checkbox", "week-slider"]),
    ("model_distribution", &["ensemble-checkbox", "target_type-radio", "week-radio"]),
    (
        "multipat_plot",
        &["covid-19-quantile_dropdown", "other-scenario", "other-quantile_dropdown"],
    ),
    ("multipat_plot_comb", &["other-scenario_flu"]),
    ("multipat_plot_comb1", &["other-scenario_flu"]),
    ("spaghetti", &["sample-slider", "median-checkbox", "t_model_check"]),
    ("spaghetti_disp", &["sample-slider", "median-checkbox", "t_disp_model_check"]),
    (
        "heatmap",
        &[
            "model_dropdown",
            "ensemble-checkbox",
            "order_heatmap",
            "method_dropdown",
            "scenario2-dropdown",
            "heatmap-quantile_dropdown",
        ],
    ),
    ("sample_peak", &["model_dropdown", "tf_dropdown", "ensemble-checkbox"]),
    ("peak_time_model", &["model_dropdown", "ensemble-checkbox", "order_heatmap"]),
];

#[test]
fn test_plot_bar_ids_per_tab() {
    let config = config();
    for (tab, ids) in EXPECTED {
        let bar = make_plot_bar(&config.plot_bar, &PlotTab::parse(tab)).unwrap();
        assert_eq!(collect_ids(&bar), ids, "{tab}");
        assert_eq!(bar.class_name.as_deref(), Some("plot_bar"), "{tab}");
    }
}

#[test]
fn test_unknown_tab_empty_bar() {
    let bar = make_plot_bar(&config().plot_bar, &PlotTab::parse("violin")).unwrap();
    assert!(collect_ids(&bar).is_empty());
    assert_eq!(bar.child_elements().count(), 0);
}

#[test]
fn test_plot_bar_renders_to_dash_json() {
    let bar = make_plot_bar(&config().plot_bar, &PlotTab::TrendMap).unwrap();
    let v = dashdom::to_value(&bar);
    assert_eq!(v["type"], "Div");
    assert_eq!(v["namespace"], "dash_html_components");
    let slider = &v["props"]["children"][2]["props"]["children"][1];
    assert_eq!(slider["type"], "Slider");
    assert_eq!(slider["namespace"], "dash_core_components");
    assert_eq!(slider["props"]["min"], 6);
    assert_eq!(slider["props"]["max"], 26);
    assert_eq!(slider["props"]["value"], 6);
}
