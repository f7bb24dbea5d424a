use std::fs;
use std::path::PathBuf;

use dashdom::{find_element, find_kind, to_value, Kind};
use serde_json::json;
use smhviz_layout::{make_abstract_tab, make_dt_metadata, render_abstract, LayoutError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

// ============================================================================
// Abstracts
// ============================================================================

#[test]
fn test_render_abstract_capitalized() {
    let abstracts = fixture("model_abstracts");
    let el = render_abstract("13", "2022-03-13", "JHU_IDD-CovidSP", &abstracts).unwrap();
    let expected = fs::read_to_string(abstracts.join("round13/2022-03-13-JHU_IDD-CovidSP-Abstract.md")).unwrap();

    let markdown = find_kind(&el, Kind::Markdown);
    assert_eq!(markdown.len(), 1);
    assert_eq!(markdown[0].text_content(), expected);
}

#[test]
fn test_render_abstract_lowercase_fallback() {
    let abstracts = fixture("model_abstracts");
    let el = render_abstract("13", "2022-03-13", "MOBS_NEU-GLEAM_COVID", &abstracts).unwrap();
    let expected = fs::read_to_string(abstracts.join("round13/2022-03-13-MOBS_NEU-GLEAM_COVID-abstract.md")).unwrap();

    let v = to_value(&el);
    assert_eq!(v["props"]["children"]["type"], "Markdown");
    assert_eq!(v["props"]["children"]["props"]["children"], json!(expected));
}

#[test]
fn test_render_abstract_missing() {
    let err = render_abstract("13", "2022-03-13", "NoTeam-NoModel", fixture("model_abstracts")).unwrap_err();
    let LayoutError::AbstractNotFound { tried } = &err else {
        panic!("unexpected error {err:?}");
    };
    assert_eq!(tried.len(), 2);
    assert!(err.to_string().contains("NoTeam-NoModel-Abstract.md"));
    assert!(err.to_string().contains("NoTeam-NoModel-abstract.md"));
}

#[test]
fn test_abstract_tab_lists_team_models() {
    let tab = make_abstract_tab("13", fixture("model_abstracts")).unwrap();
    let dropdown = find_element(&tab, "abstract-dropdown").unwrap();
    let names: Vec<String> = dropdown.get_options().into_iter().map(|o| o.label).collect();
    assert_eq!(names, vec!["JHU_IDD-CovidSP", "MOBS_NEU-GLEAM_COVID", "USC-SIkJalpha"]);
    assert_eq!(dropdown.get_prop("value"), Some(&json!("JHU_IDD-CovidSP")));
    assert_eq!(dropdown.get_prop("clearable"), Some(&json!(false)));
    assert!(find_element(&tab, "abstract-output").is_some());
}

#[test]
fn test_abstract_tab_unknown_round() {
    let err = make_abstract_tab("1", fixture("model_abstracts")).unwrap_err();
    assert!(matches!(err, LayoutError::Data(_)));
}

// ============================================================================
// Metadata table
// ============================================================================

#[test]
fn test_metadata_table() {
    let table = make_dt_metadata(fixture("metadata.csv")).unwrap();
    assert_eq!(table.kind, Kind::DataTable);

    let v = to_value(&table);
    assert_eq!(v["namespace"], "dash_table");
    let props = &v["props"];
    assert_eq!(props["columns"][0], json!({"name": "Team", "id": "Team"}));
    assert_eq!(props["columns"].as_array().unwrap().len(), 4);

    let data = props["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["Model"], "CovidSP");
    // the column also holds 0.5, so every number is a float
    assert_eq!(data[0]["Designated"], 1.0);
    assert_eq!(data[1]["Designated"], 0.5);
    assert!(data[2]["Designated"].is_null());

    assert_eq!(props["style_cell"], json!({"textAlign": "center", "padding": "7px"}));
    assert_eq!(
        props["style_cell_conditional"],
        json!([{"if": {"column_id": "Description"}, "textAlign": "left"}])
    );
}

#[test]
fn test_metadata_column_types() {
    let table = make_dt_metadata(fixture("metadata_types.csv")).unwrap();
    let v = to_value(&table);
    assert_eq!(
        v["props"]["data"],
        json!([
            {"Team": "  JHU ", "Code": "007", "Flag": true, "Horizon": 12},
            {"Team": "MOBS", "Code": "abc", "Flag": false, "Horizon": 26}
        ])
    );
}

#[test]
fn test_metadata_missing_file() {
    let err = make_dt_metadata(fixture("missing.csv")).unwrap_err();
    assert!(matches!(err, LayoutError::Data(_)));
}
