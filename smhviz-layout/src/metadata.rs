//! Model metadata table and the per round model abstracts.

use std::fs;
use std::path::{Path, PathBuf};

use dashdom::{Element, SelectOption};
use log::{debug, warn};
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::error::{DataError, LayoutError, Result};

const ABSTRACT_NAME_PATTERN: &str = r"\d{4}-\d{2}-\d{2}-|-(A|a)bstract\.md";

/// Type shared by every cell of a metadata column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Int,
    Float,
    Bool,
    Text,
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.trim() {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

impl ColumnType {
    /// Narrowest type every non-empty cell parses as: integer, then float,
    /// then boolean, text otherwise. An integer column with empty cells is a
    /// float column.
    fn infer<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> Self {
        let filled = cells.clone().filter(|c| !c.is_empty()).map(str::trim);
        let has_empty = cells.clone().any(str::is_empty);

        if filled.clone().all(|c| c.parse::<i64>().is_ok()) {
            if has_empty { Self::Float } else { Self::Int }
        } else if filled.clone().all(|c| c.parse::<f64>().is_ok()) {
            Self::Float
        } else if filled.clone().all(|c| parse_bool(c).is_some()) {
            Self::Bool
        } else {
            Self::Text
        }
    }

    /// Empty cells and non-finite floats become null; text is kept as written.
    fn value(self, cell: &str) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }
        let parsed = match self {
            Self::Int => cell.trim().parse::<i64>().ok().map(Value::from),
            Self::Float => cell
                .trim()
                .parse::<f64>()
                .ok()
                .map(|f| serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)),
            Self::Bool => parse_bool(cell).map(Value::Bool),
            Self::Text => None,
        };
        parsed.unwrap_or_else(|| Value::from(cell))
    }
}

/// Read a metadata CSV into a `DataTable` with one column per header.
///
/// Each column gets a single type inferred from all of its cells. Cells
/// wrap, are centered and padded; the `Description` column is left aligned.
pub fn make_dt_metadata(metadata_file: impl AsRef<Path>) -> Result<Element> {
    let path = metadata_file.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| DataError::csv(path, e))?;
    let headers = reader.headers().map_err(|e| DataError::csv(path, e))?.clone();
    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| DataError::csv(path, e))?;

    let types: Vec<ColumnType> = (0..headers.len())
        .map(|i| ColumnType::infer(records.iter().map(move |r| r.get(i).unwrap_or_default())))
        .collect();

    let data: Vec<Value> = records
        .iter()
        .map(|record| {
            let row: Map<String, Value> = headers
                .iter()
                .zip(record.iter())
                .zip(&types)
                .map(|((header, cell), ty)| (header.to_string(), ty.value(cell)))
                .collect();
            Value::Object(row)
        })
        .collect();
    debug!("Loaded {} metadata rows from {} ({:?})", data.len(), path.display(), types);

    let columns: Vec<Value> = headers
        .iter()
        .map(|h| json!({"name": h, "id": h}))
        .collect();

    Ok(Element::data_table()
        .prop("data", data)
        .prop("columns", columns)
        .prop("style_data", json!({"whiteSpace": "normal", "height": "auto"}))
        .prop("style_cell", json!({"textAlign": "center", "padding": "7px"}))
        .prop(
            "style_cell_conditional",
            json!([{"if": {"column_id": "Description"}, "textAlign": "left"}]),
        ))
}

fn round_dir(path: &Path, round: &str) -> PathBuf {
    path.join(format!("round{round}"))
}

/// Abstract page of a round: a dropdown (`abstract-dropdown`) of the team
/// model names found in `path/round<N>/`, first one selected, followed by
/// the `abstract-output` placeholder.
pub fn make_abstract_tab(round: &str, path: impl AsRef<Path>) -> Result<Element> {
    let dir = round_dir(path.as_ref(), round);
    let pattern = Regex::new(ABSTRACT_NAME_PATTERN).map_err(|source| LayoutError::InvalidPattern {
        pattern: ABSTRACT_NAME_PATTERN.to_string(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| DataError::io(&dir, e))? {
        let entry = entry.map_err(|e| DataError::io(&dir, e))?;
        if entry.path().is_dir() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        names.push(pattern.replace_all(&file_name, "").into_owned());
    }
    names.sort();

    let first = names.first().cloned().ok_or_else(|| LayoutError::NoAbstracts(dir.clone()))?;
    debug!("Found {} abstracts in {}", names.len(), dir.display());

    Ok(Element::div()
        .child(
            Element::dropdown()
                .id("abstract-dropdown")
                .clearable(false)
                .options(SelectOption::plain_list(names))
                .value(first),
        )
        .child(Element::br())
        .child(Element::div().id("abstract-output")))
}

/// Render the abstract `path/round<N>/<date>-<team_model>-Abstract.md`.
///
/// Falls back to the lowercase `-abstract.md` file. The markdown is passed
/// through unchanged.
pub fn render_abstract(round: &str, round_date: &str, team_model: &str, path: impl AsRef<Path>) -> Result<Element> {
    let dir = round_dir(path.as_ref(), round);
    let upper = dir.join(format!("{round_date}-{team_model}-Abstract.md"));
    let lower = dir.join(format!("{round_date}-{team_model}-abstract.md"));

    let file = if upper.is_file() {
        upper
    } else if lower.is_file() {
        warn!("{} missing, using {}", upper.display(), lower.display());
        lower
    } else {
        return Err(LayoutError::AbstractNotFound {
            tried: vec![upper, lower],
        });
    };

    let markdown = fs::read_to_string(&file).map_err(|e| DataError::io(&file, e))?;
    debug!("Read abstract {} ({} bytes)", file.display(), markdown.len());
    Ok(Element::div().child(Element::markdown(markdown)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(cells: &[&str]) -> ColumnType {
        ColumnType::infer(cells.iter().copied())
    }

    #[test]
    fn test_column_type_inference() {
        assert_eq!(infer(&["1", "2"]), ColumnType::Int);
        assert_eq!(infer(&["1", ""]), ColumnType::Float);
        assert_eq!(infer(&["1", "0.5"]), ColumnType::Float);
        assert_eq!(infer(&["True", "False", ""]), ColumnType::Bool);
        assert_eq!(infer(&["007", "abc"]), ColumnType::Text);
        assert_eq!(infer(&["", ""]), ColumnType::Float);
        assert_eq!(infer(&[" 7", "8 "]), ColumnType::Int);
        assert_eq!(infer(&["1", " "]), ColumnType::Text);
    }

    #[test]
    fn test_column_values() {
        assert_eq!(ColumnType::Int.value("12"), Value::from(12));
        assert_eq!(ColumnType::Float.value("1"), Value::from(1.0));
        assert_eq!(ColumnType::Bool.value("True"), Value::Bool(true));
        assert_eq!(ColumnType::Text.value("007"), Value::from("007"));
        assert_eq!(ColumnType::Text.value("  JHU "), Value::from("  JHU "));
        assert_eq!(ColumnType::Text.value(" "), Value::from(" "));
        assert_eq!(ColumnType::Text.value(""), Value::Null);
        assert_eq!(ColumnType::Float.value("NaN"), Value::Null);
    }

    #[test]
    fn test_abstract_name_pattern() {
        let re = Regex::new(ABSTRACT_NAME_PATTERN).unwrap();
        assert_eq!(re.replace_all("2022-03-13-JHU_IDD-CovidSP-Abstract.md", ""), "JHU_IDD-CovidSP");
        assert_eq!(re.replace_all("2022-03-13-MOBS_NEU-GLEAM_COVID-abstract.md", ""), "MOBS_NEU-GLEAM_COVID");
    }

    #[test]
    fn test_missing_abstract_lists_both_paths() {
        let err = render_abstract("99", "2022-01-01", "team-model", "/nonexistent").unwrap_err();
        match err {
            LayoutError::AbstractNotFound { tried } => {
                assert_eq!(tried.len(), 2);
                assert!(tried[0].ends_with("round99/2022-01-01-team-model-Abstract.md"));
                assert!(tried[1].ends_with("round99/2022-01-01-team-model-abstract.md"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_round_dir_is_io_error() {
        let err = make_abstract_tab("99", "/nonexistent").unwrap_err();
        assert!(matches!(err, LayoutError::Data(ref e) if e.is_not_found()));
    }
}
