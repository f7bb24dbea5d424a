//! Scenario records and the per-round scenario file.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, LayoutError, Result};

/// One scenario of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario id as used in submission files (e.g. "A-2022-05-09").
    pub id: String,
    /// Human readable name.
    pub full_name: String,
    /// 1-based display position within the round.
    pub order: usize,
}

impl Scenario {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>, order: usize) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            order,
        }
    }

    /// Label shown next to the selector: the full name followed by the id.
    pub fn label(&self) -> String {
        format!("{} ({})", self.full_name, self.id)
    }
}

/// The ordered scenarios of one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Build a set from `(id, full name)` pairs; display order follows the input.
    pub fn new<I, S>(entries: impl IntoIterator<Item = (I, S)>) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        let scenarios = entries
            .into_iter()
            .enumerate()
            .map(|(i, (id, name))| Scenario::new(id, name, i + 1))
            .collect();
        Self { scenarios }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.id.as_str()).collect()
    }

    /// Scenario id to selector label, in display order.
    pub fn scen_check(&self) -> Vec<(&str, String)> {
        self.scenarios.iter().map(|s| (s.id.as_str(), s.label())).collect()
    }

    /// Display index of a scenario id.
    pub fn invert(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().find(|s| s.id == id).map(|s| s.order)
    }

    /// Read the scenarios of `round` from a CSV with `id`, `fullname` and
    /// `round` columns. Rows keep their file order.
    pub fn from_csv(path: impl AsRef<Path>, round: &str) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| DataError::csv(path, e))?;
        let headers = reader.headers().map_err(|e| DataError::csv(path, e))?.clone();

        let column = |name: &str| -> std::result::Result<usize, DataError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DataError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })
        };
        let id_col = column("id")?;
        let name_col = column("fullname")?;
        let round_col = column("round")?;

        let round = round.trim();
        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| DataError::csv(path, e))?;
            if record.get(round_col).map(str::trim) != Some(round) {
                continue;
            }
            let id = record.get(id_col).unwrap_or_default().trim().to_string();
            let name = record.get(name_col).unwrap_or_default().trim().to_string();
            entries.push((id, name));
        }

        if entries.is_empty() {
            return Err(LayoutError::NoScenarios {
                round: round.to_string(),
                path: path.to_path_buf(),
            });
        }

        debug!("Loaded {} scenarios for round {} from {}", entries.len(), round, path.display());
        Ok(Self::new(entries))
    }
}

impl<'a> IntoIterator for &'a ScenarioSet {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}
