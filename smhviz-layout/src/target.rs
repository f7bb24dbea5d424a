//! Target selection data.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Outcome type that keeps every target.
pub const ALL_TARGETS: &str = "all";

/// A projection target: the code used in submission files and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub code: String,
    pub name: String,
}

impl Target {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Targets filtered for an outcome type, with the default selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTargets {
    pub default: Option<String>,
    pub targets: Vec<Target>,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| LayoutError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Filter `targets` to an outcome type and pick the default target.
///
/// With `target_type` other than `"all"`, only codes matching `target_type`
/// are kept and the default is the first code matching
/// `target_type + def_target` (e.g. `"inc"` + `" hosp"`). With `"all"`, every
/// target is kept and the default is the first code matching `def_target`.
/// Both arguments are regular expressions.
pub fn prep_target(target_type: &str, targets: &[Target], def_target: &str) -> Result<PreparedTargets> {
    if target_type == ALL_TARGETS {
        let default_re = compile(def_target)?;
        let default = targets
            .iter()
            .find(|t| default_re.is_match(&t.code))
            .map(|t| t.code.clone());
        return Ok(PreparedTargets {
            default,
            targets: targets.to_vec(),
        });
    }

    let default_re = compile(&format!("{target_type}{def_target}"))?;
    let type_re = compile(target_type)?;
    let default = targets
        .iter()
        .find(|t| default_re.is_match(&t.code))
        .map(|t| t.code.clone());
    let targets = targets
        .iter()
        .filter(|t| type_re.is_match(&t.code))
        .cloned()
        .collect();
    Ok(PreparedTargets { default, targets })
}
