//! Layout assembly errors

use std::path::PathBuf;

use super::DataError;

/// Errors that can occur while assembling a layout fragment.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Reading an input file failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Neither casing variant of an abstract file exists.
    #[error("No abstract found, tried {}", join_paths(.tried))]
    AbstractNotFound {
        /// Every path that was checked, in order.
        tried: Vec<PathBuf>,
    },

    /// The round's abstract directory holds no abstract.
    #[error("No abstracts in {0}")]
    NoAbstracts(PathBuf),

    /// The scenario file lists no scenario for the requested round.
    #[error("No scenarios for round {round} in {path}")]
    NoScenarios {
        /// Requested round.
        round: String,
        /// Scenario file.
        path: PathBuf,
    },

    /// A scenario widget was asked to select a value but every scenario is unselected.
    #[error("Every scenario is unselected, nothing to select by default")]
    NoSelectableScenario,

    /// A target search pattern does not compile.
    #[error("Invalid target pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that failed.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A multi-pathogen bar was requested without any other pathogen.
    #[error("Multi-pathogen plot requires at least one other pathogen")]
    MissingOtherPathogen,

    /// A builder needs more scenarios than were given.
    #[error("Need at least {needed} scenarios, got {found}")]
    NotEnoughScenarios {
        /// Minimum required.
        needed: usize,
        /// Number given.
        found: usize,
    },

    /// A list that must not be empty was empty.
    #[error("Empty {0} list")]
    EmptyList(&'static str),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
