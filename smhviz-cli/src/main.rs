//! smhviz
//!
//! Print Scenario Modeling Hub layout fragments as Dash component JSON.

mod paths;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashdom::Element;
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use smhviz_layout::{LayoutConfig, PlotTab};

#[derive(Parser, Debug)]
#[command(name = "smhviz")]
#[command(about = "Scenario Modeling Hub visualization layout builder")]
struct Cli {
    /// Layout configuration (JSON). Defaults to config.json in the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print an indented outline instead of JSON
    #[arg(long, global = true)]
    outline: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sidebar of a round for a plot tab
    Sidebar {
        #[arg(long)]
        round: String,
        #[arg(long, default_value = "scenario")]
        tab: String,
        /// Scenario CSV, overrides the configuration
        #[arg(long)]
        scenario_file: Option<PathBuf>,
    },
    /// Filter bar of a plot tab
    PlotBar {
        #[arg(long)]
        tab: String,
    },
    /// Plot tab bar
    Tabs {
        /// Plot ids, comma separated. Without any, `--show` is displayed instead.
        #[arg(long, value_delimiter = ',')]
        plots: Vec<String>,
        /// Selected plot, the first one by default
        #[arg(long)]
        selected: Option<String>,
        #[arg(long)]
        show: Option<String>,
    },
    /// Round tabs
    Rounds { rounds: Vec<String> },
    /// Abstract of one team model
    Abstract {
        #[arg(long)]
        round: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        team_model: String,
    },
    /// Abstract page of a round
    Abstracts {
        #[arg(long)]
        round: String,
    },
    /// Model metadata table
    Metadata {
        /// Metadata CSV, overrides the configuration
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Definitions and notes sections
    Notes {
        #[arg(long, default_value = "")]
        definitions: String,
        #[arg(long, default_value = "")]
        left: String,
        #[arg(long, default_value = "")]
        right: String,
        #[arg(long, default_value = "Notes")]
        id: String,
    },
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to the cache directory when possible, to stderr otherwise.
fn init_logging(verbose: u8) -> Result<()> {
    let level = level(verbose);
    paths::rotate_logs();

    let log_file = paths::log_file().and_then(|path| {
        let dir = path.parent()?;
        fs::create_dir_all(dir).ok()?;
        File::create(&path).ok()
    });

    match log_file {
        Some(file) => WriteLogger::init(level, Config::default(), file)?,
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?,
    }
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<LayoutConfig> {
    match path.or_else(paths::config_file) {
        Some(path) => {
            let config = LayoutConfig::load(&path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            Ok(config)
        }
        None => {
            info!("No config directory, using the default configuration");
            Ok(LayoutConfig::default())
        }
    }
}

fn run(command: Commands, config: &LayoutConfig) -> Result<Vec<Element>> {
    let el = match command {
        Commands::Sidebar {
            round,
            tab,
            scenario_file,
        } => {
            let scenario_file = scenario_file
                .or_else(|| config.scenario_file.clone())
                .context("No scenario file, pass --scenario-file or set scenario_file in the configuration")?;
            smhviz_layout::build_sidebar_from_csv(&config.sidebar, scenario_file, &round, &PlotTab::parse(&tab))?
        }
        Commands::PlotBar { tab } => smhviz_layout::make_plot_bar(&config.plot_bar, &PlotTab::parse(&tab))?,
        Commands::Tabs { plots, selected, show } => {
            let plots = (!plots.is_empty()).then_some(plots);
            smhviz_layout::make_tab_plots(
                plots.as_deref(),
                &config.tabs.names,
                show.as_deref(),
                selected.as_deref(),
                &config.tabs.css,
            )?
        }
        Commands::Rounds { rounds } => return Ok(smhviz_layout::make_round_tab(&rounds, &config.tabs.css)),
        Commands::Abstract {
            round,
            date,
            team_model,
        } => smhviz_layout::render_abstract(&round, &date, &team_model, &config.abstracts_path)?,
        Commands::Abstracts { round } => smhviz_layout::make_abstract_tab(&round, &config.abstracts_path)?,
        Commands::Metadata { file } => {
            let file = file
                .or_else(|| config.metadata_file.clone())
                .context("No metadata file, pass --file or set metadata_file in the configuration")?;
            smhviz_layout::make_dt_metadata(file)?
        }
        Commands::Notes {
            definitions,
            left,
            right,
            id,
        } => smhviz_layout::make_notes_definition(
            Element::p(definitions),
            Element::p(left),
            Element::p(right),
            &config.notes,
            &id,
        ),
    };
    Ok(vec![el])
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(cli.config)?;
    debug!("Running {:?}", cli.command);
    let elements = run(cli.command, &config)?;

    if cli.outline {
        for el in &elements {
            print!("{}", dashdom::outline(el));
        }
    } else if let [el] = elements.as_slice() {
        println!("{}", dashdom::to_json_pretty(el));
    } else {
        println!("{}", serde_json::to_string_pretty(&elements)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["smhviz", "-vv", "sidebar", "--round", "13", "--tab", "heatmap"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Sidebar { ref tab, .. } if tab == "heatmap"));

        let cli = Cli::try_parse_from(["smhviz", "tabs", "--plots", "scenario,heatmap", "--outline"]).unwrap();
        assert!(cli.outline);
        assert!(matches!(cli.command, Commands::Tabs { ref plots, .. } if plots.len() == 2));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level(0), LevelFilter::Info);
        assert_eq!(level(1), LevelFilter::Debug);
        assert_eq!(level(5), LevelFilter::Trace);
    }

    #[test]
    fn test_round_tabs_print_as_list() {
        let elements = run(
            Commands::Rounds {
                rounds: vec!["Round 1".to_string(), "Round 2".to_string()],
            },
            &LayoutConfig::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&elements).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[1]["type"], "Tab");
    }

    #[test]
    fn test_sidebar_needs_scenario_file() {
        let err = run(
            Commands::Sidebar {
                round: "13".to_string(),
                tab: "scenario".to_string(),
                scenario_file: None,
            },
            &LayoutConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("scenario file"));
    }
}
