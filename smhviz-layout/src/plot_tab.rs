//! The plot tab discriminator shared by the sidebar and the plot bars.

use std::convert::Infallible;
use std::str::FromStr;

/// A plot tab of the dashboard.
///
/// Unknown tab ids are kept as [`PlotTab::Other`]; builders render their
/// fallback layout for them instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlotTab {
    Scenario,
    ScenarioDisp,
    ModelSpecific,
    ModelDisp,
    ScenSampleComp,
    ScenComparison,
    StateDeviation,
    TrendMap,
    ModelDistribution,
    MultipatPlot,
    MultipatPlotComb,
    MultipatPlotComb1,
    Spaghetti,
    SpaghettiDisp,
    Heatmap,
    SamplePeak,
    PeakTimeModel,
    Other(String),
}

impl PlotTab {
    /// Every known tab, in dashboard order.
    pub const KNOWN: [PlotTab; 17] = [
        PlotTab::Scenario,
        PlotTab::ScenarioDisp,
        PlotTab::ModelSpecific,
        PlotTab::ModelDisp,
        PlotTab::ScenSampleComp,
        PlotTab::ScenComparison,
        PlotTab::StateDeviation,
        PlotTab::TrendMap,
        PlotTab::ModelDistribution,
        PlotTab::MultipatPlot,
        PlotTab::MultipatPlotComb,
        PlotTab::MultipatPlotComb1,
        PlotTab::Spaghetti,
        PlotTab::SpaghettiDisp,
        PlotTab::Heatmap,
        PlotTab::SamplePeak,
        PlotTab::PeakTimeModel,
    ];

    pub fn parse(s: &str) -> Self {
        match s {
            "scenario" => Self::Scenario,
            "scenario_disp" => Self::ScenarioDisp,
            "model_specific" => Self::ModelSpecific,
            "model_disp" => Self::ModelDisp,
            "scen_sample_comp" => Self::ScenSampleComp,
            "scen_comparison" => Self::ScenComparison,
            "state_deviation" => Self::StateDeviation,
            "trend_map" => Self::TrendMap,
            "model_distribution" => Self::ModelDistribution,
            "multipat_plot" => Self::MultipatPlot,
            "multipat_plot_comb" => Self::MultipatPlotComb,
            "multipat_plot_comb1" => Self::MultipatPlotComb1,
            "spaghetti" => Self::Spaghetti,
            "spaghetti_disp" => Self::SpaghettiDisp,
            "heatmap" => Self::Heatmap,
            "sample_peak" => Self::SamplePeak,
            "peak_time_model" => Self::PeakTimeModel,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Scenario => "scenario",
            Self::ScenarioDisp => "scenario_disp",
            Self::ModelSpecific => "model_specific",
            Self::ModelDisp => "model_disp",
            Self::ScenSampleComp => "scen_sample_comp",
            Self::ScenComparison => "scen_comparison",
            Self::StateDeviation => "state_deviation",
            Self::TrendMap => "trend_map",
            Self::ModelDistribution => "model_distribution",
            Self::MultipatPlot => "multipat_plot",
            Self::MultipatPlotComb => "multipat_plot_comb",
            Self::MultipatPlotComb1 => "multipat_plot_comb1",
            Self::Spaghetti => "spaghetti",
            Self::SpaghettiDisp => "spaghetti_disp",
            Self::Heatmap => "heatmap",
            Self::SamplePeak => "sample_peak",
            Self::PeakTimeModel => "peak_time_model",
            Self::Other(other) => other,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Dispersion variants of a plot (`*_disp`).
    pub fn is_disp(&self) -> bool {
        self.as_str().ends_with("_disp")
    }
}

impl FromStr for PlotTab {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for PlotTab {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl std::fmt::Display for PlotTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_round_trip() {
        for tab in PlotTab::KNOWN.iter() {
            assert_eq!(&PlotTab::parse(tab.as_str()), tab);
            assert!(tab.is_known());
        }
    }

    #[test]
    fn test_unknown_kept() {
        let tab = PlotTab::parse("violin");
        assert_eq!(tab, PlotTab::Other("violin".to_string()));
        assert!(!tab.is_known());
        assert_eq!(tab.to_string(), "violin");
    }

    #[test]
    fn test_disp() {
        assert!(PlotTab::SpaghettiDisp.is_disp());
        assert!(!PlotTab::Spaghetti.is_disp());
    }
}
