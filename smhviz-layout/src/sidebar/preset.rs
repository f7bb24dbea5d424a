use super::ScenarioWidget;
use crate::plot_tab::PlotTab;

/// Which sidebar selectors a plot tab uses, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarPreset {
    pub scenario_widget: ScenarioWidget,
    pub scenario_disabled: bool,
    pub location_disabled: bool,
    pub target_disabled: bool,
    pub ui_disabled: bool,
    /// Offer the "Multi" uncertainty interval.
    pub multi_ui: bool,
}

impl SidebarPreset {
    const fn new(scenario_widget: ScenarioWidget) -> Self {
        Self {
            scenario_widget,
            scenario_disabled: false,
            location_disabled: false,
            target_disabled: false,
            ui_disabled: false,
            multi_ui: false,
        }
    }

    const fn no_location(mut self) -> Self {
        self.location_disabled = true;
        self
    }

    const fn no_target(mut self) -> Self {
        self.target_disabled = true;
        self
    }

    const fn no_ui(mut self) -> Self {
        self.ui_disabled = true;
        self
    }

    const fn no_scenario(mut self) -> Self {
        self.scenario_disabled = true;
        self
    }

    const fn multi_ui(mut self) -> Self {
        self.multi_ui = true;
        self
    }

    /// Everything greyed out. Used for tabs the dashboard does not know.
    pub const fn disabled() -> Self {
        Self::new(ScenarioWidget::Disabled)
            .no_scenario()
            .no_location()
            .no_target()
            .no_ui()
    }

    pub fn for_tab(tab: &PlotTab) -> Self {
        use ScenarioWidget::{Checklist, Radio};

        match tab {
            PlotTab::Scenario => Self::new(Checklist).multi_ui(),
            PlotTab::ScenarioDisp | PlotTab::ModelSpecific | PlotTab::ModelDisp => Self::new(Checklist),
            PlotTab::ScenSampleComp | PlotTab::ScenComparison => Self::new(Checklist).no_scenario().no_ui(),
            PlotTab::StateDeviation | PlotTab::TrendMap | PlotTab::Heatmap => {
                Self::new(Radio).no_location().no_ui()
            }
            PlotTab::ModelDistribution => Self::new(Radio).no_ui(),
            PlotTab::MultipatPlot | PlotTab::MultipatPlotComb | PlotTab::MultipatPlotComb1 => Self::new(Radio),
            PlotTab::Spaghetti | PlotTab::SpaghettiDisp => Self::new(Radio).no_ui(),
            PlotTab::SamplePeak => Self::new(Radio).no_target().no_ui(),
            PlotTab::PeakTimeModel => Self::new(Radio).no_location().no_target().no_ui(),
            PlotTab::Other(_) => Self::disabled(),
        }
    }
}
