use crate::data::filter::{Choice, FilterDomains, FilterSelection};
use crate::data::model::Dimension;
use crate::error::DashboardError;
use crate::pipeline::error_message;

// ---------------------------------------------------------------------------
// Tabs of the central area
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    TopPerformers,
    Statistics,
    PlayerList,
    SearchPlayer,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::TopPerformers,
        Tab::Statistics,
        Tab::PlayerList,
        Tab::SearchPlayer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::TopPerformers => "Top Performers",
            Tab::Statistics => "Statistics",
            Tab::PlayerList => "Player List",
            Tab::SearchPlayer => "Search Player",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Per-session UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current filters. `None` until the dataset has been loaded once.
    pub selection: Option<FilterSelection>,

    pub active_tab: Tab,

    /// Message of the fault shown in place of the dashboard, if any.
    pub error_message: Option<String>,
}

impl AppState {
    /// Change one categorical filter.
    pub fn set_choice(&mut self, dim: Dimension, choice: Choice) {
        if let Some(sel) = self.selection.as_mut() {
            *sel.choice_mut(dim) = choice;
        }
    }

    /// Move the lower age bound, dragging the upper one along if needed.
    pub fn set_age_low(&mut self, low: u32) {
        if let Some(sel) = self.selection.as_mut() {
            sel.age.low = low;
            sel.age.high = sel.age.high.max(low);
        }
    }

    /// Move the upper age bound, dragging the lower one along if needed.
    pub fn set_age_high(&mut self, high: u32) {
        if let Some(sel) = self.selection.as_mut() {
            sel.age.high = high;
            sel.age.low = sel.age.low.min(high);
        }
    }

    /// Restore every filter to its default.
    pub fn reset_filters(&mut self, domains: &FilterDomains) {
        log::info!("Filters reset");
        self.selection = Some(FilterSelection::full(domains));
    }

    /// Record a pipeline fault; logs only when the message changes so a
    /// persistent fault is not logged on every frame.
    pub fn report_error(&mut self, err: &DashboardError) {
        let msg = error_message(err);
        if self.error_message.as_deref() != Some(msg.as_str()) {
            log::error!("{msg}");
            self.error_message = Some(msg);
        }
    }

    pub fn clear_error(&mut self) {
        if self.error_message.take().is_some() {
            log::info!("Dashboard recovered");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::filter::AgeRange;
    use crate::data::model::tests::player;
    use crate::data::model::Dataset;
    use crate::error::LoadError;

    fn state_with_selection() -> (AppState, FilterDomains) {
        let ds = Dataset::from_players(vec![
            player("A", "Forward", 18, 1),
            player("B", "Forward", 34, 1),
        ]);
        let domains = FilterDomains::from_dataset(&ds);
        let mut state = AppState::default();
        state.reset_filters(&domains);
        (state, domains)
    }

    #[test]
    fn age_bounds_stay_ordered() {
        let (mut state, _) = state_with_selection();
        state.set_age_low(30);
        state.set_age_high(25);
        assert_eq!(state.selection.unwrap().age, AgeRange::new(25, 25));
    }

    #[test]
    fn reset_restores_defaults() {
        let (mut state, domains) = state_with_selection();
        state.set_choice(Dimension::Position, Choice::Value("Forward".into()));
        state.set_age_low(20);
        state.reset_filters(&domains);
        assert_eq!(state.selection, Some(FilterSelection::full(&domains)));
    }

    #[test]
    fn edits_before_load_are_ignored() {
        let mut state = AppState::default();
        state.set_choice(Dimension::Club, Choice::Value("X".into()));
        state.set_age_low(3);
        assert!(state.selection.is_none());
        assert_eq!(state.active_tab, Tab::TopPerformers);
    }

    #[test]
    fn error_is_kept_until_cleared() {
        let mut state = AppState::default();
        let err = DashboardError::Load(LoadError::NotFound {
            path: PathBuf::from("scout_dataset1.csv"),
        });
        state.report_error(&err);
        state.report_error(&err);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Error loading data: dataset file not found: scout_dataset1.csv")
        );
        state.clear_error();
        assert!(state.error_message.is_none());
    }
}
