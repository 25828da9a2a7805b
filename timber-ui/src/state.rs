//! Application state for the board-footage calculator.
//!
//! Every user action is a method on [`AppState`]. The gpui view only
//! forwards events here and re-renders, so the whole interaction model can
//! be exercised without a window.

use thiserror::Error;
use timber_core::{CalculationError, CalculationRecord, Dimension, History, Measurements, RecordId};
use tracing::{debug, info};

/// Lifecycle of the advice panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdvisoryState {
    #[default]
    Idle,
    /// A request is in flight; a second one is refused.
    Loading,
    Shown(String),
}

/// Why an advice request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvisoryRejected {
    #[error("an advice request is already in flight")]
    InFlight,
    #[error("there are no calculations to advise on")]
    NoHistory,
    #[error("the running total is zero")]
    ZeroTotal,
}

/// Everything the calculator window shows.
///
/// Nothing here is persisted; a new state starts empty.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Raw text of the four measurement fields, in [`Dimension::ALL`] order.
    inputs: [String; 4],
    history: History,
    advisory: AdvisoryState,
    /// Set while the "clear all" confirmation is showing.
    clear_pending: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(
        &self,
        dimension: Dimension,
    ) -> &str {
        &self.inputs[dimension.index()]
    }

    pub fn set_input(
        &mut self,
        dimension: Dimension,
        value: impl Into<String>,
    ) {
        self.inputs[dimension.index()] = value.into();
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn records(&self) -> &[CalculationRecord] {
        self.history.list()
    }

    /// Unrounded running total.
    pub fn total(&self) -> f64 {
        self.history.total()
    }

    pub fn advisory(&self) -> &AdvisoryState {
        &self.advisory
    }

    pub fn is_loading_advice(&self) -> bool {
        self.advisory == AdvisoryState::Loading
    }

    /// Text for the advice panel, if any is showing.
    pub fn advice(&self) -> Option<&str> {
        match &self.advisory {
            AdvisoryState::Shown(text) => Some(text),
            _ => None,
        }
    }

    // ── submission ───────────────────────────────────────────────────────

    /// Parses the four inputs and appends a new record.
    ///
    /// On success the inputs are cleared. On failure nothing changes and
    /// the error names the first offending field. The advice panel is
    /// never touched.
    pub fn submit(&mut self) -> Result<RecordId, CalculationError> {
        let measurements = Measurements::parse(self.inputs.each_ref().map(String::as_str))?;

        let record = CalculationRecord::new(measurements);
        let id = record.id();
        info!(%id, result = record.result(), "calculation added");

        self.history.append(record);
        self.inputs = Default::default();
        Ok(id)
    }

    /// Removes one record. Returns `false` when the id was unknown.
    pub fn remove(
        &mut self,
        id: RecordId,
    ) -> bool {
        self.history.remove(id).is_some()
    }

    // ── clear all ────────────────────────────────────────────────────────

    pub fn can_clear(&self) -> bool {
        !self.history.is_empty()
    }

    /// Asks for confirmation before clearing. Returns `false` when there is
    /// nothing to clear.
    pub fn request_clear(&mut self) -> bool {
        self.clear_pending = self.can_clear();
        self.clear_pending
    }

    pub fn is_clear_pending(&self) -> bool {
        self.clear_pending
    }

    pub fn cancel_clear(&mut self) {
        self.clear_pending = false;
    }

    /// Empties the history and the advice panel together.
    ///
    /// An in-flight request keeps the `Loading` state so that no second
    /// request can start; its answer is still shown when it arrives.
    pub fn confirm_clear(&mut self) {
        self.clear_pending = false;
        self.history.clear();
        if !self.is_loading_advice() {
            self.advisory = AdvisoryState::Idle;
        }
    }

    // ── advice ───────────────────────────────────────────────────────────

    pub fn can_request_advice(&self) -> bool {
        self.check_advice_request().is_ok()
    }

    fn check_advice_request(&self) -> Result<f64, AdvisoryRejected> {
        if self.is_loading_advice() {
            return Err(AdvisoryRejected::InFlight);
        }
        if self.history.is_empty() {
            return Err(AdvisoryRejected::NoHistory);
        }
        let total = self.total();
        if total == 0.0 {
            return Err(AdvisoryRejected::ZeroTotal);
        }
        Ok(total)
    }

    /// Moves to `Loading` and returns the total to ask about.
    pub fn begin_advisory(&mut self) -> Result<f64, AdvisoryRejected> {
        let total = self.check_advice_request()?;
        self.advisory = AdvisoryState::Loading;
        Ok(total)
    }

    /// Shows the answer of the request started by [`Self::begin_advisory`].
    pub fn finish_advisory(
        &mut self,
        text: impl Into<String>,
    ) {
        if !self.is_loading_advice() {
            debug!(state = ?self.advisory, "advice arrived without a pending request");
        }
        self.advisory = AdvisoryState::Shown(text.into());
    }

    /// Closes the advice panel. Ignored while a request is in flight.
    pub fn dismiss_advice(&mut self) {
        if let AdvisoryState::Shown(_) = self.advisory {
            self.advisory = AdvisoryState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fill(
        state: &mut AppState,
        values: [&str; 4],
    ) {
        for (dimension, value) in Dimension::ALL.into_iter().zip(values) {
            state.set_input(dimension, value);
        }
    }

    fn state_with(entries: &[[&str; 4]]) -> AppState {
        let mut state = AppState::new();
        for entry in entries {
            fill(&mut state, *entry);
            state.submit().expect("valid entry");
        }
        state
    }

    // ── submission ───────────────────────────────────────────────────────
    #[test]
    fn submit_appends_newest_first_and_clears_inputs() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);
        fill(&mut state, ["96", "6", "1", "4"]);

        let id = state.submit().unwrap();

        assert_eq!(state.records().len(), 2);
        assert_eq!(state.records()[0].id(), id);
        assert_eq!(state.records()[0].result(), 16.0);
        for dimension in Dimension::ALL {
            assert_eq!(state.input(dimension), "");
        }
        assert_eq!(state.total(), 17.0);
    }

    #[test]
    fn invalid_submit_changes_nothing() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);
        fill(&mut state, ["96", "six", "1", "4"]);

        let err = state.submit().unwrap_err();

        assert_eq!(
            err,
            CalculationError::InvalidInput {
                dimension: Dimension::Width,
                input: "six".to_string(),
            }
        );
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.input(Dimension::Length), "96");
        assert_eq!(state.input(Dimension::Width), "six");
    }

    #[test]
    fn empty_field_is_rejected() {
        let mut state = AppState::new();
        fill(&mut state, ["96", "6", "1", ""]);

        assert!(state.submit().is_err());
        assert!(state.records().is_empty());
    }

    #[test]
    fn submit_leaves_advice_alone() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);
        state.begin_advisory().unwrap();
        state.finish_advisory("Build a stool.");
        fill(&mut state, ["12", "12", "1", "1"]);

        state.submit().unwrap();

        assert_eq!(state.advice(), Some("Build a stool."));
    }

    // ── removal ──────────────────────────────────────────────────────────
    #[test]
    fn remove_unknown_id_is_noop() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);

        assert!(!state.remove(RecordId::new()));
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn remove_updates_total() {
        let mut state = state_with(&[["12", "12", "1", "1"], ["24", "12", "1", "1"]]);
        let newest = state.records()[0].id();

        assert!(state.remove(newest));
        assert_eq!(state.total(), 1.0);
    }

    // ── clear all ────────────────────────────────────────────────────────
    #[test]
    fn clear_requires_confirmation() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);

        assert!(state.request_clear());
        assert!(state.is_clear_pending());
        assert_eq!(state.records().len(), 1);

        state.cancel_clear();
        assert!(!state.is_clear_pending());
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn request_clear_on_empty_history_does_nothing() {
        let mut state = AppState::new();

        assert!(!state.can_clear());
        assert!(!state.request_clear());
        assert!(!state.is_clear_pending());
    }

    #[test]
    fn confirm_clear_resets_history_and_advice() {
        let mut state = state_with(&[["12", "12", "1", "1"], ["2", "6", "1", "10"]]);
        state.begin_advisory().unwrap();
        state.finish_advisory("Plenty for a chair.");
        state.request_clear();

        state.confirm_clear();

        assert!(state.records().is_empty());
        assert_eq!(state.total(), 0.0);
        assert_eq!(state.advisory(), &AdvisoryState::Idle);
        assert!(!state.is_clear_pending());
    }

    #[test]
    fn answer_after_clear_is_still_shown() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);
        state.begin_advisory().unwrap();
        state.request_clear();
        state.confirm_clear();

        assert!(state.is_loading_advice());
        state.finish_advisory("Stale advice.");

        assert_eq!(state.advice(), Some("Stale advice."));
        assert!(state.records().is_empty());
    }

    // ── advice ───────────────────────────────────────────────────────────
    #[test]
    fn advice_needs_history() {
        let mut state = AppState::new();

        assert!(!state.can_request_advice());
        assert_eq!(state.begin_advisory(), Err(AdvisoryRejected::NoHistory));
        assert_eq!(state.advisory(), &AdvisoryState::Idle);
    }

    #[test]
    fn advice_skips_zero_total() {
        let mut state = state_with(&[["0", "12", "1", "1"]]);

        assert_eq!(state.begin_advisory(), Err(AdvisoryRejected::ZeroTotal));
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);

        assert_eq!(state.begin_advisory(), Ok(1.0));
        assert!(state.is_loading_advice());
        assert!(!state.can_request_advice());
        assert_eq!(state.begin_advisory(), Err(AdvisoryRejected::InFlight));

        state.finish_advisory("done");
        assert!(state.can_request_advice());
    }

    #[test]
    fn advice_can_be_requested_again_after_shown() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);
        state.begin_advisory().unwrap();
        state.finish_advisory("first");

        assert_eq!(state.begin_advisory(), Ok(1.0));
        assert_eq!(state.advice(), None);
    }

    #[test]
    fn dismiss_hides_shown_advice_only() {
        let mut state = state_with(&[["12", "12", "1", "1"]]);
        state.begin_advisory().unwrap();

        state.dismiss_advice();
        assert!(state.is_loading_advice());

        state.finish_advisory("tip");
        state.dismiss_advice();
        assert_eq!(state.advisory(), &AdvisoryState::Idle);
        assert_eq!(state.records().len(), 1);
    }
}
