use crate::config::{MAX_KEYWORD_FREQUENCY, MAX_SENTIMENT_THRESHOLD};
use crate::data::filter::{
    filter_keywords, filter_monthly, CategoryChoice, CategorySelection, DerivedViews,
};
use crate::data::model::Dataset;
use crate::data::period::{resolve_range, Period};

// ---------------------------------------------------------------------------
// Selection state and its transitions
// ---------------------------------------------------------------------------

/// The user-adjustable filter parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub period: Period,
    /// Scores below this are drawn as gaps (0–100).
    pub sentiment_threshold: u32,
    /// Minimum mentions for a keyword to be shown (0–350).
    pub keyword_frequency: u32,
    pub categories: CategorySelection,
}

/// A single user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetPeriod(Period),
    SetSentimentThreshold(u32),
    SetKeywordFrequency(u32),
    SelectCategory(CategoryChoice),
    Reset,
}

impl SelectionState {
    /// Return the state that results from applying `action` to `self`.
    pub fn reduce(&self, action: Action) -> SelectionState {
        match action {
            Action::SetPeriod(period) => SelectionState {
                period,
                ..self.clone()
            },
            Action::SetSentimentThreshold(t) => SelectionState {
                sentiment_threshold: t.min(MAX_SENTIMENT_THRESHOLD),
                ..self.clone()
            },
            Action::SetKeywordFrequency(f) => SelectionState {
                keyword_frequency: f.min(MAX_KEYWORD_FREQUENCY),
                ..self.clone()
            },
            Action::SelectCategory(choice) => SelectionState {
                categories: self.categories.toggled(choice),
                ..self.clone()
            },
            Action::Reset => SelectionState::default(),
        }
    }
}

/// Recompute both views from the source data and a selection.
pub fn derive_views(dataset: &Dataset, selection: &SelectionState) -> DerivedViews {
    DerivedViews {
        trend: filter_monthly(
            &dataset.monthly,
            resolve_range(selection.period),
            f64::from(selection.sentiment_threshold),
        ),
        keywords: filter_keywords(
            &dataset.keywords,
            selection.keyword_frequency,
            &selection.categories,
        ),
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source data, fixed for the lifetime of the window.
    pub dataset: Dataset,

    /// Current filter selection. Only replaced through [`AppState::dispatch`].
    selection: SelectionState,

    /// Views derived from `dataset` and `selection` (cached).
    views: DerivedViews,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let selection = SelectionState::default();
        let views = derive_views(&dataset, &selection);
        Self {
            dataset,
            selection,
            views,
            status_message: None,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn views(&self) -> &DerivedViews {
        &self.views
    }

    /// Apply an interaction and recompute the views if the selection changed.
    pub fn dispatch(&mut self, action: Action) {
        let next = self.selection.reduce(action);
        if next == self.selection {
            return;
        }
        log::debug!("{action:?}: {:?} -> {next:?}", self.selection);
        self.views = derive_views(&self.dataset, &next);
        self.selection = next;
    }
}
