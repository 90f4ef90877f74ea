// crates/penamap-core/src/controller.rs

//! # Search & Selection Controller
//!
//! Owns the autocomplete and marker state of one map view. Every operation
//! is a synchronous, infallible transition that returns the ordered list
//! of [`Update`]s it performed, so a view layer can replay them one by one.

use crate::common::Coordinate;
use crate::model::{PlaceRecord, PlaceStore};
use serde::{Deserialize, Serialize};

/// Mutable state of one mounted map view. Starts at the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub query: String,
    pub suggestions: Vec<PlaceRecord>,
    pub selected: Option<PlaceRecord>,
    pub active: Option<PlaceRecord>,
    pub show_all: bool,
}

/// Which markers the map shows. Derived from [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    Idle,
    ShowingAll,
    ShowingSelected,
}

/// One observable state change, in the order it was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Update {
    QueryChanged(String),
    SuggestionsChanged(usize),
    SelectedChanged(Option<PlaceRecord>),
    ShowAllChanged(bool),
    ActiveCleared,
    ActiveSet(PlaceRecord),
    Recenter(Coordinate),
}

pub type Updates = Vec<Update>;

/// Search and marker selection over a borrowed [`PlaceStore`].
#[derive(Debug, Clone)]
pub struct SearchController<'s> {
    store: &'s PlaceStore,
    state: SelectionState,
}

impl<'s> SearchController<'s> {
    pub fn new(store: &'s PlaceStore) -> Self {
        Self {
            store,
            state: SelectionState::default(),
        }
    }

    pub fn store(&self) -> &'s PlaceStore {
        self.store
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.state.show_all {
            DisplayMode::ShowingAll
        } else if self.state.selected.is_some() {
            DisplayMode::ShowingSelected
        } else {
            DisplayMode::Idle
        }
    }

    /// Sets the query and recomputes the suggestions.
    ///
    /// Typing always leaves "show all" mode.
    pub fn set_query(&mut self, text: &str) -> Updates {
        let mut out = vec![Update::QueryChanged(text.to_owned())];
        self.state.query = text.to_owned();

        self.state.suggestions = if text.trim().is_empty() {
            Vec::new()
        } else {
            self.store
                .find_by_substring(text)
                .into_iter()
                .cloned()
                .collect()
        };
        out.push(Update::SuggestionsChanged(self.state.suggestions.len()));

        self.set_show_all(false, &mut out);
        tracing::trace!(query = text, hits = self.state.suggestions.len(), "query set");
        out
    }

    /// Picks the first current suggestion named exactly `name`.
    ///
    /// Unknown names are a no-op and return no updates.
    pub fn select_suggestion(&mut self, name: &str) -> Updates {
        let Some(place) = self.state.suggestions.iter().find(|p| p.name == name).cloned()
        else {
            tracing::trace!(name, "selection ignored, not a current suggestion");
            return Vec::new();
        };

        let mut out = Vec::new();
        if self.state.query != place.name {
            self.state.query = place.name.clone();
            out.push(Update::QueryChanged(place.name.clone()));
        }
        let coordinate = place.coordinate;
        self.state.selected = Some(place.clone());
        out.push(Update::SelectedChanged(Some(place)));
        self.set_show_all(false, &mut out);
        self.clear_active(&mut out);
        self.state.suggestions.clear();
        out.push(Update::SuggestionsChanged(0));
        out.push(Update::Recenter(coordinate));

        tracing::trace!(name, "suggestion selected");
        out
    }

    /// Flips "show all". Turning it on drops the single selection and the
    /// overlay.
    pub fn toggle_show_all(&mut self) -> Updates {
        let mut out = Vec::new();
        let on = !self.state.show_all;
        self.set_show_all(on, &mut out);
        if on {
            if self.state.selected.take().is_some() {
                out.push(Update::SelectedChanged(None));
            }
            self.clear_active(&mut out);
        }
        tracing::trace!(show_all = on, "show all toggled");
        out
    }

    /// Opens the overlay for `place`. Last call wins.
    ///
    /// The overlay is always cleared first and then set, as two separate
    /// updates, so a view keyed on the active place remounts its content.
    pub fn activate_marker(&mut self, place: &PlaceRecord) -> Updates {
        self.state.active = None;
        let mut out = vec![Update::ActiveCleared];
        self.state.active = Some(place.clone());
        out.push(Update::ActiveSet(place.clone()));
        tracing::trace!(name = %place.name, "marker activated");
        out
    }

    /// [`Self::activate_marker`] by store index; out of range is a no-op.
    pub fn activate_marker_at(&mut self, index: usize) -> Updates {
        match self.store.get(index) {
            Some(place) => self.activate_marker(place),
            None => Vec::new(),
        }
    }

    /// Closes the overlay.
    pub fn dismiss_active(&mut self) -> Updates {
        let mut out = Vec::new();
        self.clear_active(&mut out);
        out
    }

    fn set_show_all(&mut self, value: bool, out: &mut Updates) {
        if self.state.show_all != value {
            self.state.show_all = value;
            out.push(Update::ShowAllChanged(value));
        }
    }

    fn clear_active(&mut self, out: &mut Updates) {
        if self.state.active.take().is_some() {
            out.push(Update::ActiveCleared);
        }
    }
}
