use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::elements::{ElementHandle, SelectHandle};
use crate::types::{SelectOption, UiState};

/// A select whose option set depends on another widget's value, together
/// with its "empty" and "loading" indicator elements.
///
/// All UI transitions go through this type, which keeps the select's
/// enabled flag coupled to the current state: `Loading`, `Empty` and
/// `Error` imply disabled, `Populated` implies enabled.
pub struct DependentSelect {
    select: Arc<dyn SelectHandle>,
    empty_indicator: Arc<dyn ElementHandle>,
    loading_indicator: Arc<dyn ElementHandle>,
    state: Mutex<UiState>,
}

impl DependentSelect {
    pub fn new(
        select: Arc<dyn SelectHandle>,
        empty_indicator: Arc<dyn ElementHandle>,
        loading_indicator: Arc<dyn ElementHandle>,
    ) -> Self {
        Self {
            select,
            empty_indicator,
            loading_indicator,
            state: Mutex::new(UiState::Idle),
        }
    }

    pub fn state(&self) -> UiState {
        *self.state.lock().unwrap()
    }

    /// Disable the select, hide the empty indicator, show the loading one.
    pub fn enter_loading(&self) {
        self.select.set_enabled(false);
        self.empty_indicator.hide();
        self.loading_indicator.show();
        self.set_state(UiState::Loading);
    }

    /// No options available: loading indicator off, empty indicator on,
    /// select stays disabled.
    pub fn enter_empty(&self) {
        self.loading_indicator.hide();
        self.empty_indicator.show();
        self.select.set_enabled(false);
        self.set_state(UiState::Empty);
    }

    /// A load failed. Same visual outcome as the empty case, distinct state
    /// so hosts can style it differently.
    pub fn enter_error(&self) {
        self.loading_indicator.hide();
        self.empty_indicator.show();
        self.select.set_enabled(false);
        self.set_state(UiState::Error);
    }

    /// Replace all options in response order and re-enable the select.
    pub fn populate(&self, options: &[SelectOption]) {
        self.loading_indicator.hide();
        self.select.replace_options(options);
        self.select.set_enabled(true);
        self.set_state(UiState::Populated);
    }

    fn set_state(&self, next: UiState) {
        let mut state = self.state.lock().unwrap();
        debug!(from = ?*state, to = ?next, "dependent select state change");
        *state = next;
    }
}
