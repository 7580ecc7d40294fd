use serde::{Deserialize, Serialize};

/// UI lifecycle of a dependent-select widget. Exactly one state is active
/// per widget at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Empty,
    Populated,
    Error,
}

impl UiState {
    /// Whether the dependent select is interactable in this state.
    pub fn select_enabled(self) -> bool {
        matches!(self, UiState::Populated)
    }
}

/// One entry of a dependent select, in server response order. Options have
/// no identity beyond value equality within one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Result of the external strength assessor. Produced per keystroke,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAssessment {
    pub score: f64,
    pub classification: Option<String>,
}

/// Key code of the arrow-up key on a keyup event.
pub const KEY_ARROW_UP: u32 = 38;
/// Key code of the arrow-down key on a keyup event.
pub const KEY_ARROW_DOWN: u32 = 40;

/// Raw event kinds the host forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Change,
    KeyUp(u32),
}

impl FormEvent {
    /// Selection events that warrant a dependent reload: any change event,
    /// or a keyup that moved the selection with the arrow keys.
    pub fn moves_selection(self) -> bool {
        match self {
            FormEvent::Change => true,
            FormEvent::KeyUp(code) => code == KEY_ARROW_UP || code == KEY_ARROW_DOWN,
        }
    }
}
