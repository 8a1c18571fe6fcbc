//! Application State: zentrale Datenhaltung.

mod app_state;
mod curves;
mod editor;

pub use app_state::AppState;
pub use curves::CurveState;
pub use editor::{CurveTarget, EditEvent, EditMode, EditorState};

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statuszeile (Hinweise und abgewiesene Eingaben)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
