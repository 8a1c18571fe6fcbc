//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod presentation;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurven, Wiedergabe, Modus).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use presentation::build as build_presentation_frame;
pub use state::{AppState, CurveState, CurveTarget, EditMode, EditorState, UiState};
