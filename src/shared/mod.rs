//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und den Darstellungs-Snapshot, die zwischen `app`
//! und einem Presenter geteilt werden.

pub mod options;
mod presentation_frame;

pub use options::{EngineOptions, InputPanel, PanelLayout};
pub use presentation_frame::PresentationFrame;
