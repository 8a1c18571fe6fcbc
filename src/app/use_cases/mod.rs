//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curve_editing;
pub mod playback;
pub mod trajectory;
