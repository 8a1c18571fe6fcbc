//! Curve Motion Editor Library.
//! Application-Layer, Konfiguration und Headless-Szenarien über der
//! Trajektorien-Engine; als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod scenario;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveTarget, EditMode, UiState,
};
pub use curve_motion_engine::{
    CurveError, CurveSampler, CurveSpec, PlaybackMode, PlaybackState, SampledCurve, Trajectory,
    TrajectoryPlayer,
};
pub use scenario::{Scenario, ScenarioReport};
pub use shared::{EngineOptions, PresentationFrame};
