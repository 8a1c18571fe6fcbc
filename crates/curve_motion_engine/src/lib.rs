//! Trajektorien-Engine: kubische Kurven auswerten, vermessen und abtasten.
//!
//! Die Engine ist rein rechnend und synchron. Eingaben sind Kontrollpunkte im
//! Pfad-Raum, Ausgaben unveränderliche Punktfolgen (Vorschau-Kurven und
//! Trajektorien) sowie ein Abspiel-Zustandsautomat.
//!
//! Aufgeteilt in:
//! - `control_points`: `CurveSpec` (genau 4 Punkte) und Easing-Anker
//! - `basis`: B-Spline- und Bézier-Basisfunktionen
//! - `curve`: `CubicCurve`: Position/Geschwindigkeit bei Parameter t
//! - `arc_length`: Bogenlänge per Simpson-Regel
//! - `inverse`: Länge → Parameter per Bisektion
//! - `sampler`: Vorschau-Kurven und Trajektorien
//! - `player`: Abspiel-Zustand (Idle / Uniform / Variable)

pub mod arc_length;
pub mod basis;
pub mod config;
pub mod control_points;
pub mod curve;
pub mod error;
pub mod inverse;
pub mod player;
pub mod sampler;

pub use arc_length::ArcLength;
pub use basis::CurveBasis;
pub use config::SamplingConfig;
pub use control_points::{CONTROL_POINT_COUNT, ControlPoint, CurveSpec, EasingAnchors};
pub use curve::CubicCurve;
pub use error::{CurveError, CurveResult};
pub use inverse::{Inversion, ParameterInverter};
pub use player::{PlaybackMode, PlaybackState, TrajectoryPlayer};
pub use sampler::{CurveSampler, SampledCurve, Trajectory, TrajectoryKind};
