//! Abtast- und Genauigkeits-Konfiguration der Engine.

use crate::arc_length::{ArcLength, DEFAULT_SIMPSON_SUBDIVISIONS};
use crate::error::{CurveError, CurveResult};
use crate::inverse::{DEFAULT_INVERSION_EPSILON, DEFAULT_INVERSION_MAX_ITERATIONS, ParameterInverter};
use serde::{Deserialize, Serialize};

/// Stützpunkte der Formkurven-Vorschau.
pub const DEFAULT_SHAPE_SAMPLE_COUNT: usize = 101;
/// Frames der gleichförmigen Trajektorie.
pub const DEFAULT_UNIFORM_FRAME_COUNT: usize = 201;
/// Stützpunkte der Easing-Kurven-Vorschau.
pub const DEFAULT_EASING_SAMPLE_COUNT: usize = 201;
/// Frames der Easing-gesteuerten Trajektorie.
pub const DEFAULT_EASED_FRAME_COUNT: usize = 201;

/// Feste Konfiguration einer Sitzung (wird beim Erstellen gesetzt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Stützpunkte der Formkurven-Vorschau
    pub shape_sample_count: usize,
    /// Frames der gleichförmigen Trajektorie
    pub uniform_frame_count: usize,
    /// Stützpunkte der Easing-Kurven-Vorschau
    pub easing_sample_count: usize,
    /// Frames der Easing-gesteuerten Trajektorie
    pub eased_frame_count: usize,
    /// Simpson-Teilintervalle für die Bogenlänge
    pub simpson_subdivisions: usize,
    /// Abbruchtoleranz der Längen-Inversion
    pub inversion_epsilon: f64,
    /// Maximale Bisektionsschritte
    pub inversion_max_iterations: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            shape_sample_count: DEFAULT_SHAPE_SAMPLE_COUNT,
            uniform_frame_count: DEFAULT_UNIFORM_FRAME_COUNT,
            easing_sample_count: DEFAULT_EASING_SAMPLE_COUNT,
            eased_frame_count: DEFAULT_EASED_FRAME_COUNT,
            simpson_subdivisions: DEFAULT_SIMPSON_SUBDIVISIONS,
            inversion_epsilon: DEFAULT_INVERSION_EPSILON,
            inversion_max_iterations: DEFAULT_INVERSION_MAX_ITERATIONS,
        }
    }
}

impl SamplingConfig {
    /// Prüft alle Werte auf Gültigkeit.
    pub fn validate(&self) -> CurveResult<()> {
        for count in [
            self.shape_sample_count,
            self.uniform_frame_count,
            self.easing_sample_count,
            self.eased_frame_count,
        ] {
            if count < 2 {
                return Err(CurveError::InvalidSampleCount { requested: count });
            }
        }
        self.inverter().map(|_| ())
    }

    /// Baut den Längen-Inverter aus den Genauigkeits-Einstellungen.
    pub fn inverter(&self) -> CurveResult<ParameterInverter> {
        let arc_length = ArcLength::new(self.simpson_subdivisions)?;
        ParameterInverter::new(
            arc_length,
            self.inversion_epsilon,
            self.inversion_max_iterations,
        )
    }
}
