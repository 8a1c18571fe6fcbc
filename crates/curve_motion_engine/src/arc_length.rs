//! Bogenlänge L(t) = ∫₀ᵗ ‖P'(u)‖ du per zusammengesetzter Simpson-Regel.
//!
//! Feste Unterteilung (nicht adaptiv): jede Auswertung kostet
//! `subdivisions + 1` Geschwindigkeits-Auswertungen.

use crate::curve::CubicCurve;
use crate::error::{CurveError, CurveResult};

/// Standard-Anzahl Simpson-Teilintervalle.
pub const DEFAULT_SIMPSON_SUBDIVISIONS: usize = 6;

/// Bogenlängen-Schätzer mit fester Simpson-Unterteilung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcLength {
    subdivisions: usize,
}

impl Default for ArcLength {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SIMPSON_SUBDIVISIONS,
        }
    }
}

impl ArcLength {
    /// Erstellt einen Schätzer; `subdivisions` muss gerade und > 0 sein.
    pub fn new(subdivisions: usize) -> CurveResult<Self> {
        if subdivisions == 0 || subdivisions % 2 != 0 {
            return Err(CurveError::InvalidConfig(format!(
                "Simpson-Unterteilung muss gerade und > 0 sein (ist {subdivisions})"
            )));
        }
        Ok(Self { subdivisions })
    }

    /// Anzahl Teilintervalle.
    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Bogenlänge von 0 bis `t`.
    pub fn length_to(&self, curve: &CubicCurve, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let n = self.subdivisions;
        let h = t / n as f64;

        let mut odd = 0.0;
        let mut even = 0.0;
        for i in 1..n {
            let speed = curve.speed(i as f64 * h);
            if i % 2 == 1 {
                odd += speed;
            } else {
                even += speed;
            }
        }

        h / 3.0 * (curve.speed(0.0) + curve.speed(t) + 4.0 * odd + 2.0 * even)
    }

    /// Gesamtlänge L(1).
    pub fn total(&self, curve: &CubicCurve) -> f64 {
        self.length_to(curve, 1.0)
    }
}
