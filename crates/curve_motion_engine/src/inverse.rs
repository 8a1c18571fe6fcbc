//! Inversion Länge → Parameter: sucht t mit L(t) ≈ ℓ per Intervallhalbierung.
//!
//! L ist auf [0, 1] monoton nicht-fallend. Die Suche hält daher die Invariante
//! `L(lower) < ℓ ≤ L(upper)` und ersetzt pro Schritt genau die Intervallgrenze
//! auf derselben Seite des Ziels wie der Mittelpunkt.

use crate::arc_length::ArcLength;
use crate::curve::CubicCurve;
use crate::error::{CurveError, CurveResult};

/// Standard-Abbruchtoleranz für |L(mid) − ℓ|.
pub const DEFAULT_INVERSION_EPSILON: f64 = 1e-5;
/// Standard-Obergrenze der Bisektionsschritte.
pub const DEFAULT_INVERSION_MAX_ITERATIONS: usize = 20;
/// Gesamtlängen darunter gelten als degeneriert.
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Ergebnis einer Inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion {
    /// Gefundener Parameter
    pub t: f64,
    /// Verbleibender Fehler L(t) − ℓ
    pub residual: f64,
    /// Benötigte Bisektionsschritte
    pub iterations: usize,
    /// `false` = Iterationsgrenze erreicht, `t` ist nur eine Näherung
    pub converged: bool,
}

impl Inversion {
    fn exact(t: f64) -> Self {
        Self {
            t,
            residual: 0.0,
            iterations: 0,
            converged: true,
        }
    }
}

/// Invertiert die Bogenlänge einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterInverter {
    arc_length: ArcLength,
    epsilon: f64,
    max_iterations: usize,
}

impl Default for ParameterInverter {
    fn default() -> Self {
        Self {
            arc_length: ArcLength::default(),
            epsilon: DEFAULT_INVERSION_EPSILON,
            max_iterations: DEFAULT_INVERSION_MAX_ITERATIONS,
        }
    }
}

impl ParameterInverter {
    /// Erstellt einen Inverter mit eigener Toleranz und Iterationsgrenze.
    pub fn new(arc_length: ArcLength, epsilon: f64, max_iterations: usize) -> CurveResult<Self> {
        if !(epsilon > 0.0) {
            return Err(CurveError::InvalidConfig(format!(
                "Inversions-Toleranz muss > 0 sein (ist {epsilon})"
            )));
        }
        if max_iterations == 0 {
            return Err(CurveError::InvalidConfig(
                "Inversions-Iterationsgrenze muss > 0 sein".to_string(),
            ));
        }
        Ok(Self {
            arc_length,
            epsilon,
            max_iterations,
        })
    }

    /// Der verwendete Bogenlängen-Schätzer.
    pub fn arc_length(&self) -> &ArcLength {
        &self.arc_length
    }

    /// Abbruchtoleranz.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Iterationsgrenze.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Parameter t mit L(t) ≈ `target`.
    ///
    /// Berechnet die Gesamtlänge selbst; für viele Aufrufe auf derselben Kurve
    /// `solve` mit vorberechneter Länge verwenden.
    pub fn invert(&self, curve: &CubicCurve, target: f64) -> CurveResult<f64> {
        let total = self.arc_length.total(curve);
        Ok(self.solve(curve, target, total)?.t)
    }

    /// Bisektion mit vorberechneter Gesamtlänge `total_length` = L(1).
    ///
    /// Ziele außerhalb [0, L(1)] werden auf t = 0 bzw. t = 1 abgebildet.
    /// Wird die Toleranz nicht innerhalb der Iterationsgrenze erreicht,
    /// liefert die Suche den letzten Mittelpunkt (kein Fehler).
    pub fn solve(
        &self,
        curve: &CubicCurve,
        target: f64,
        total_length: f64,
    ) -> CurveResult<Inversion> {
        if !(total_length > DEGENERATE_LENGTH) {
            return Err(CurveError::DegenerateCurve);
        }
        if target <= 0.0 {
            return Ok(Inversion::exact(0.0));
        }
        if target >= total_length {
            return Ok(Inversion::exact(1.0));
        }

        // L(lower) = 0 < target, L(upper) = total_length > target
        let mut lower = 0.0;
        let mut upper = 1.0;
        let mut mid = 0.5;
        let mut residual = f64::INFINITY;

        for iteration in 1..=self.max_iterations {
            mid = 0.5 * (lower + upper);
            residual = self.arc_length.length_to(curve, mid) - target;
            if residual.abs() <= self.epsilon {
                return Ok(Inversion {
                    t: mid,
                    residual,
                    iterations: iteration,
                    converged: true,
                });
            }
            if residual < 0.0 {
                lower = mid;
            } else {
                upper = mid;
            }
        }

        Ok(Inversion {
            t: mid,
            residual,
            iterations: self.max_iterations,
            converged: false,
        })
    }
}
