//! Unveränderliche Punktfolgen: Vorschau-Kurven und Trajektorien.
//!
//! Beide halten ihre Punkte in einem `Arc<[DVec3]>`. Ein Clone ist O(1);
//! ein neuer Build erzeugt immer eine neue Allokation, bestehende Folgen
//! werden nie elementweise verändert.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Abgetastete Kurve fester Länge (Vorschau für den Presenter).
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: Arc<[DVec3]>,
}

impl SampledCurve {
    pub(crate) fn new(points: Vec<DVec3>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Alle Stützpunkte.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Anzahl Stützpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Stützpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gibt `true` zurück, wenn beide Werte dieselbe Allokation teilen.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}

/// Herkunft einer Trajektorie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrajectoryKind {
    /// Konstante Geschwindigkeit entlang der Formkurve
    Uniform,
    /// Geschwindigkeit nach Easing-Kurve
    Eased,
}

/// Positionen pro Animations-Frame 0..N-1.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    kind: TrajectoryKind,
    points: Arc<[DVec3]>,
}

impl Trajectory {
    pub(crate) fn new(kind: TrajectoryKind, points: Vec<DVec3>) -> Self {
        Self {
            kind,
            points: points.into(),
        }
    }

    /// Herkunft der Trajektorie.
    pub fn kind(&self) -> TrajectoryKind {
        self.kind
    }

    /// Position des Frames `index`.
    pub fn frame(&self, index: usize) -> Option<DVec3> {
        self.points.get(index).copied()
    }

    /// Alle Frame-Positionen.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Anzahl Frames.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Frames vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Summierte Sehnenlänge über alle Frames.
    pub fn chord_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Gibt `true` zurück, wenn beide Werte dieselbe Allokation teilen.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}
