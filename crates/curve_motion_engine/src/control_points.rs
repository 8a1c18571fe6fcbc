//! Kontrollpunkt-Sammlungen für Form- und Easing-Kurve.

use crate::error::{CurveError, CurveResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Kontrollpunkt im Pfad-Raum (z bleibt in dieser Anwendung 0).
pub type ControlPoint = DVec3;

/// Anzahl Kontrollpunkte einer kubischen Kurve.
pub const CONTROL_POINT_COUNT: usize = 4;

/// Kontrollpunkte einer kubischen Kurve im Aufbau.
///
/// Erst mit genau 4 Punkten kann die Kurve ausgewertet, vermessen oder
/// abgetastet werden. Weitere Punkte werden abgewiesen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSpec {
    points: Vec<ControlPoint>,
}

impl CurveSpec {
    /// Erstellt eine leere Kurve.
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(CONTROL_POINT_COUNT),
        }
    }

    /// Erstellt eine Kurve aus bis zu 4 Punkten.
    pub fn from_points(points: &[ControlPoint]) -> CurveResult<Self> {
        if points.len() > CONTROL_POINT_COUNT {
            return Err(CurveError::InvalidControlPointCount {
                expected: CONTROL_POINT_COUNT,
                found: points.len(),
            });
        }
        Ok(Self {
            points: points.to_vec(),
        })
    }

    /// Hängt einen Punkt an. Gibt `true` zurück, sobald die Kurve vollständig ist.
    pub fn push(&mut self, point: ControlPoint) -> CurveResult<bool> {
        if self.points.len() >= CONTROL_POINT_COUNT {
            return Err(CurveError::InvalidControlPointCount {
                expected: CONTROL_POINT_COUNT,
                found: self.points.len() + 1,
            });
        }
        self.points.push(point);
        Ok(self.is_complete())
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Anzahl gesetzter Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn noch kein Punkt gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gibt `true` zurück, wenn genau 4 Punkte vorhanden sind.
    pub fn is_complete(&self) -> bool {
        self.points.len() == CONTROL_POINT_COUNT
    }

    /// Read-only Sicht auf die bisher gesetzten Punkte (Vorschau).
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Die 4 Kontrollpunkte einer fertigen Kurve.
    pub fn control_points(&self) -> CurveResult<[ControlPoint; CONTROL_POINT_COUNT]> {
        <[ControlPoint; CONTROL_POINT_COUNT]>::try_from(self.points.as_slice()).map_err(|_| {
            CurveError::InvalidControlPointCount {
                expected: CONTROL_POINT_COUNT,
                found: self.points.len(),
            }
        })
    }
}

/// Feste Eck-Anker der Easing-Kurve.
///
/// Der User setzt nur die beiden inneren Punkte; Start- und End-Anker werden
/// beim ersten bzw. zweiten Punkt automatisch ergänzt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EasingAnchors {
    /// Anker vor dem ersten User-Punkt (P0)
    pub start: ControlPoint,
    /// Anker nach dem zweiten User-Punkt (P3)
    pub end: ControlPoint,
}

impl EasingAnchors {
    /// Erstellt ein Anker-Paar.
    pub fn new(start: ControlPoint, end: ControlPoint) -> Self {
        Self { start, end }
    }

    /// Höhenbereich zwischen den Ankern (entspricht 0 % bis 100 % der Länge).
    pub fn vertical_range(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Fügt einen User-Punkt in die Easing-Kurve ein.
    ///
    /// - leer: Start-Anker + Punkt
    /// - 2 Punkte: Punkt + End-Anker → Kurve vollständig
    ///
    /// Gibt `true` zurück, sobald die Kurve vollständig ist.
    pub fn insert_user_point(&self, spec: &mut CurveSpec, point: ControlPoint) -> CurveResult<bool> {
        match spec.len() {
            0 => {
                spec.push(self.start)?;
                spec.push(point)
            }
            2 => {
                spec.push(point)?;
                spec.push(self.end)
            }
            n => Err(CurveError::InvalidControlPointCount {
                expected: CONTROL_POINT_COUNT,
                found: n + 1,
            }),
        }
    }
}
