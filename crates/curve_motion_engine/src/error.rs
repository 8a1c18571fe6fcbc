//! Fehlertypen der Trajektorien-Engine.

use thiserror::Error;

/// Fehler bei Auswertung, Vermessung oder Abtastung einer Kurve.
///
/// Alle Fehler sind lokal auf den jeweiligen Build-Aufruf begrenzt;
/// bereits veröffentlichte Folgen bleiben davon unberührt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Die Kurve hält nicht genau die benötigte Anzahl Kontrollpunkte.
    #[error("ungültige Kontrollpunkt-Anzahl: erwartet {expected}, vorhanden {found}")]
    InvalidControlPointCount {
        /// Benötigte Anzahl
        expected: usize,
        /// Tatsächliche (bzw. nach dem Einfügen resultierende) Anzahl
        found: usize,
    },

    /// Gesamtlänge ist numerisch null, Längen-Inversion nicht definiert.
    #[error("degenerierte Kurve: Gesamtlänge ist numerisch null")]
    DegenerateCurve,

    /// Start- und End-Anker der Easing-Kurve liegen auf gleicher Höhe.
    #[error("degenerierter Easing-Bereich: Start- und End-Anker haben dieselbe Höhe")]
    DegenerateEasingRange,

    /// Zu wenige Stützpunkte/Frames angefordert.
    #[error("ungültige Stützpunkt-Anzahl: {requested} (mindestens 2)")]
    InvalidSampleCount {
        /// Angeforderte Anzahl
        requested: usize,
    },

    /// Ungültige numerische Konfiguration.
    #[error("ungültige Konfiguration: {0}")]
    InvalidConfig(String),
}

/// Ergebnis-Alias für Engine-Operationen.
pub type CurveResult<T> = Result<T, CurveError>;
