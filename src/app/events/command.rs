use crate::app::state::CurveTarget;
use curve_motion_engine::PlaybackMode;
use glam::DVec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Bearbeitungsmodus für eine Kurve aktivieren
    BeginEdit { target: CurveTarget },
    /// Kontrollpunkt an eine Kurve anhängen (Pfad-Raum)
    AddControlPoint { target: CurveTarget, point: DVec3 },
    /// Kurve samt abgeleiteten Folgen leeren
    ClearCurve { target: CurveTarget },
    /// Wiedergabe einer Trajektorie starten
    StartPlayback { mode: PlaybackMode },
    /// Wiedergabe anhalten (zurück nach Idle)
    StopPlayback,
    /// Einen Frame weiterschalten
    AdvanceFrame,
    /// Anwendung beenden
    RequestExit,
}
