//! Darstellungs-Snapshot als expliziter Übergabevertrag zwischen App und Presenter.
//!
//! Lebt im shared-Modul, da `app` ihn baut und ein Presenter ihn konsumiert.

use curve_motion_engine::{ControlPoint, PlaybackState, SampledCurve};
use glam::DVec3;
use std::sync::Arc;

use crate::app::state::EditMode;

/// Read-only Daten für einen Darstellungs-Frame.
///
/// Alle Punktfolgen sind `Arc`-geteilt; ein Clone ist O(1).
#[derive(Debug, Clone)]
pub struct PresentationFrame {
    /// Bisher gesetzte Form-Kontrollpunkte
    pub shape_control_points: Arc<[ControlPoint]>,
    /// Bisher gesetzte Easing-Kontrollpunkte (inkl. Anker)
    pub easing_control_points: Arc<[ControlPoint]>,
    /// Formkurven-Vorschau (ausgeblendet, solange die Form bearbeitet wird)
    pub shape_curve: Option<SampledCurve>,
    /// Easing-Kurven-Vorschau (ausgeblendet, solange das Easing bearbeitet wird)
    pub easing_curve: Option<SampledCurve>,
    /// Aktiver Bearbeitungsmodus
    pub edit_mode: EditMode,
    /// Abspiel-Zustand
    pub playback: PlaybackState,
    /// Frame-Index des bewegten Punkts
    pub frame_index: usize,
    /// Aktuelle Position des bewegten Punkts (None = Idle)
    pub moving_point: Option<DVec3>,
    /// Statuszeile
    pub status_message: Option<String>,
}

impl PresentationFrame {
    /// Gibt zurück, ob ein bewegter Punkt gezeichnet werden soll.
    pub fn has_moving_point(&self) -> bool {
        self.moving_point.is_some()
    }
}
