//! Handler für Bearbeitungsmodus und Kontrollpunkte.

use crate::app::state::CurveTarget;
use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec3;

/// Aktiviert den Bearbeitungsmodus für eine Kurve.
pub fn begin_edit(state: &mut AppState, target: CurveTarget) {
    use_cases::curve_editing::begin_edit(state, target);
}

/// Hängt einen Kontrollpunkt an die Kurve an, sofern sie bearbeitet wird.
pub fn add_control_point(state: &mut AppState, target: CurveTarget, point: DVec3) {
    use_cases::curve_editing::add_control_point(state, target, point);
}

/// Leert eine Kurve samt abgeleiteter Folgen.
pub fn clear_curve(state: &mut AppState, target: CurveTarget) {
    match target {
        CurveTarget::Shape => use_cases::curve_editing::clear_shape(state),
        CurveTarget::Easing => use_cases::curve_editing::clear_easing(state),
    }
}
