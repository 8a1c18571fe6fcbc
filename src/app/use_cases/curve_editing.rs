//! Use-Cases für das Setzen und Löschen von Kontrollpunkten.

use super::trajectory;
use crate::app::state::{CurveTarget, EditEvent};
use crate::app::AppState;
use curve_motion_engine::{CurveResult, CONTROL_POINT_COUNT};
use glam::DVec3;

/// Benutzerpunkte der Easing-Kurve (die Anker kommen automatisch dazu).
const EASING_USER_POINTS: usize = 2;

/// Aktiviert den Bearbeitungsmodus für eine Kurve.
///
/// Die Easing-Kurve kann erst bearbeitet werden, wenn die Formkurve steht.
pub fn begin_edit(state: &mut AppState, target: CurveTarget) {
    let event = EditEvent::EditRequested {
        target,
        shape_ready: state.curves.shape_ready(),
    };
    let Some(mode) = state.editor.mode.transition(event) else {
        let msg = "Zuerst die 4 Punkte der Formkurve setzen".to_string();
        log::warn!("{}", msg);
        state.ui.status_message = Some(msg);
        return;
    };

    state.editor.mode = mode;
    let msg = edit_prompt(state, target);
    log::info!("Bearbeitungsmodus {:?}: {}", mode, msg);
    state.ui.status_message = Some(msg);
}

fn edit_prompt(state: &AppState, target: CurveTarget) -> String {
    let spec = state.curves.spec(target);
    if spec.is_complete() {
        return match target {
            CurveTarget::Shape => "Formkurve ist vollständig, zum Neuzeichnen erst löschen".into(),
            CurveTarget::Easing => "Easing-Kurve ist vollständig, zum Neuzeichnen erst löschen".into(),
        };
    }
    match target {
        CurveTarget::Shape => format!(
            "{} Punkte für die Formkurve wählen",
            CONTROL_POINT_COUNT - spec.len()
        ),
        CurveTarget::Easing => format!(
            "{} Punkte für die Easing-Kurve wählen",
            EASING_USER_POINTS - spec.len() / 2
        ),
    }
}

/// Verarbeitet einen gepickten Punkt für `target`.
///
/// Punkte werden nur im passenden Bearbeitungsmodus angenommen.
pub fn add_control_point(state: &mut AppState, target: CurveTarget, point: DVec3) {
    if !state.editor.mode.accepts(target) {
        log::debug!(
            "Punkt für {:?} ignoriert: Modus {:?}",
            target,
            state.editor.mode
        );
        return;
    }

    let result = match target {
        CurveTarget::Shape => add_shape_point(state, point),
        CurveTarget::Easing => add_easing_point(state, point),
    };
    if let Err(e) = result {
        let msg = format!("Punkt abgewiesen: {e}");
        log::warn!("{}", msg);
        state.ui.status_message = Some(msg);
    }
}

/// Hängt einen Form-Kontrollpunkt an.
///
/// Mit dem 4. Punkt werden Vorschau und Trajektorien gebaut und der
/// Bearbeitungsmodus endet. Gibt `true` zurück, sobald die Kurve vollständig ist.
pub fn add_shape_point(state: &mut AppState, point: DVec3) -> CurveResult<bool> {
    let complete = state.curves.shape_spec.push(point)?;
    log::debug!(
        "Formpunkt {}/{}: {:?}",
        state.curves.shape_spec.len(),
        CONTROL_POINT_COUNT,
        point
    );
    if complete {
        finish_curve(state, CurveTarget::Shape);
    }
    Ok(complete)
}

/// Setzt einen Easing-User-Punkt; die Eck-Anker werden automatisch ergänzt.
///
/// Mit dem 2. User-Punkt werden Easing-Vorschau und Easing-Trajektorie gebaut.
pub fn add_easing_point(state: &mut AppState, point: DVec3) -> CurveResult<bool> {
    let anchors = state.anchors;
    let complete = anchors.insert_user_point(&mut state.curves.easing_spec, point)?;
    log::debug!("Easing-Punkt gesetzt: {:?}", point);
    if complete {
        finish_curve(state, CurveTarget::Easing);
    }
    Ok(complete)
}

fn finish_curve(state: &mut AppState, target: CurveTarget) {
    if let Some(mode) = state.editor.mode.transition(EditEvent::CurveCompleted(target)) {
        state.editor.mode = mode;
    }
    state.ui.status_message = None;
    match target {
        CurveTarget::Shape => trajectory::rebuild_shape(state),
        CurveTarget::Easing => trajectory::rebuild_easing(state),
    }
    log::info!("{:?}-Kurve fertiggestellt", target);
}

/// Leert die Formkurve samt aller abhängigen Folgen.
pub fn clear_shape(state: &mut AppState) {
    state.curves.shape_spec.clear();
    trajectory::rebuild_shape(state);
    leave_cleared(state, CurveTarget::Shape);
    log::info!("Formkurve gelöscht");
}

/// Leert die Easing-Kurve samt Easing-Trajektorie.
pub fn clear_easing(state: &mut AppState) {
    state.curves.easing_spec.clear();
    trajectory::rebuild_easing(state);
    leave_cleared(state, CurveTarget::Easing);
    log::info!("Easing-Kurve gelöscht");
}

fn leave_cleared(state: &mut AppState, target: CurveTarget) {
    if let Some(mode) = state.editor.mode.transition(EditEvent::CurveCleared(target)) {
        state.editor.mode = mode;
    }
    state.ui.status_message = None;
}
