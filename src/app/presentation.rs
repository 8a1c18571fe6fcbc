//! Builder für Darstellungs-Snapshots aus dem AppState.

use crate::app::state::EditMode;
use crate::app::AppState;
use crate::shared::PresentationFrame;

/// Baut einen PresentationFrame aus dem aktuellen AppState.
pub fn build(state: &AppState) -> PresentationFrame {
    let mode = state.editor.mode;

    // Vorschau der gerade bearbeiteten Kurve bleibt verborgen
    let shape_curve = match mode {
        EditMode::EditingShape => None,
        _ => state.curves.shape_curve.clone(),
    };
    let easing_curve = match mode {
        EditMode::EditingEasing => None,
        _ => state.curves.easing_curve.clone(),
    };

    PresentationFrame {
        shape_control_points: state.curves.shape_spec.points().into(),
        easing_control_points: state.curves.easing_spec.points().into(),
        shape_curve,
        easing_curve,
        edit_mode: mode,
        playback: state.player.state(),
        frame_index: state.player.frame_index(),
        moving_point: state.current_playback_point(),
        status_message: state.ui.status_message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::EditMode;
    use crate::app::use_cases::curve_editing;
    use crate::app::AppState;
    use glam::DVec3;

    fn state_with_shape() -> AppState {
        let mut state = AppState::new();
        for p in [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(100.0, 0.0, 0.0),
            DVec3::new(200.0, 100.0, 0.0),
            DVec3::new(300.0, 100.0, 0.0),
        ] {
            curve_editing::add_shape_point(&mut state, p).expect("Punkt sollte passen");
        }
        state
    }

    #[test]
    fn build_shares_preview_allocation() {
        let state = state_with_shape();

        let frame = build(&state);

        let preview = frame.shape_curve.as_ref().expect("Vorschau erwartet");
        let stored = state.curves.shape_curve.as_ref().expect("Vorschau erwartet");
        assert!(preview.ptr_eq(stored));
        assert_eq!(frame.shape_control_points.len(), 4);
        assert!(!frame.has_moving_point());
    }

    #[test]
    fn build_hides_preview_while_editing_that_curve() {
        let mut state = state_with_shape();
        state.editor.mode = EditMode::EditingShape;

        let frame = build(&state);

        assert!(frame.shape_curve.is_none());
        assert_eq!(frame.edit_mode, EditMode::EditingShape);
    }
}
