use super::{send, state_with_both_curves, state_with_shape, EASING_POINTS, SHAPE_POINTS};
use curve_motion_editor::{AppController, AppIntent, AppState, EditMode, PlaybackState};
use glam::{DVec2, DVec3};

#[test]
fn test_points_are_ignored_outside_edit_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::ShapePointPicked { pos: DVec3::ZERO },
    );

    assert!(state.curves.shape_spec.is_empty());
}

#[test]
fn test_fourth_shape_point_finishes_edit_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::EditShapeRequested);
    assert_eq!(state.editor.mode, EditMode::EditingShape);

    for (i, pos) in SHAPE_POINTS.into_iter().enumerate() {
        send(&mut controller, &mut state, AppIntent::ShapePointPicked { pos });
        if i < 3 {
            assert_eq!(state.editor.mode, EditMode::EditingShape);
            assert!(state.curves.shape_curve.is_none());
        }
    }

    assert_eq!(state.editor.mode, EditMode::Idle);
    assert!(state.curves.shape_curve.is_some());
    assert!(state.curves.uniform_trajectory.is_some());
}

#[test]
fn test_fifth_shape_point_is_rejected() {
    let mut controller = AppController::new();
    let mut state = state_with_shape(&mut controller);
    let before = state.curves.shape_curve.clone().expect("Vorschau erwartet");

    send(&mut controller, &mut state, AppIntent::EditShapeRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::ShapePointPicked {
            pos: DVec3::new(400.0, 0.0, 0.0),
        },
    );

    assert_eq!(state.curves.shape_spec.len(), 4);
    let after = state.curves.shape_curve.as_ref().expect("Vorschau erwartet");
    assert!(after.ptr_eq(&before));
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_easing_edit_requires_shape_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::EditEasingRequested);

    assert_eq!(state.editor.mode, EditMode::Idle);
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("Formkurve")));
}

#[test]
fn test_easing_anchors_are_synthesized() {
    let mut controller = AppController::new();
    let state = state_with_both_curves(&mut controller);

    let points = state.curves.easing_spec.points();
    assert_eq!(points.len(), 4);
    assert_eq!(points[0], DVec3::new(150.0, 100.0, 0.0));
    assert_eq!(points[1], EASING_POINTS[0]);
    assert_eq!(points[2], EASING_POINTS[1]);
    assert_eq!(points[3], DVec3::new(1750.0, 900.0, 0.0));
}

#[test]
fn test_panel_clicks_feed_the_edited_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::EditShapeRequested);
    // Klick ins Easing-Panel wird im Form-Modus ignoriert
    send(
        &mut controller,
        &mut state,
        AppIntent::PanelClicked {
            screen_pos: DVec2::new(1400.0, 900.0),
        },
    );
    assert!(state.curves.shape_spec.is_empty());
    assert!(state.curves.easing_spec.is_empty());

    send(
        &mut controller,
        &mut state,
        AppIntent::PanelClicked {
            screen_pos: DVec2::new(1300.0, 500.0),
        },
    );
    assert_eq!(
        state.curves.shape_spec.points(),
        &[DVec3::new(60.0, 80.0, 0.0)]
    );
}

#[test]
fn test_shape_change_invalidates_eased_trajectory() {
    let mut controller = AppController::new();
    let mut state = state_with_both_curves(&mut controller);
    let old_eased = state
        .curves
        .eased_trajectory
        .clone()
        .expect("Easing-Trajektorie erwartet");

    send(&mut controller, &mut state, AppIntent::ClearShapeRequested);
    assert!(state.curves.shape_curve.is_none());
    assert!(state.curves.uniform_trajectory.is_none());
    assert!(state.curves.eased_trajectory.is_none());
    // Easing-Vorschau hängt nicht an der Formkurve
    assert!(state.curves.easing_curve.is_some());

    send(&mut controller, &mut state, AppIntent::EditShapeRequested);
    for pos in SHAPE_POINTS {
        send(
            &mut controller,
            &mut state,
            AppIntent::ShapePointPicked {
                pos: pos * 2.0,
            },
        );
    }

    let new_eased = state
        .curves
        .eased_trajectory
        .as_ref()
        .expect("Easing-Trajektorie wird mit neuer Form neu gebaut");
    assert!(!new_eased.ptr_eq(&old_eased));
    assert_ne!(new_eased.points()[100], old_eased.points()[100]);
}

#[test]
fn test_clear_easing_keeps_shape_sequences() {
    let mut controller = AppController::new();
    let mut state = state_with_both_curves(&mut controller);
    let uniform = state.curves.uniform_trajectory.clone();

    send(&mut controller, &mut state, AppIntent::ClearEasingRequested);

    assert!(state.curves.easing_spec.is_empty());
    assert!(state.curves.easing_curve.is_none());
    assert!(state.curves.eased_trajectory.is_none());
    assert_eq!(state.curves.uniform_trajectory, uniform);
}

#[test]
fn test_clear_returns_edit_mode_to_idle() {
    let mut controller = AppController::new();
    let mut state = state_with_shape(&mut controller);

    send(&mut controller, &mut state, AppIntent::EditEasingRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::EasingPointPicked {
            pos: EASING_POINTS[0],
        },
    );
    assert_eq!(state.editor.mode, EditMode::EditingEasing);

    send(&mut controller, &mut state, AppIntent::ClearEasingRequested);

    assert_eq!(state.editor.mode, EditMode::Idle);
    assert_eq!(state.player.state(), PlaybackState::Idle);
}

#[test]
fn test_degenerate_shape_keeps_preview_without_trajectory() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::EditShapeRequested);
    for _ in 0..4 {
        send(
            &mut controller,
            &mut state,
            AppIntent::ShapePointPicked {
                pos: DVec3::new(5.0, 5.0, 0.0),
            },
        );
    }

    assert!(state.curves.shape_curve.is_some());
    assert!(state.curves.uniform_trajectory.is_none());
    assert!(state.ui.status_message.is_some());
}
