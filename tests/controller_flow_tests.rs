use curve_motion_editor::{AppCommand, AppController, AppIntent, AppState, EditMode};
use glam::DVec3;

#[path = "controller_flow/editing.rs"]
mod editing;
#[path = "controller_flow/playback.rs"]
mod playback;

pub(crate) const SHAPE_POINTS: [DVec3; 4] = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(100.0, 0.0, 0.0),
    DVec3::new(200.0, 100.0, 0.0),
    DVec3::new(300.0, 100.0, 0.0),
];

pub(crate) const EASING_POINTS: [DVec3; 2] =
    [DVec3::new(700.0, 150.0, 0.0), DVec3::new(1200.0, 850.0, 0.0)];

pub(crate) fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

pub(crate) fn state_with_shape(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    send(controller, &mut state, AppIntent::EditShapeRequested);
    for pos in SHAPE_POINTS {
        send(controller, &mut state, AppIntent::ShapePointPicked { pos });
    }
    state
}

pub(crate) fn state_with_both_curves(controller: &mut AppController) -> AppState {
    let mut state = state_with_shape(controller);
    send(controller, &mut state, AppIntent::EditEasingRequested);
    for pos in EASING_POINTS {
        send(controller, &mut state, AppIntent::EasingPointPicked { pos });
    }
    state
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_full_session_builds_all_sequences() {
    let mut controller = AppController::new();
    let state = state_with_both_curves(&mut controller);

    assert_eq!(state.editor.mode, EditMode::Idle);
    assert_eq!(state.curves.shape_curve.as_ref().map(|c| c.len()), Some(101));
    assert_eq!(state.curves.easing_curve.as_ref().map(|c| c.len()), Some(201));
    assert_eq!(
        state.curves.uniform_trajectory.as_ref().map(|t| t.len()),
        Some(201)
    );
    assert_eq!(
        state.curves.eased_trajectory.as_ref().map(|t| t.len()),
        Some(201)
    );
}

#[test]
fn test_independent_states_do_not_share_curves() {
    let mut controller = AppController::new();
    let with_shape = state_with_shape(&mut controller);
    let empty = AppState::new();

    assert!(with_shape.curves.shape_curve.is_some());
    assert!(empty.curves.shape_curve.is_none());
}
