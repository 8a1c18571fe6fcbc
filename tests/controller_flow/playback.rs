use super::{send, state_with_both_curves, state_with_shape, SHAPE_POINTS};
use curve_motion_editor::{AppCommand, AppController, AppIntent, AppState, PlaybackState};

#[test]
fn test_play_without_trajectory_stays_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::PlayUniformRequested);

    assert_eq!(state.player.state(), PlaybackState::Idle);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_variable_play_requires_easing() {
    let mut controller = AppController::new();
    let mut state = state_with_shape(&mut controller);

    send(&mut controller, &mut state, AppIntent::PlayVariableRequested);
    assert_eq!(state.player.state(), PlaybackState::Idle);

    send(&mut controller, &mut state, AppIntent::PlayUniformRequested);
    assert_eq!(state.player.state(), PlaybackState::PlayingUniform);
}

#[test]
fn test_ticks_walk_the_uniform_trajectory_and_clamp() {
    let mut controller = AppController::new();
    let mut state = state_with_shape(&mut controller);
    let trajectory = state
        .curves
        .uniform_trajectory
        .clone()
        .expect("Trajektorie erwartet");

    send(&mut controller, &mut state, AppIntent::PlayUniformRequested);
    assert_eq!(state.current_playback_point(), trajectory.frame(0));

    for _ in 0..trajectory.len() + 10 {
        send(&mut controller, &mut state, AppIntent::FrameTick);
    }

    assert_eq!(state.player.frame_index(), trajectory.len() - 1);
    assert_eq!(
        state.current_playback_point(),
        trajectory.frame(trajectory.len() - 1)
    );
    assert!(state.player.is_finished());
}

#[test]
fn test_frame_tick_while_idle_logs_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::FrameTick);

    assert!(state.command_log.is_empty());
}

#[test]
fn test_replay_restarts_at_first_frame() {
    let mut controller = AppController::new();
    let mut state = state_with_both_curves(&mut controller);

    send(&mut controller, &mut state, AppIntent::PlayVariableRequested);
    for _ in 0..20 {
        send(&mut controller, &mut state, AppIntent::FrameTick);
    }
    assert_eq!(state.player.frame_index(), 20);

    send(&mut controller, &mut state, AppIntent::PlayUniformRequested);
    assert_eq!(state.player.state(), PlaybackState::PlayingUniform);
    assert_eq!(state.player.frame_index(), 0);
}

#[test]
fn test_shape_rebuild_stops_playback() {
    let mut controller = AppController::new();
    let mut state = state_with_both_curves(&mut controller);

    send(&mut controller, &mut state, AppIntent::PlayVariableRequested);
    send(&mut controller, &mut state, AppIntent::FrameTick);
    assert!(state.player.state().is_playing());

    send(&mut controller, &mut state, AppIntent::ClearShapeRequested);
    assert_eq!(state.player.state(), PlaybackState::Idle);
    assert_eq!(state.current_playback_point(), None);

    send(&mut controller, &mut state, AppIntent::EditShapeRequested);
    for pos in SHAPE_POINTS {
        send(&mut controller, &mut state, AppIntent::ShapePointPicked { pos });
    }
    // Neue Trajektorien, aber keine automatische Wiedergabe
    assert!(state.curves.eased_trajectory.is_some());
    assert_eq!(state.player.state(), PlaybackState::Idle);
}

#[test]
fn test_stop_returns_to_idle() {
    let mut controller = AppController::new();
    let mut state = state_with_shape(&mut controller);

    send(&mut controller, &mut state, AppIntent::PlayUniformRequested);
    send(&mut controller, &mut state, AppIntent::StopPlaybackRequested);

    assert_eq!(state.player.state(), PlaybackState::Idle);
    assert_eq!(state.command_log.last(), Some(&AppCommand::StopPlayback));
}

#[test]
fn test_presentation_frame_follows_playback() {
    let mut controller = AppController::new();
    let mut state = state_with_shape(&mut controller);

    send(&mut controller, &mut state, AppIntent::PlayUniformRequested);
    send(&mut controller, &mut state, AppIntent::FrameTick);
    let frame = controller.build_presentation_frame(&state);

    assert_eq!(frame.playback, PlaybackState::PlayingUniform);
    assert_eq!(frame.frame_index, 1);
    assert_eq!(frame.moving_point, state.current_playback_point());
    assert!(frame.shape_curve.is_some());
}
