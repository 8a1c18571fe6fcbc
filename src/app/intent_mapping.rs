//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::CurveTarget;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::InputPanel;
use curve_motion_engine::PlaybackMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::EditShapeRequested => vec![AppCommand::BeginEdit {
            target: CurveTarget::Shape,
        }],
        AppIntent::EditEasingRequested => vec![AppCommand::BeginEdit {
            target: CurveTarget::Easing,
        }],
        AppIntent::PanelClicked { screen_pos } => {
            let layout = &state.options.panels;
            match layout.panel_at(screen_pos) {
                Some(panel) => vec![AppCommand::AddControlPoint {
                    target: panel_target(panel),
                    point: layout.to_path_space(panel, screen_pos),
                }],
                None => Vec::new(),
            }
        }
        AppIntent::ShapePointPicked { pos } => vec![AppCommand::AddControlPoint {
            target: CurveTarget::Shape,
            point: pos,
        }],
        AppIntent::EasingPointPicked { pos } => vec![AppCommand::AddControlPoint {
            target: CurveTarget::Easing,
            point: pos,
        }],
        AppIntent::ClearAtCursorRequested { screen_pos } => {
            match state.options.panels.panel_at(screen_pos) {
                Some(panel) => vec![AppCommand::ClearCurve {
                    target: panel_target(panel),
                }],
                None => Vec::new(),
            }
        }
        AppIntent::ClearShapeRequested => vec![AppCommand::ClearCurve {
            target: CurveTarget::Shape,
        }],
        AppIntent::ClearEasingRequested => vec![AppCommand::ClearCurve {
            target: CurveTarget::Easing,
        }],
        AppIntent::PlayUniformRequested => vec![AppCommand::StartPlayback {
            mode: PlaybackMode::Uniform,
        }],
        AppIntent::PlayVariableRequested => vec![AppCommand::StartPlayback {
            mode: PlaybackMode::Variable,
        }],
        AppIntent::StopPlaybackRequested => vec![AppCommand::StopPlayback],
        AppIntent::FrameTick => {
            if state.player.state().is_playing() {
                vec![AppCommand::AdvanceFrame]
            } else {
                Vec::new()
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn panel_target(panel: InputPanel) -> CurveTarget {
    match panel {
        InputPanel::Shape => CurveTarget::Shape,
        InputPanel::Easing => CurveTarget::Easing,
    }
}
