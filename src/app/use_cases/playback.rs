//! Use-Cases für die Wiedergabe des bewegten Punkts.

use crate::app::AppState;
use curve_motion_engine::PlaybackMode;
use glam::DVec3;

/// Startet die Wiedergabe der zum Modus passenden Trajektorie ab Frame 0.
///
/// Fehlt die Trajektorie, bleibt der Abspieler im bisherigen Zustand.
pub fn start_playback(state: &mut AppState, mode: PlaybackMode) {
    let trajectory = match mode {
        PlaybackMode::Uniform => state.curves.uniform_trajectory.as_ref(),
        PlaybackMode::Variable => state.curves.eased_trajectory.as_ref(),
    };

    if state.player.start(mode, trajectory) {
        let msg = match mode {
            PlaybackMode::Uniform => "Punkt bewegt sich mit konstanter Geschwindigkeit",
            PlaybackMode::Variable => "Punkt bewegt sich nach Easing-Kurve",
        };
        log::info!("{} ({} Frames)", msg, state.player.frame_count());
        state.ui.status_message = Some(msg.to_string());
    } else {
        let msg = match mode {
            PlaybackMode::Uniform => "Keine Trajektorie: zuerst die Formkurve setzen",
            PlaybackMode::Variable => "Keine Trajektorie: Form- und Easing-Kurve setzen",
        };
        log::warn!("{}", msg);
        state.ui.status_message = Some(msg.to_string());
    }
}

/// Hält die Wiedergabe an (zurück nach Idle, Frame 0).
pub fn stop_playback(state: &mut AppState) {
    if state.player.state().is_playing() {
        log::info!("Wiedergabe angehalten bei Frame {}", state.player.frame_index());
    }
    state.player.reset();
}

/// Liefert den Punkt des aktuellen Frames und schaltet weiter.
pub fn advance_frame(state: &mut AppState) -> Option<DVec3> {
    state.player.tick()
}
