//! Handler für die Wiedergabe.

use crate::app::use_cases;
use crate::app::AppState;
use curve_motion_engine::PlaybackMode;

/// Startet die Wiedergabe im gewählten Modus.
pub fn start(state: &mut AppState, mode: PlaybackMode) {
    use_cases::playback::start_playback(state, mode);
}

/// Hält die Wiedergabe an.
pub fn stop(state: &mut AppState) {
    use_cases::playback::stop_playback(state);
}

/// Schaltet einen Frame weiter.
pub fn advance(state: &mut AppState) {
    if use_cases::playback::advance_frame(state).is_none() {
        log::debug!("Frame-Tick ohne aktive Wiedergabe");
    }
}
