//! Handler für die Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum kontrollierten Beenden.
pub fn request_exit(state: &mut AppState) {
    state.player.reset();
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
