//! Neuaufbau abgeleiteter Folgen nach Änderungen an einer Kurve.
//!
//! Reihenfolge bei jeder Änderung: Wiedergabe stoppen, abhängige Folgen
//! verwerfen, dann neu bauen, soweit die Kontrollpunkte vollständig sind.
//! Ein fehlgeschlagener Build lässt die Folgen der anderen Kurve unberührt.

use crate::app::AppState;

/// Baut Formkurven-Vorschau, gleichförmige und Easing-Trajektorie neu.
pub fn rebuild_shape(state: &mut AppState) {
    state.player.reset();
    state.curves.invalidate_shape();
    if !state.curves.shape_spec.is_complete() {
        return;
    }

    let sampler = state.sampler;
    let config = state.config;

    match sampler.build_shape_curve(&state.curves.shape_spec, config.shape_sample_count) {
        Ok(curve) => state.curves.shape_curve = Some(curve),
        Err(e) => {
            report_build_failure(state, "Formkurve", &e);
            return;
        }
    }

    match sampler.build_uniform_trajectory(&state.curves.shape_spec, config.uniform_frame_count) {
        Ok(trajectory) => {
            log::info!(
                "Gleichförmige Trajektorie erstellt: {} Frames",
                trajectory.len()
            );
            state.curves.uniform_trajectory = Some(trajectory);
        }
        Err(e) => report_build_failure(state, "Gleichförmige Trajektorie", &e),
    }

    rebuild_eased(state);
}

/// Baut Easing-Kurven-Vorschau und Easing-Trajektorie neu.
pub fn rebuild_easing(state: &mut AppState) {
    state.player.reset();
    state.curves.invalidate_easing();
    if !state.curves.easing_spec.is_complete() {
        return;
    }

    let sampler = state.sampler;
    match sampler.build_easing_curve(&state.curves.easing_spec, state.config.easing_sample_count) {
        Ok(curve) => state.curves.easing_curve = Some(curve),
        Err(e) => {
            report_build_failure(state, "Easing-Kurve", &e);
            return;
        }
    }

    rebuild_eased(state);
}

/// Koppelt Easing-Vorschau und Formkurve zur Easing-Trajektorie.
///
/// Ohne fertige Formkurve oder Easing-Vorschau bleibt die Trajektorie leer.
fn rebuild_eased(state: &mut AppState) {
    state.curves.eased_trajectory = None;
    if !state.curves.shape_spec.is_complete() {
        return;
    }
    let Some(easing_curve) = state.curves.easing_curve.as_ref() else {
        return;
    };

    let result = state.sampler.build_eased_trajectory(
        &state.curves.shape_spec,
        easing_curve,
        state.config.eased_frame_count,
    );
    match result {
        Ok(trajectory) => {
            log::info!("Easing-Trajektorie erstellt: {} Frames", trajectory.len());
            state.curves.eased_trajectory = Some(trajectory);
        }
        Err(e) => report_build_failure(state, "Easing-Trajektorie", &e),
    }
}

fn report_build_failure(state: &mut AppState, what: &str, error: &curve_motion_engine::CurveError) {
    let msg = format!("{what} nicht erstellt: {error}");
    log::warn!("{}", msg);
    state.ui.status_message = Some(msg);
}
