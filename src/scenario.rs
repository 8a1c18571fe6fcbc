//! Headless-Szenarien: Kurven aus JSON setzen und eine Wiedergabe aufzeichnen.
//!
//! Ein Szenario ersetzt die interaktive Eingabe. Es wird über denselben
//! Intent-Fluss abgespielt wie Benutzereingaben.

use crate::app::{AppController, AppIntent, AppState};
use crate::shared::EngineOptions;
use anyhow::{bail, Context};
use curve_motion_engine::{PlaybackMode, PlaybackState};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Eingabe eines Szenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// 4 Form-Kontrollpunkte im Pfad-Raum
    pub shape_points: Vec<[f64; 3]>,
    /// 0 oder 2 Easing-User-Punkte (Anker kommen aus den Optionen)
    #[serde(default)]
    pub easing_points: Vec<[f64; 3]>,
    /// Abzuspielender Modus
    pub mode: PlaybackMode,
}

/// Aufgezeichnete Wiedergabe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Abgespielter Modus
    pub mode: PlaybackMode,
    /// Position pro Frame
    pub frames: Vec<[f64; 3]>,
    /// Summierte Sehnenlänge der Frames
    pub chord_length: f64,
}

impl Scenario {
    /// Liest ein Szenario aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szenario nicht lesbar: {}", path.display()))?;
        let scenario = serde_json::from_str(&content)
            .with_context(|| format!("Szenario fehlerhaft: {}", path.display()))?;
        Ok(scenario)
    }
}

/// Spielt ein Szenario ab und zeichnet jeden Frame der Wiedergabe auf.
pub fn run(options: EngineOptions, scenario: &Scenario) -> anyhow::Result<ScenarioReport> {
    let mut state = AppState::with_options(options)?;
    let mut controller = AppController::new();

    controller.handle_intent(&mut state, AppIntent::EditShapeRequested)?;
    for p in &scenario.shape_points {
        let pos = DVec3::from_array(*p);
        controller.handle_intent(&mut state, AppIntent::ShapePointPicked { pos })?;
    }

    if !scenario.easing_points.is_empty() {
        controller.handle_intent(&mut state, AppIntent::EditEasingRequested)?;
        for p in &scenario.easing_points {
            let pos = DVec3::from_array(*p);
            controller.handle_intent(&mut state, AppIntent::EasingPointPicked { pos })?;
        }
    }

    let play = match scenario.mode {
        PlaybackMode::Uniform => AppIntent::PlayUniformRequested,
        PlaybackMode::Variable => AppIntent::PlayVariableRequested,
    };
    controller.handle_intent(&mut state, play)?;
    if state.playback_state() == PlaybackState::Idle {
        let reason = state
            .ui
            .status_message
            .clone()
            .unwrap_or_else(|| "unbekannter Grund".to_string());
        bail!("Wiedergabe nicht gestartet: {reason}");
    }

    let frame_count = state.player.frame_count();
    let mut frames = Vec::with_capacity(frame_count);
    for _ in 0..frame_count {
        let frame = controller.build_presentation_frame(&state);
        if let Some(point) = frame.moving_point {
            frames.push(point);
        }
        controller.handle_intent(&mut state, AppIntent::FrameTick)?;
    }

    let chord_length: f64 = frames.windows(2).map(|w| w[0].distance(w[1])).sum();
    log::info!(
        "Szenario abgespielt: {} Frames, Sehnenlänge {:.3}",
        frames.len(),
        chord_length
    );

    Ok(ScenarioReport {
        mode: scenario.mode,
        frames: frames.iter().map(|p| p.to_array()).collect(),
        chord_length,
    })
}
