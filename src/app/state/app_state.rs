use crate::app::CommandLog;
use crate::shared::EngineOptions;
use curve_motion_engine::{
    CurveSampler, EasingAnchors, PlaybackState, SamplingConfig, TrajectoryPlayer,
};
use glam::DVec3;

use super::{CurveState, EditorState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte, Vorschauen und Trajektorien
    pub curves: CurveState,
    /// Bearbeitungsmodus
    pub editor: EditorState,
    /// Abspieler für die aktive Trajektorie
    pub player: TrajectoryPlayer,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Sitzungs-Optionen (fest ab Erstellung)
    pub options: EngineOptions,
    /// Validierte Abtast-Konfiguration
    pub config: SamplingConfig,
    /// Sampler mit den Genauigkeits-Einstellungen der Sitzung
    pub sampler: CurveSampler,
    /// Feste Eck-Anker der Easing-Kurve
    pub anchors: EasingAnchors,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        let options = EngineOptions::default();
        Self {
            curves: CurveState::new(),
            editor: EditorState::new(),
            player: TrajectoryPlayer::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            anchors: options.easing_anchors(),
            options,
            config: SamplingConfig::default(),
            sampler: CurveSampler::default(),
            should_exit: false,
        }
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    ///
    /// Ungültige Optionen (z.B. ungerade Simpson-Teilung) werden abgewiesen.
    pub fn with_options(options: EngineOptions) -> anyhow::Result<Self> {
        let config = options.sampling_config()?;
        let sampler = CurveSampler::from_config(&config)?;
        Ok(Self {
            anchors: options.easing_anchors(),
            options,
            config,
            sampler,
            ..Self::new()
        })
    }

    /// Aktueller Abspiel-Zustand
    pub fn playback_state(&self) -> PlaybackState {
        self.player.state()
    }

    /// Position des bewegten Punkts im aktuellen Frame (None = Idle)
    pub fn current_playback_point(&self) -> Option<DVec3> {
        self.player.current_point()
    }
}
