//! Zentrale Konfiguration für den Curve Motion Editor.
//!
//! `EngineOptions` wird einmal beim Start geladen und bleibt für die Dauer
//! einer Sitzung fest. Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use curve_motion_engine::{CurveResult, EasingAnchors, SamplingConfig};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

// ── Abtastung ──────────────────────────────────────────────────────

/// Stützpunkte der Formkurven-Vorschau.
pub const SHAPE_SAMPLE_COUNT: usize = 101;
/// Frames der gleichförmigen Trajektorie.
pub const UNIFORM_FRAME_COUNT: usize = 201;
/// Stützpunkte der Easing-Kurven-Vorschau.
pub const EASING_SAMPLE_COUNT: usize = 201;
/// Frames der Easing-Trajektorie (Standard: ein Frame pro Easing-Stützpunkt).
pub const EASED_FRAME_COUNT: usize = 201;

// ── Genauigkeit ────────────────────────────────────────────────────

/// Simpson-Teilintervalle der Bogenlänge.
pub const SIMPSON_SUBDIVISIONS: usize = 6;
/// Abbruchtoleranz der Längen-Inversion.
pub const INVERSION_EPSILON: f64 = 1e-5;
/// Maximale Bisektionsschritte.
pub const INVERSION_MAX_ITERATIONS: usize = 20;

// ── Easing-Anker ───────────────────────────────────────────────────

/// Start-Anker der Easing-Kurve (0 % der Länge).
pub const EASING_START_ANCHOR: [f64; 3] = [150.0, 100.0, 0.0];
/// End-Anker der Easing-Kurve (100 % der Länge).
pub const EASING_END_ANCHOR: [f64; 3] = [1750.0, 900.0, 0.0];

// ── Eingabe-Panels ─────────────────────────────────────────────────

/// Linke Kante der Eingabe-Panels in Screen-Pixeln.
pub const PANEL_LEFT_PX: f64 = 1280.0;
/// Trennlinie zwischen Form-Panel (oben) und Easing-Panel (unten).
pub const PANEL_SPLIT_PX: f64 = 540.0;
/// Untere Kante des Easing-Panels.
pub const PANEL_BOTTOM_PX: f64 = 1080.0;
/// Skalierung Screen → Pfad-Raum (x, y).
pub const PANEL_SCALE: [f64; 2] = [3.0, 2.0];

/// Laufzeit-Optionen der Engine (TOML-persistierbar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    // Abtastung
    /// Stützpunkte der Formkurven-Vorschau
    pub shape_sample_count: usize,
    /// Frames der gleichförmigen Trajektorie
    pub uniform_frame_count: usize,
    /// Stützpunkte der Easing-Kurven-Vorschau
    pub easing_sample_count: usize,
    /// Frames der Easing-Trajektorie
    pub eased_frame_count: usize,

    // Genauigkeit
    /// Simpson-Teilintervalle (gerade, > 0)
    pub simpson_subdivisions: usize,
    /// Abbruchtoleranz der Bisektion
    pub inversion_epsilon: f64,
    /// Maximale Bisektionsschritte
    pub inversion_max_iterations: usize,

    // Easing
    /// Start-Anker der Easing-Kurve
    pub easing_start_anchor: [f64; 3],
    /// End-Anker der Easing-Kurve
    pub easing_end_anchor: [f64; 3],

    // Eingabe
    /// Geometrie der Eingabe-Panels
    pub panels: PanelLayout,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            shape_sample_count: SHAPE_SAMPLE_COUNT,
            uniform_frame_count: UNIFORM_FRAME_COUNT,
            easing_sample_count: EASING_SAMPLE_COUNT,
            eased_frame_count: EASED_FRAME_COUNT,
            simpson_subdivisions: SIMPSON_SUBDIVISIONS,
            inversion_epsilon: INVERSION_EPSILON,
            inversion_max_iterations: INVERSION_MAX_ITERATIONS,
            easing_start_anchor: EASING_START_ANCHOR,
            easing_end_anchor: EASING_END_ANCHOR,
            panels: PanelLayout::default(),
        }
    }
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_motion_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_motion_editor.toml")
    }

    /// Übersetzt die Optionen in die validierte Engine-Konfiguration.
    pub fn sampling_config(&self) -> CurveResult<SamplingConfig> {
        let config = SamplingConfig {
            shape_sample_count: self.shape_sample_count,
            uniform_frame_count: self.uniform_frame_count,
            easing_sample_count: self.easing_sample_count,
            eased_frame_count: self.eased_frame_count,
            simpson_subdivisions: self.simpson_subdivisions,
            inversion_epsilon: self.inversion_epsilon,
            inversion_max_iterations: self.inversion_max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Feste Eck-Anker der Easing-Kurve.
    pub fn easing_anchors(&self) -> EasingAnchors {
        EasingAnchors::new(
            DVec3::from_array(self.easing_start_anchor),
            DVec3::from_array(self.easing_end_anchor),
        )
    }
}

/// Welches Eingabe-Panel getroffen wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPanel {
    /// Oberes Panel: Formkurve
    Shape,
    /// Unteres Panel: Easing-Kurve
    Easing,
}

/// Screen-Geometrie der beiden Eingabe-Panels rechts neben der Hauptansicht.
///
/// Screen-y wächst nach unten, Pfad-y nach oben.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    /// Linke Kante beider Panels
    pub left_px: f64,
    /// Grenze Form-Panel / Easing-Panel
    pub split_px: f64,
    /// Untere Kante des Easing-Panels
    pub bottom_px: f64,
    /// Skalierung Screen → Pfad-Raum
    pub scale: [f64; 2],
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            left_px: PANEL_LEFT_PX,
            split_px: PANEL_SPLIT_PX,
            bottom_px: PANEL_BOTTOM_PX,
            scale: PANEL_SCALE,
        }
    }
}

impl PanelLayout {
    /// Ermittelt das Panel unter einer Screen-Position (None = Hauptansicht).
    pub fn panel_at(&self, screen_pos: DVec2) -> Option<InputPanel> {
        if screen_pos.x < self.left_px {
            return None;
        }
        if screen_pos.y <= self.split_px {
            Some(InputPanel::Shape)
        } else {
            Some(InputPanel::Easing)
        }
    }

    /// Rechnet eine Screen-Position in den Pfad-Raum des Panels um.
    pub fn to_path_space(&self, panel: InputPanel, screen_pos: DVec2) -> DVec3 {
        let baseline = match panel {
            InputPanel::Shape => self.split_px,
            InputPanel::Easing => self.bottom_px,
        };
        DVec3::new(
            (screen_pos.x - self.left_px) * self.scale[0],
            (baseline - screen_pos.y) * self.scale[1],
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_translate_to_valid_config() {
        let config = EngineOptions::default()
            .sampling_config()
            .expect("Standardwerte müssen gültig sein");
        assert_eq!(config.shape_sample_count, 101);
        assert_eq!(config.uniform_frame_count, 201);
        assert_eq!(config.simpson_subdivisions, 6);
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let options = EngineOptions {
            eased_frame_count: 0,
            ..EngineOptions::default()
        };
        assert!(options.sampling_config().is_err());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let options: EngineOptions = toml::from_str("uniform_frame_count = 51\n")
            .expect("Teil-TOML sollte parsen");
        assert_eq!(options.uniform_frame_count, 51);
        assert_eq!(options.shape_sample_count, SHAPE_SAMPLE_COUNT);
        assert_eq!(options.easing_end_anchor, EASING_END_ANCHOR);
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let options = EngineOptions {
            eased_frame_count: 77,
            ..EngineOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EngineOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_panel_mapping_to_path_space() {
        let layout = PanelLayout::default();

        assert_eq!(layout.panel_at(DVec2::new(100.0, 100.0)), None);
        assert_eq!(
            layout.panel_at(DVec2::new(1300.0, 540.0)),
            Some(InputPanel::Shape)
        );
        assert_eq!(
            layout.panel_at(DVec2::new(1300.0, 541.0)),
            Some(InputPanel::Easing)
        );

        let shape = layout.to_path_space(InputPanel::Shape, DVec2::new(1330.0, 490.0));
        assert_eq!(shape, DVec3::new(150.0, 100.0, 0.0));
        let easing = layout.to_path_space(InputPanel::Easing, DVec2::new(1330.0, 1030.0));
        assert_eq!(easing, DVec3::new(150.0, 100.0, 0.0));
    }
}
