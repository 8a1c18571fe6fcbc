//! Abspiel-Zustandsautomat über einer vorberechneten Trajektorie.
//!
//! ```text
//! Idle ──start(Uniform, Some(traj))──▶ PlayingUniform ──tick──▶ PlayingUniform
//!  ▲   ──start(Variable, Some(traj))─▶ PlayingVariable ─tick──▶ PlayingVariable
//!  └──────────────── reset (Kurve geleert / neu gebaut) ◀───────────┘
//! ```
//!
//! Der Frame-Index bleibt am letzten Frame stehen (kein Looping).

use crate::sampler::Trajectory;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Welche Trajektorie abgespielt werden soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackMode {
    /// Konstante Geschwindigkeit
    Uniform,
    /// Geschwindigkeit nach Easing-Kurve
    Variable,
}

/// Abspiel-Zustand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nichts wird abgespielt
    #[default]
    Idle,
    /// Gleichförmige Trajektorie läuft
    PlayingUniform,
    /// Easing-Trajektorie läuft
    PlayingVariable,
}

impl PlaybackState {
    /// Gibt `true` zurück, wenn eine Trajektorie läuft.
    pub fn is_playing(self) -> bool {
        self != Self::Idle
    }

    /// Aktiver Modus (None = Idle).
    pub fn mode(self) -> Option<PlaybackMode> {
        match self {
            Self::Idle => None,
            Self::PlayingUniform => Some(PlaybackMode::Uniform),
            Self::PlayingVariable => Some(PlaybackMode::Variable),
        }
    }
}

impl From<PlaybackMode> for PlaybackState {
    fn from(mode: PlaybackMode) -> Self {
        match mode {
            PlaybackMode::Uniform => Self::PlayingUniform,
            PlaybackMode::Variable => Self::PlayingVariable,
        }
    }
}

/// Schrittweiser Abspieler für genau eine aktive Trajektorie.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryPlayer {
    state: PlaybackState,
    frame_index: usize,
    trajectory: Option<Trajectory>,
}

impl TrajectoryPlayer {
    /// Erstellt einen Abspieler im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Aktueller Frame-Index.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Anzahl Frames der aktiven Trajektorie (0 = Idle).
    pub fn frame_count(&self) -> usize {
        self.trajectory.as_ref().map_or(0, Trajectory::len)
    }

    /// Gibt `true` zurück, wenn der letzte Frame erreicht ist.
    pub fn is_finished(&self) -> bool {
        self.state.is_playing() && self.frame_index + 1 >= self.frame_count()
    }

    /// Startet die Wiedergabe ab Frame 0.
    ///
    /// Nur erlaubt, wenn die passende Trajektorie existiert und nicht leer ist;
    /// sonst bleibt der Zustand unverändert und `false` wird zurückgegeben.
    pub fn start(&mut self, mode: PlaybackMode, trajectory: Option<&Trajectory>) -> bool {
        let Some(trajectory) = trajectory.filter(|t| !t.is_empty()) else {
            return false;
        };
        self.state = mode.into();
        self.frame_index = 0;
        self.trajectory = Some(trajectory.clone());
        true
    }

    /// Liefert den Punkt des aktuellen Frames und rückt einen Frame vor.
    ///
    /// Am letzten Frame bleibt der Index stehen. Im Zustand `Idle`: `None`.
    pub fn tick(&mut self) -> Option<DVec3> {
        if !self.state.is_playing() {
            return None;
        }
        let trajectory = self.trajectory.as_ref()?;
        let point = trajectory.frame(self.frame_index)?;
        if self.frame_index + 1 < trajectory.len() {
            self.frame_index += 1;
        }
        Some(point)
    }

    /// Punkt des aktuellen Frames (der nächste `tick` liefert ihn).
    pub fn current_point(&self) -> Option<DVec3> {
        if !self.state.is_playing() {
            return None;
        }
        self.trajectory.as_ref()?.frame(self.frame_index)
    }

    /// Zurück nach `Idle`, Frame 0; die Trajektorie wird verworfen.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.frame_index = 0;
        self.trajectory = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::TrajectoryKind;

    fn three_frames() -> Trajectory {
        Trajectory::new(
            TrajectoryKind::Uniform,
            vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)],
        )
    }

    #[test]
    fn test_new_player_is_idle() {
        let mut player = TrajectoryPlayer::new();
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(player.tick(), None);
        assert_eq!(player.current_point(), None);
    }

    #[test]
    fn test_start_requires_trajectory() {
        let mut player = TrajectoryPlayer::new();
        assert!(!player.start(PlaybackMode::Uniform, None));
        assert_eq!(player.state(), PlaybackState::Idle);

        let empty = Trajectory::new(TrajectoryKind::Eased, Vec::new());
        assert!(!player.start(PlaybackMode::Variable, Some(&empty)));
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_tick_emits_frames_then_clamps() {
        let trajectory = three_frames();
        let mut player = TrajectoryPlayer::new();
        assert!(player.start(PlaybackMode::Uniform, Some(&trajectory)));
        assert_eq!(player.state(), PlaybackState::PlayingUniform);

        assert_eq!(player.tick(), Some(DVec3::ZERO));
        assert_eq!(player.tick(), Some(DVec3::X));
        assert_eq!(player.tick(), Some(DVec3::new(2.0, 0.0, 0.0)));
        assert!(player.is_finished());
        // Kein Wraparound
        assert_eq!(player.tick(), Some(DVec3::new(2.0, 0.0, 0.0)));
        assert_eq!(player.frame_index(), 2);
    }

    #[test]
    fn test_restart_resets_frame_index() {
        let trajectory = three_frames();
        let mut player = TrajectoryPlayer::new();
        player.start(PlaybackMode::Uniform, Some(&trajectory));
        player.tick();
        player.tick();

        assert!(player.start(PlaybackMode::Variable, Some(&trajectory)));
        assert_eq!(player.state(), PlaybackState::PlayingVariable);
        assert_eq!(player.frame_index(), 0);
        assert_eq!(player.current_point(), Some(DVec3::ZERO));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let trajectory = three_frames();
        let mut player = TrajectoryPlayer::new();
        player.start(PlaybackMode::Uniform, Some(&trajectory));
        player.tick();

        player.reset();
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(player.frame_index(), 0);
        assert_eq!(player.frame_count(), 0);
        assert_eq!(player.tick(), None);
    }

    #[test]
    fn test_state_mode_mapping() {
        assert_eq!(PlaybackState::Idle.mode(), None);
        assert_eq!(
            PlaybackState::from(PlaybackMode::Variable).mode(),
            Some(PlaybackMode::Variable)
        );
    }
}
