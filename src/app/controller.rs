//! Application Controller für zentrale Event-Verarbeitung.

use super::presentation;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::PresentationFrame;

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
///
/// Hält selbst keinen Zustand; mehrere Controller/States können nebeneinander
/// existieren.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurven-Bearbeitung ===
            AppCommand::BeginEdit { target } => handlers::editing::begin_edit(state, target),
            AppCommand::AddControlPoint { target, point } => {
                handlers::editing::add_control_point(state, target, point)
            }
            AppCommand::ClearCurve { target } => handlers::editing::clear_curve(state, target),

            // === Wiedergabe ===
            AppCommand::StartPlayback { mode } => handlers::playback::start(state, mode),
            AppCommand::StopPlayback => handlers::playback::stop(state),
            AppCommand::AdvanceFrame => handlers::playback::advance(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }

    /// Baut den Darstellungs-Snapshot aus dem aktuellen AppState.
    pub fn build_presentation_frame(&self, state: &AppState) -> PresentationFrame {
        presentation::build(state)
    }
}
