//! Begrenzter Verlauf ausgeführter Commands (Diagnose und Tests).

use super::AppCommand;

/// Ausgeführte Commands in Ausführungsreihenfolge.
///
/// Läuft das Log voll, wird die ältere Hälfte verworfen.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Anzahl geloggter Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_log_drops_older_half() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::AdvanceFrame);
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);

        log.record(&AppCommand::StopPlayback);
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.last(), Some(&AppCommand::StopPlayback));
    }
}
