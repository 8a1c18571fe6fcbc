use glam::{DVec2, DVec3};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Formkurve bearbeiten (Taste P)
    EditShapeRequested,
    /// Easing-Kurve bearbeiten (Taste V), nur mit fertiger Formkurve
    EditEasingRequested,
    /// Klick in ein Eingabe-Panel (Screen-Pixel)
    PanelClicked { screen_pos: DVec2 },
    /// Form-Kontrollpunkt direkt im Pfad-Raum
    ShapePointPicked { pos: DVec3 },
    /// Easing-User-Punkt direkt im Pfad-Raum
    EasingPointPicked { pos: DVec3 },
    /// Kurve unter dem Cursor leeren (Taste C)
    ClearAtCursorRequested { screen_pos: DVec2 },
    /// Formkurve leeren
    ClearShapeRequested,
    /// Easing-Kurve leeren
    ClearEasingRequested,
    /// Gleichförmige Bewegung abspielen (Taste 1)
    PlayUniformRequested,
    /// Easing-gesteuerte Bewegung abspielen (Taste 2)
    PlayVariableRequested,
    /// Wiedergabe anhalten
    StopPlaybackRequested,
    /// Presenter fordert den nächsten Frame an
    FrameTick,
    /// Anwendung beenden
    ExitRequested,
}
