//! Bearbeitungsmodus: welche Kurve gerade Kontrollpunkte annimmt.
//!
//! ```text
//!            edit(Shape)               4. Formpunkt / clear(Shape)
//! Idle ─────────────────▶ EditingShape ─────────────────────────▶ Idle
//!   │  ◀──────────────────────┐   ▲
//!   │ edit(Easing)            │   │ edit(Shape)
//!   ▼  [Formkurve vorhanden]  │   │
//! EditingEasing ──────────────┘───┘
//!     2. User-Punkt / clear(Easing)
//! ```

/// Eine der beiden unabhängigen Kurven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveTarget {
    /// Geometrischer Pfad (B-Spline)
    Shape,
    /// Geschwindigkeitsprofil (Bézier)
    Easing,
}

/// Aktiver Bearbeitungsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Keine Kurve nimmt Punkte an
    #[default]
    Idle,
    /// Form-Kontrollpunkte werden gesetzt
    EditingShape,
    /// Easing-Punkte werden gesetzt
    EditingEasing,
}

/// Ereignisse, die den Bearbeitungsmodus ändern können.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// Bearbeitung einer Kurve angefordert
    EditRequested {
        target: CurveTarget,
        shape_ready: bool,
    },
    /// Kurve hat alle Punkte erhalten
    CurveCompleted(CurveTarget),
    /// Kurve wurde geleert
    CurveCleared(CurveTarget),
}

impl EditMode {
    /// Gibt die gerade bearbeitete Kurve zurück.
    pub fn target(self) -> Option<CurveTarget> {
        match self {
            Self::Idle => None,
            Self::EditingShape => Some(CurveTarget::Shape),
            Self::EditingEasing => Some(CurveTarget::Easing),
        }
    }

    /// Gibt `true` zurück, wenn Punkte für `target` angenommen werden.
    pub fn accepts(self, target: CurveTarget) -> bool {
        self.target() == Some(target)
    }

    /// Übergangstabelle. `None` = Ereignis im aktuellen Modus nicht erlaubt.
    pub fn transition(self, event: EditEvent) -> Option<Self> {
        match event {
            EditEvent::EditRequested {
                target: CurveTarget::Shape,
                ..
            } => Some(Self::EditingShape),
            EditEvent::EditRequested {
                target: CurveTarget::Easing,
                shape_ready,
            } => shape_ready.then_some(Self::EditingEasing),
            EditEvent::CurveCompleted(target) => self.accepts(target).then_some(Self::Idle),
            EditEvent::CurveCleared(target) => Some(if self.accepts(target) {
                Self::Idle
            } else {
                self
            }),
        }
    }
}

/// Zustand der Kurvenbearbeitung
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditMode,
}

impl EditorState {
    /// Erstellt den Standard-Zustand (Idle).
    pub fn new() -> Self {
        Self::default()
    }
}
