//! Kontrollpunkte beider Kurven und alle daraus abgeleiteten Folgen.

use curve_motion_engine::{CurveSpec, SampledCurve, Trajectory};

use super::CurveTarget;

/// Form- und Easing-Kurve samt Vorschauen und Trajektorien.
///
/// Abgeleitete Werte werden nie verändert, nur als Ganzes ersetzt oder
/// verworfen (`Option` = noch nicht gebaut bzw. veraltet).
#[derive(Debug, Clone, Default)]
pub struct CurveState {
    /// Kontrollpunkte der Formkurve
    pub shape_spec: CurveSpec,
    /// Kontrollpunkte der Easing-Kurve (inkl. Anker)
    pub easing_spec: CurveSpec,
    /// Formkurven-Vorschau
    pub shape_curve: Option<SampledCurve>,
    /// Easing-Kurven-Vorschau
    pub easing_curve: Option<SampledCurve>,
    /// Trajektorie mit konstanter Geschwindigkeit
    pub uniform_trajectory: Option<Trajectory>,
    /// Trajektorie nach Easing-Kurve
    pub eased_trajectory: Option<Trajectory>,
}

impl CurveState {
    /// Erstellt einen leeren Kurvenzustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kontrollpunkte der Kurve `target`.
    pub fn spec(&self, target: CurveTarget) -> &CurveSpec {
        match target {
            CurveTarget::Shape => &self.shape_spec,
            CurveTarget::Easing => &self.easing_spec,
        }
    }

    /// Gibt `true` zurück, wenn die Formkurven-Vorschau existiert.
    pub fn shape_ready(&self) -> bool {
        self.shape_curve.is_some()
    }

    /// Verwirft alles, was von der Formkurve abhängt.
    ///
    /// Die Easing-Trajektorie koppelt an die Formkurve und fällt mit weg.
    pub fn invalidate_shape(&mut self) {
        self.shape_curve = None;
        self.uniform_trajectory = None;
        self.eased_trajectory = None;
    }

    /// Verwirft alles, was von der Easing-Kurve abhängt.
    pub fn invalidate_easing(&mut self) {
        self.easing_curve = None;
        self.eased_trajectory = None;
    }
}
