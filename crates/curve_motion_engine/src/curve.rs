//! Auswertbare kubische Kurve (Kontrollpunkte + Basis).

use crate::basis::{self, CurveBasis};
use crate::control_points::{CONTROL_POINT_COUNT, ControlPoint, CurveSpec};
use crate::error::{CurveError, CurveResult};
use glam::DVec3;

/// Fertige kubische Kurve mit genau 4 Kontrollpunkten.
///
/// Reine, seiteneffektfreie Auswertung von Position und Geschwindigkeit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    basis: CurveBasis,
    points: [ControlPoint; CONTROL_POINT_COUNT],
}

impl CubicCurve {
    /// Erstellt eine Kurve aus 4 Kontrollpunkten.
    pub fn new(basis: CurveBasis, points: [ControlPoint; CONTROL_POINT_COUNT]) -> Self {
        Self { basis, points }
    }

    /// Erstellt eine Kurve aus einem Slice; verlangt genau 4 Punkte.
    pub fn from_slice(basis: CurveBasis, points: &[ControlPoint]) -> CurveResult<Self> {
        let points = <[ControlPoint; CONTROL_POINT_COUNT]>::try_from(points).map_err(|_| {
            CurveError::InvalidControlPointCount {
                expected: CONTROL_POINT_COUNT,
                found: points.len(),
            }
        })?;
        Ok(Self::new(basis, points))
    }

    /// Formkurve (B-Spline) aus einer fertigen `CurveSpec`.
    pub fn shape(spec: &CurveSpec) -> CurveResult<Self> {
        Ok(Self::new(CurveBasis::UniformBSpline, spec.control_points()?))
    }

    /// Easing-Kurve (Bézier) aus einer fertigen `CurveSpec`.
    pub fn easing(spec: &CurveSpec) -> CurveResult<Self> {
        Ok(Self::new(CurveBasis::Bezier, spec.control_points()?))
    }

    /// Verwendete Basis.
    pub fn basis(&self) -> CurveBasis {
        self.basis
    }

    /// Die 4 Kontrollpunkte.
    pub fn points(&self) -> &[ControlPoint; CONTROL_POINT_COUNT] {
        &self.points
    }

    /// Position bei Parameter t ∈ [0, 1].
    pub fn position(&self, t: f64) -> DVec3 {
        match self.basis {
            CurveBasis::UniformBSpline => basis::bspline_position(&self.points, t),
            CurveBasis::Bezier => basis::bezier_position(&self.points, t),
        }
    }

    /// Geschwindigkeit (dP/dt) bei Parameter t.
    pub fn velocity(&self, t: f64) -> DVec3 {
        match self.basis {
            CurveBasis::UniformBSpline => basis::bspline_velocity(&self.points, t),
            CurveBasis::Bezier => basis::bezier_velocity(&self.points, t),
        }
    }

    /// Betrag der Geschwindigkeit ‖dP/dt‖.
    pub fn speed(&self, t: f64) -> f64 {
        self.velocity(t).length()
    }
}

/// Wertet 4 Kontrollpunkte mit der gewählten Basis bei t aus.
pub fn evaluate(basis: CurveBasis, points: &[ControlPoint], t: f64) -> CurveResult<DVec3> {
    Ok(CubicCurve::from_slice(basis, points)?.position(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_rejects_wrong_point_count() {
        let three = [DVec3::ZERO, DVec3::X, DVec3::Y];
        for basis in [CurveBasis::UniformBSpline, CurveBasis::Bezier] {
            assert_eq!(
                evaluate(basis, &three, 0.5),
                Err(CurveError::InvalidControlPointCount {
                    expected: 4,
                    found: 3
                })
            );
        }
    }

    #[test]
    fn test_shape_requires_complete_spec() {
        let mut spec = CurveSpec::new();
        spec.push(DVec3::ZERO).unwrap();
        assert!(CubicCurve::shape(&spec).is_err());
        assert!(CubicCurve::easing(&spec).is_err());
    }

    #[test]
    fn test_basis_dispatch() {
        let points = [DVec3::ZERO, DVec3::X, DVec3::new(2.0, 1.0, 0.0), DVec3::new(3.0, 1.0, 0.0)];
        let shape = CubicCurve::new(CurveBasis::UniformBSpline, points);
        let easing = CubicCurve::new(CurveBasis::Bezier, points);

        assert_eq!(easing.position(0.0), points[0]);
        assert_ne!(shape.position(0.0), points[0]);
        assert!(shape.speed(0.5) > 0.0);
    }
}
