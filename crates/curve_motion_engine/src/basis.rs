//! Basisfunktionen der beiden Kurvenarten.
//!
//! - **Uniform kubischer B-Spline** (Formkurve): approximierend, läuft i.d.R.
//!   nicht durch die Kontrollpunkte.
//! - **Kubische Bézier** (Easing-Kurve): interpolierend an P0 und P3,
//!   ausgewertet per De-Casteljau.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Auswertungs-Strategie einer kubischen Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveBasis {
    /// Uniform kubischer B-Spline (Formkurve)
    UniformBSpline,
    /// Kubische Bézier per De-Casteljau (Easing-Kurve)
    Bezier,
}

/// B-Spline-Gewichte b0..b3 bei t ∈ [0, 1].
///
/// Summe ist für alle t gleich 1 (Zerlegung der Eins).
pub fn bspline_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let inv = 1.0 - t;
    [
        inv * inv * inv / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

/// Ableitungs-Gewichte d0..d3 des B-Splines (Summe 0).
pub fn bspline_derivative_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let inv = 1.0 - t;
    [
        -inv * inv / 2.0,
        (3.0 * t2 - 4.0 * t) / 2.0,
        (-3.0 * t2 + 2.0 * t + 1.0) / 2.0,
        t2 / 2.0,
    ]
}

/// Σ wᵢ·Pᵢ
fn blend(points: &[DVec3; 4], weights: [f64; 4]) -> DVec3 {
    points
        .iter()
        .zip(weights)
        .fold(DVec3::ZERO, |acc, (p, w)| acc + w * *p)
}

/// Position auf dem B-Spline.
pub fn bspline_position(points: &[DVec3; 4], t: f64) -> DVec3 {
    blend(points, bspline_weights(t))
}

/// Geschwindigkeit (1. Ableitung nach t) des B-Splines.
pub fn bspline_velocity(points: &[DVec3; 4], t: f64) -> DVec3 {
    blend(points, bspline_derivative_weights(t))
}

/// Position auf der Bézier-Kurve über drei Ebenen linearer Interpolation.
pub fn bezier_position(points: &[DVec3; 4], t: f64) -> DVec3 {
    let [p0, p1, p2, p3] = *points;
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    ab.lerp(bc, t)
}

/// Geschwindigkeit der Bézier-Kurve: 3 · quadratische Bézier der Differenzen.
pub fn bezier_velocity(points: &[DVec3; 4], t: f64) -> DVec3 {
    let [p0, p1, p2, p3] = *points;
    let d0 = p1 - p0;
    let d1 = p2 - p1;
    let d2 = p3 - p2;
    3.0 * d0.lerp(d1, t).lerp(d1.lerp(d2, t), t)
}
