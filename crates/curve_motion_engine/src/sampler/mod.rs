//! Abtastung: Vorschau-Kurven und Trajektorien aus fertigen Kurven.
//!
//! Alle Builds sind reine Funktionen ihrer Eingaben und liefern neue,
//! unveränderliche Folgen.
//!
//! - `build_shape_curve`: Formkurve bei gleichmäßigen t-Schritten
//! - `build_uniform_trajectory`: gleichmäßige Bogenlängen-Schritte (konstante Geschwindigkeit)
//! - `build_easing_curve`: Easing-Kurve bei gleichmäßigen t-Schritten
//! - `build_eased_trajectory`: Höhe der Easing-Kurve als Anteil der Formkurven-Länge

mod sequence;

pub use sequence::{SampledCurve, Trajectory, TrajectoryKind};

use crate::config::SamplingConfig;
use crate::control_points::CurveSpec;
use crate::curve::CubicCurve;
use crate::error::{CurveError, CurveResult};
use crate::inverse::{DEGENERATE_LENGTH, ParameterInverter};
use glam::DVec3;

/// Baut Punktfolgen aus Form- und Easing-Kurven.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurveSampler {
    inverter: ParameterInverter,
}

impl CurveSampler {
    /// Erstellt einen Sampler mit gegebenem Längen-Inverter.
    pub fn new(inverter: ParameterInverter) -> Self {
        Self { inverter }
    }

    /// Erstellt einen Sampler aus den Genauigkeits-Einstellungen der Konfiguration.
    pub fn from_config(config: &SamplingConfig) -> CurveResult<Self> {
        Ok(Self::new(config.inverter()?))
    }

    /// Der verwendete Längen-Inverter.
    pub fn inverter(&self) -> &ParameterInverter {
        &self.inverter
    }

    /// Gesamtlänge der Formkurve.
    pub fn shape_length(&self, shape_spec: &CurveSpec) -> CurveResult<f64> {
        let shape = CubicCurve::shape(shape_spec)?;
        Ok(self.inverter.arc_length().total(&shape))
    }

    /// Formkurven-Vorschau: B-Spline bei t = i / (n − 1).
    pub fn build_shape_curve(
        &self,
        shape_spec: &CurveSpec,
        sample_count: usize,
    ) -> CurveResult<SampledCurve> {
        let shape = CubicCurve::shape(shape_spec)?;
        Ok(SampledCurve::new(sample_uniform_t(&shape, sample_count)?))
    }

    /// Easing-Kurven-Vorschau: Bézier bei t = i / (n − 1).
    pub fn build_easing_curve(
        &self,
        easing_spec: &CurveSpec,
        sample_count: usize,
    ) -> CurveResult<SampledCurve> {
        let easing = CubicCurve::easing(easing_spec)?;
        Ok(SampledCurve::new(sample_uniform_t(&easing, sample_count)?))
    }

    /// Trajektorie mit konstanter Geschwindigkeit entlang der Formkurve.
    ///
    /// Frame i liegt bei Bogenlänge ℓᵢ = i · L(1) / (n − 1).
    pub fn build_uniform_trajectory(
        &self,
        shape_spec: &CurveSpec,
        frame_count: usize,
    ) -> CurveResult<Trajectory> {
        let shape = CubicCurve::shape(shape_spec)?;
        check_sample_count(frame_count)?;
        let total = self.checked_total(&shape)?;

        let last = (frame_count - 1) as f64;
        let mut approximated = 0usize;
        let mut points = Vec::with_capacity(frame_count);
        for i in 0..frame_count {
            let fraction = i as f64 / last;
            let inversion = self.inverter.solve(&shape, fraction * total, total)?;
            if !inversion.converged {
                approximated += 1;
            }
            points.push(shape.position(inversion.t));
        }

        log::debug!(
            "Gleichförmige Trajektorie: {} Frames, Länge {:.3}, {} genähert",
            frame_count,
            total,
            approximated
        );
        Ok(Trajectory::new(TrajectoryKind::Uniform, points))
    }

    /// Trajektorie, deren Geschwindigkeit die Easing-Kurve vorgibt.
    ///
    /// Die Höhe jedes Easing-Stützpunkts wird relativ zum Höhenbereich
    /// zwischen erstem und letztem Stützpunkt (den Ankern) als Anteil der
    /// Formkurven-Länge gelesen und gegen L(t) der Formkurve invertiert.
    /// Der erste Frame liegt damit bei Länge 0, der letzte bei L(1).
    ///
    /// Weicht `frame_count` von der Stützpunkt-Anzahl ab, wird die Höhe
    /// zwischen benachbarten Stützpunkten linear interpoliert.
    pub fn build_eased_trajectory(
        &self,
        shape_spec: &CurveSpec,
        easing_curve: &SampledCurve,
        frame_count: usize,
    ) -> CurveResult<Trajectory> {
        let shape = CubicCurve::shape(shape_spec)?;
        check_sample_count(frame_count)?;
        let samples = easing_curve.points();
        check_sample_count(samples.len())?;

        let y_start = samples[0].y;
        let y_end = samples[samples.len() - 1].y;
        let range = y_end - y_start;
        if range.abs() <= f64::EPSILON * y_start.abs().max(y_end.abs()).max(1.0) {
            return Err(CurveError::DegenerateEasingRange);
        }
        let total = self.checked_total(&shape)?;

        if frame_count != samples.len() {
            log::debug!(
                "Easing-Höhen werden von {} Stützpunkten auf {} Frames interpoliert",
                samples.len(),
                frame_count
            );
        }

        let mut approximated = 0usize;
        let mut points = Vec::with_capacity(frame_count);
        for i in 0..frame_count {
            let height = easing_height_at(samples, i, frame_count);
            let fraction = ((height - y_start) / range).clamp(0.0, 1.0);
            let inversion = self.inverter.solve(&shape, fraction * total, total)?;
            if !inversion.converged {
                approximated += 1;
            }
            points.push(shape.position(inversion.t));
        }

        log::debug!(
            "Easing-Trajektorie: {} Frames, Länge {:.3}, {} genähert",
            frame_count,
            total,
            approximated
        );
        Ok(Trajectory::new(TrajectoryKind::Eased, points))
    }

    fn checked_total(&self, curve: &CubicCurve) -> CurveResult<f64> {
        let total = self.inverter.arc_length().total(curve);
        if !(total > DEGENERATE_LENGTH) {
            return Err(CurveError::DegenerateCurve);
        }
        Ok(total)
    }
}

fn check_sample_count(count: usize) -> CurveResult<()> {
    if count < 2 {
        return Err(CurveError::InvalidSampleCount { requested: count });
    }
    Ok(())
}

/// Kurvenpunkte bei gleichmäßigen Parameterschritten.
fn sample_uniform_t(curve: &CubicCurve, sample_count: usize) -> CurveResult<Vec<DVec3>> {
    check_sample_count(sample_count)?;
    let last = (sample_count - 1) as f64;
    Ok((0..sample_count)
        .map(|i| curve.position(i as f64 / last))
        .collect())
}

/// Easing-Höhe für Frame `frame` von `frame_count`, linear zwischen Stützpunkten.
fn easing_height_at(samples: &[DVec3], frame: usize, frame_count: usize) -> f64 {
    let segments = samples.len() - 1;
    let position = frame as f64 * segments as f64 / (frame_count - 1) as f64;
    let index = (position.floor() as usize).min(segments - 1);
    let frac = position - index as f64;
    samples[index].y * (1.0 - frac) + samples[index + 1].y * frac
}
