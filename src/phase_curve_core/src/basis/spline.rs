use itertools::Itertools;
use lazy_static::lazy_static;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angle::PhaseAngle;
use crate::constants::{
    PublishedSpline, PHI1_SPLINE, PHI2_SPLINE, PHI3_SPLINE, SPLINE_TABLE_VERSION,
};
use crate::errors::{Error, PhaseCurveResult};

lazy_static! {
    /// Knot table of the first H,G1,G2 basis function.
    pub static ref PHI1_TABLE: SplineKnotTable =
        SplineKnotTable::from_published(&PHI1_SPLINE).expect("Published PHI1 table is invalid.");

    /// Knot table of the second H,G1,G2 basis function.
    pub static ref PHI2_TABLE: SplineKnotTable =
        SplineKnotTable::from_published(&PHI2_SPLINE).expect("Published PHI2 table is invalid.");

    /// Knot table of the third H,G1,G2 basis function.
    pub static ref PHI3_TABLE: SplineKnotTable =
        SplineKnotTable::from_published(&PHI3_SPLINE).expect("Published PHI3 table is invalid.");
}

/// A single anchor point of a piecewise cubic Hermite function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineKnot {
    /// Phase angle of the knot in radians.
    pub angle: f64,

    /// Function value at the knot.
    pub value: f64,

    /// Derivative with respect to phase angle in radians at the knot.
    pub derivative: f64,
}

/// Piecewise cubic Hermite function defined by a table of knots.
///
/// Between two knots the function is the unique cubic matching value and derivative at
/// both ends. Past the last knot it continues linearly with the last knot's value and
/// derivative, without limit.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineKnotTable {
    knots: Box<[SplineKnot]>,
}

impl SplineKnotTable {
    /// Construct a table directly from knots.
    ///
    /// The first knot must be at zero phase and angles must be strictly increasing.
    pub fn new(knots: Vec<SplineKnot>) -> PhaseCurveResult<Self> {
        if knots.len() < 2 {
            Err(Error::ValueError(
                "A spline knot table requires at least two knots.".into(),
            ))?;
        }
        if knots[0].angle != 0.0 {
            Err(Error::ValueError(format!(
                "The first spline knot must be at zero phase, got {} rad.",
                knots[0].angle
            )))?;
        }
        if !knots.iter().tuple_windows().all(|(a, b)| a.angle < b.angle) {
            Err(Error::ValueError(
                "Spline knot angles must be strictly increasing.".into(),
            ))?;
        }
        Ok(Self {
            knots: knots.into(),
        })
    }

    /// Build the knot table of a published clamped cubic spline.
    ///
    /// Interior derivatives are solved from the condition that the second derivative is
    /// continuous across every interior knot. If the definition includes a leading
    /// linear segment, a knot at zero phase with that slope is prepended.
    pub fn from_published(spline: &PublishedSpline) -> PhaseCurveResult<Self> {
        if spline.angles_deg.len() != spline.values.len() {
            Err(Error::ValueError(format!(
                "Spline has {} angles but {} values.",
                spline.angles_deg.len(),
                spline.values.len()
            )))?;
        }
        let angles = spline
            .angles_deg
            .iter()
            .map(|x| x.to_radians())
            .collect_vec();
        let derivatives = clamped_derivatives(&angles, spline.values, spline.end_derivatives)?;

        let mut knots = Vec::with_capacity(angles.len() + 1);
        if let Some(slope) = spline.leading_slope {
            knots.push(SplineKnot {
                angle: 0.0,
                value: 1.0,
                derivative: slope,
            });
        }
        knots.extend(
            angles
                .iter()
                .zip(spline.values)
                .zip(derivatives)
                .map(|((&angle, &value), derivative)| SplineKnot {
                    angle,
                    value,
                    derivative,
                }),
        );

        debug!(
            version = SPLINE_TABLE_VERSION,
            knots = knots.len(),
            "Derived spline knot table."
        );
        Self::new(knots)
    }

    /// The knots of the table, sorted by angle.
    pub fn knots(&self) -> &[SplineKnot] {
        &self.knots
    }

    /// Evaluate the function at the specified phase angle.
    pub fn evaluate(&self, phase: PhaseAngle) -> f64 {
        let x = phase.radians();
        let idx = self.knots.partition_point(|k| k.angle <= x);

        if idx == self.knots.len() {
            let last = &self.knots[idx - 1];
            return last.value + last.derivative * (x - last.angle);
        }

        // The first knot is at zero, and phase angles are non-negative.
        let k0 = &self.knots[idx.max(1) - 1];
        let k1 = &self.knots[idx.max(1)];
        hermite(k0, k1, x)
    }
}

/// Cubic Hermite interpolation between two knots.
#[inline(always)]
fn hermite(k0: &SplineKnot, k1: &SplineKnot, x: f64) -> f64 {
    let h = k1.angle - k0.angle;
    let t = (x - k0.angle) / h;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * k0.value + h10 * h * k0.derivative + h01 * k1.value + h11 * h * k1.derivative
}

/// Solve for the derivatives at every knot of a clamped cubic spline.
///
/// Continuity of the second derivative at interior knot `i` gives:
///
/// m[i-1] / h[i-1] + 2 m[i] (1 / h[i-1] + 1 / h[i]) + m[i+1] / h[i]
///     = 3 ((y[i] - y[i-1]) / h[i-1]^2 + (y[i+1] - y[i]) / h[i]^2)
///
/// where `h[i] = x[i+1] - x[i]`. The system is tridiagonal and strictly diagonally
/// dominant.
fn clamped_derivatives(
    angles: &[f64],
    values: &[f64],
    end_derivatives: [f64; 2],
) -> PhaseCurveResult<Vec<f64>> {
    let n_knots = angles.len();
    if n_knots < 2 {
        Err(Error::ValueError(
            "A clamped spline requires at least two knots.".into(),
        ))?;
    }
    let [first, last] = end_derivatives;
    let n_interior = n_knots - 2;

    let mut derivatives = vec![0.0; n_knots];
    derivatives[0] = first;
    derivatives[n_knots - 1] = last;
    if n_interior == 0 {
        return Ok(derivatives);
    }

    let mut matrix = DMatrix::<f64>::zeros(n_interior, n_interior);
    let mut rhs = DVector::<f64>::zeros(n_interior);
    for row in 0..n_interior {
        let i = row + 1;
        let h_left = angles[i] - angles[i - 1];
        let h_right = angles[i + 1] - angles[i];
        matrix[(row, row)] = 2.0 * (1.0 / h_left + 1.0 / h_right);
        rhs[row] = 3.0
            * ((values[i] - values[i - 1]) / h_left.powi(2)
                + (values[i + 1] - values[i]) / h_right.powi(2));

        if row > 0 {
            matrix[(row, row - 1)] = 1.0 / h_left;
        } else {
            rhs[row] -= first / h_left;
        }
        if row + 1 < n_interior {
            matrix[(row, row + 1)] = 1.0 / h_right;
        } else {
            rhs[row] -= last / h_right;
        }
    }

    let solved = matrix.lu().solve(&rhs).ok_or(Error::ValueError(
        "Spline derivative system is singular, knots may be repeated.".into(),
    ))?;
    derivatives[1..n_knots - 1].copy_from_slice(solved.as_slice());
    Ok(derivatives)
}

/// The three H,G1,G2 basis functions, `[phi_1, phi_2, phi_3]`.
///
/// Valid over 0 to 150 degrees, linearly extrapolated past the last knot of each
/// function. Phi 3 is identically zero past 30 degrees.
///
/// ```
///     use phase_curve_core::angle::PhaseAngle;
///     use phase_curve_core::basis::spline_basis;
///     assert_eq!(spline_basis(PhaseAngle::ZERO), [1.0, 1.0, 1.0]);
///
///     let phase = PhaseAngle::from_degrees(60.0).unwrap();
///     let [phi_1, phi_2, phi_3] = spline_basis(phase);
///     assert!((phi_1 - 1.3410560e-1).abs() < 1e-12);
///     assert!((phi_2 - 3.1755495e-1).abs() < 1e-12);
///     assert_eq!(phi_3, 0.0);
/// ```
pub fn spline_basis(phase: PhaseAngle) -> [f64; 3] {
    [
        PHI1_TABLE.evaluate(phase),
        PHI2_TABLE.evaluate(phase),
        PHI3_TABLE.evaluate(phase),
    ]
}
