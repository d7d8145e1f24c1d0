use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::angle::PhaseAngle;
use crate::constants::{
    ExponentialConstants, HG_C1, HG_C2, HG_SIMPLE, HG_SMOOTH_DENOM, HG_SMOOTH_WEIGHT,
    HG_STANDARD,
};
use crate::errors::{Error, PhaseCurveResult};

/// Which constant set of the H,G system to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExponentialVariant {
    /// IAU 1985 simplified constants.
    Simple,

    /// Bowell et al. 1989 constants.
    Standard,
}

impl ExponentialVariant {
    /// The constants defining this variant.
    pub fn constants(self) -> &'static ExponentialConstants {
        match self {
            ExponentialVariant::Simple => &HG_SIMPLE,
            ExponentialVariant::Standard => &HG_STANDARD,
        }
    }
}

/// `tan(phase / 2)`, which diverges at pi.
fn half_tan(phase: PhaseAngle) -> PhaseCurveResult<f64> {
    let phase = phase.radians();
    if phase >= PI {
        Err(Error::DomainError(format!(
            "Exponential basis functions are undefined for phase angles of pi or more, got {phase} rad."
        )))?;
    }
    Ok((0.5 * phase).tan())
}

/// Both exponential basis functions of the H,G system, `[phi_1, phi_2]`.
///
/// Each is `exp(-a * tan(phase / 2)^b)` with the constants of the variant.
///
/// ```
///     use phase_curve_core::angle::PhaseAngle;
///     use phase_curve_core::basis::{exponential_basis, ExponentialVariant};
///     let phis = exponential_basis(PhaseAngle::ZERO, ExponentialVariant::Standard).unwrap();
///     assert_eq!(phis, [1.0, 1.0]);
/// ```
pub fn exponential_basis(
    phase: PhaseAngle,
    variant: ExponentialVariant,
) -> PhaseCurveResult<[f64; 2]> {
    let tan = half_tan(phase)?;
    let c = variant.constants();
    Ok([
        (-c.a1 * tan.powf(c.b1)).exp(),
        (-c.a2 * tan.powf(c.b2)).exp(),
    ])
}

/// A single exponential basis function, `index` is 1 or 2.
pub fn exponential_phi(
    index: usize,
    phase: PhaseAngle,
    variant: ExponentialVariant,
) -> PhaseCurveResult<f64> {
    let [phi_1, phi_2] = exponential_basis(phase, variant)?;
    match index {
        1 => Ok(phi_1),
        2 => Ok(phi_2),
        _ => Err(Error::ValueError(format!(
            "Exponential basis index must be 1 or 2, got {index}."
        ))),
    }
}

/// Both basis functions of the full IAU H,G system, which blends the standard
/// exponential functions with a linear-in-sine term near opposition.
///
/// The blending weight is `exp(-90.56 * tan(phase / 2)^2)`, so this converges to the
/// standard exponential basis at large phase angles.
pub fn smoothed_basis(phase: PhaseAngle) -> PhaseCurveResult<[f64; 2]> {
    let tan = half_tan(phase)?;
    let sin = phase.radians().sin();
    let weight = (-HG_SMOOTH_WEIGHT * tan.powi(2)).exp();
    let denom = HG_SMOOTH_DENOM[0] + HG_SMOOTH_DENOM[1] * sin + HG_SMOOTH_DENOM[2] * sin.powi(2);

    let helper = |a: f64, b: f64, c: f64| {
        let theta_l = (-a * tan.powf(b)).exp();
        let theta_s = 1.0 - c * sin / denom;
        weight * theta_s + (1.0 - weight) * theta_l
    };

    Ok([
        helper(HG_STANDARD.a1, HG_STANDARD.b1, HG_C1),
        helper(HG_STANDARD.a2, HG_STANDARD.b2, HG_C2),
    ])
}
