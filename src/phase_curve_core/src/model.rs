//! # Model
//! Phase curve models, combining basis functions with slope parameters.
//!
//! [`ModelParameters`] selects the photometric system, and [`PhaseCurveModel`] holds
//! those parameters resolved down to basis weights so that many phase angles may be
//! evaluated without repeating the conversion.
//!
//! Every model has the form:
//!
//! V(phase) = H - 2.5 * log10(sum_i w_i * phi_i(phase))
//!
//! where the weights sum to 1 and every basis function is 1 at zero phase.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::angle::PhaseAngle;
use crate::basis::{exponential_basis, smoothed_basis, spline_basis, ExponentialVariant};
use crate::conversion::g12_to_g1g2;
use crate::errors::{Error, PhaseCurveResult};

/// Parameters of one of the supported phase curve systems.
///
/// Slope parameters are not restricted to their conventional ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
#[allow(clippy::upper_case_acronyms)]
pub enum ModelParameters {
    /// H,G system with the simplified 1985 constants.
    #[serde(rename = "simple_hg")]
    SimpleHG {
        /// Absolute magnitude.
        h: f64,
        /// Slope parameter.
        g: f64,
    },

    /// H,G system with the Bowell et al. 1989 constants.
    #[serde(rename = "hg")]
    HG {
        /// Absolute magnitude.
        h: f64,
        /// Slope parameter.
        g: f64,
    },

    /// Full IAU H,G system, including the low phase angle smoothing term.
    #[serde(rename = "smoothed_hg")]
    SmoothedHG {
        /// Absolute magnitude.
        h: f64,
        /// Slope parameter.
        g: f64,
    },

    /// Three parameter H,G1,G2 system.
    #[serde(rename = "hg1g2")]
    HG1G2 {
        /// Absolute magnitude.
        h: f64,
        /// Weight of the first spline basis function.
        g1: f64,
        /// Weight of the second spline basis function.
        g2: f64,
    },

    /// Two parameter reduction of the H,G1,G2 system.
    #[serde(rename = "hg12")]
    HG12 {
        /// Absolute magnitude.
        h: f64,
        /// Combined slope parameter.
        g12: f64,
    },
}

impl ModelParameters {
    /// Absolute magnitude of the parameter set.
    pub fn h(&self) -> f64 {
        match self {
            ModelParameters::SimpleHG { h, .. }
            | ModelParameters::HG { h, .. }
            | ModelParameters::SmoothedHG { h, .. }
            | ModelParameters::HG1G2 { h, .. }
            | ModelParameters::HG12 { h, .. } => *h,
        }
    }

    /// Copy of these parameters with a different absolute magnitude.
    pub fn with_h(self, h: f64) -> Self {
        match self {
            ModelParameters::SimpleHG { g, .. } => ModelParameters::SimpleHG { h, g },
            ModelParameters::HG { g, .. } => ModelParameters::HG { h, g },
            ModelParameters::SmoothedHG { g, .. } => ModelParameters::SmoothedHG { h, g },
            ModelParameters::HG1G2 { g1, g2, .. } => ModelParameters::HG1G2 { h, g1, g2 },
            ModelParameters::HG12 { g12, .. } => ModelParameters::HG12 { h, g12 },
        }
    }

    /// Human-readable name of the photometric system.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelParameters::SimpleHG { .. } => "H,G (simplified)",
            ModelParameters::HG { .. } => "H,G",
            ModelParameters::SmoothedHG { .. } => "H,G (smoothed)",
            ModelParameters::HG1G2 { .. } => "H,G1,G2",
            ModelParameters::HG12 { .. } => "H,G12",
        }
    }

    /// Predicted reduced magnitude at the specified phase angle.
    pub fn magnitude(&self, phase: PhaseAngle) -> PhaseCurveResult<f64> {
        PhaseCurveModel::new(self).magnitude(phase)
    }

    /// Predicted reduced magnitude at a phase angle given in degrees.
    pub fn magnitude_deg(&self, phase_deg: f64) -> PhaseCurveResult<f64> {
        self.magnitude(PhaseAngle::from_degrees(phase_deg)?)
    }

    /// Resolve these parameters for repeated evaluation.
    pub fn model(&self) -> PhaseCurveModel {
        PhaseCurveModel::new(self)
    }
}

/// Basis weights of a model after any parameter conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Exponential { variant: ExponentialVariant, g: f64 },
    Smoothed { g: f64 },
    Spline { g1: f64, g2: f64 },
}

/// A phase curve model ready for evaluation.
///
/// H,G12 parameters are converted to G1 and G2 once on construction, after which this
/// behaves identically to the equivalent H,G1,G2 model.
///
/// ```
///     use phase_curve_core::angle::PhaseAngle;
///     use phase_curve_core::model::ModelParameters;
///
///     let model = ModelParameters::HG12 { h: 5.0, g12: 0.3 }.model();
///     let phases: Vec<_> = (0..=30)
///         .map(|deg| PhaseAngle::from_degrees(deg as f64).unwrap())
///         .collect();
///     let mags = model.magnitudes(&phases).unwrap();
///     assert_eq!(mags.len(), 31);
///     assert!((mags[0] - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseCurveModel {
    params: ModelParameters,
    shape: Shape,
}

impl PhaseCurveModel {
    /// Resolve a set of model parameters.
    pub fn new(params: &ModelParameters) -> Self {
        let shape = match *params {
            ModelParameters::SimpleHG { g, .. } => Shape::Exponential {
                variant: ExponentialVariant::Simple,
                g,
            },
            ModelParameters::HG { g, .. } => Shape::Exponential {
                variant: ExponentialVariant::Standard,
                g,
            },
            ModelParameters::SmoothedHG { g, .. } => Shape::Smoothed { g },
            ModelParameters::HG1G2 { g1, g2, .. } => Shape::Spline { g1, g2 },
            ModelParameters::HG12 { g12, .. } => {
                let (g1, g2) = g12_to_g1g2(g12);
                Shape::Spline { g1, g2 }
            }
        };
        Self {
            params: *params,
            shape,
        }
    }

    /// The parameters this model was constructed from.
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Weights of the spline basis functions, if this is a spline model.
    ///
    /// Returns `(G1, G2)`, the third weight is `1 - G1 - G2`.
    pub fn spline_weights(&self) -> Option<(f64, f64)> {
        match self.shape {
            Shape::Spline { g1, g2 } => Some((g1, g2)),
            _ => None,
        }
    }

    /// Ratio of the reflected flux at the phase angle to the flux at zero phase.
    ///
    /// This is the weighted sum of basis functions, and must be positive for a
    /// magnitude to exist.
    pub fn phase_function(&self, phase: PhaseAngle) -> PhaseCurveResult<f64> {
        // Written relative to one basis so the sum is exactly 1 at zero phase.
        let sum = match self.shape {
            Shape::Exponential { variant, g } => {
                let [phi_1, phi_2] = exponential_basis(phase, variant)?;
                phi_1 + g * (phi_2 - phi_1)
            }
            Shape::Smoothed { g } => {
                let [phi_1, phi_2] = smoothed_basis(phase)?;
                phi_1 + g * (phi_2 - phi_1)
            }
            Shape::Spline { g1, g2 } => {
                let [phi_1, phi_2, phi_3] = spline_basis(phase);
                phi_3 + g1 * (phi_1 - phi_3) + g2 * (phi_2 - phi_3)
            }
        };

        if !sum.is_finite() || sum <= 0.0 {
            Err(Error::NumericDomainError(format!(
                "{} phase function is {sum} at {} rad, magnitude is undefined.",
                self.params.display_name(),
                phase.radians()
            )))?;
        }
        Ok(sum)
    }

    /// Predicted reduced magnitude at the specified phase angle.
    pub fn magnitude(&self, phase: PhaseAngle) -> PhaseCurveResult<f64> {
        Ok(self.params.h() - 2.5 * self.phase_function(phase)?.log10())
    }

    /// Predicted reduced magnitudes for a sequence of phase angles.
    ///
    /// Fails with the error of the first phase angle which cannot be evaluated.
    pub fn magnitudes(&self, phases: &[PhaseAngle]) -> PhaseCurveResult<Vec<f64>> {
        trace!(
            model = self.params.display_name(),
            n_phases = phases.len(),
            "Evaluating phase curve."
        );
        phases.iter().map(|&phase| self.magnitude(phase)).collect()
    }

    /// Predicted reduced magnitudes for a sequence of phase angles, evaluated in
    /// parallel.
    ///
    /// Fails if any phase angle cannot be evaluated, no partial results are returned.
    pub fn par_magnitudes(&self, phases: &[PhaseAngle]) -> PhaseCurveResult<Vec<f64>> {
        trace!(
            model = self.params.display_name(),
            n_phases = phases.len(),
            "Evaluating phase curve in parallel."
        );
        phases
            .par_iter()
            .map(|&phase| self.magnitude(phase))
            .collect()
    }
}

/// Reduced magnitude under the simplified H,G system, phase angle in radians.
///
/// ```
///     use phase_curve_core::model::evaluate_simple_hg;
///     assert!((evaluate_simple_hg(5.0, 0.15, 0.0).unwrap() - 5.0).abs() < 1e-12);
/// ```
pub fn evaluate_simple_hg(h: f64, g: f64, phase: f64) -> PhaseCurveResult<f64> {
    ModelParameters::SimpleHG { h, g }.magnitude(PhaseAngle::from_radians(phase)?)
}

/// Reduced magnitude under the standard H,G system, phase angle in radians.
///
/// ```
///     use phase_curve_core::model::evaluate_hg;
///     assert!((evaluate_hg(5.0, 0.15, 0.0).unwrap() - 5.0).abs() < 1e-12);
///     assert!(evaluate_hg(5.0, 0.15, std::f64::consts::PI).is_err());
/// ```
pub fn evaluate_hg(h: f64, g: f64, phase: f64) -> PhaseCurveResult<f64> {
    ModelParameters::HG { h, g }.magnitude(PhaseAngle::from_radians(phase)?)
}

/// Reduced magnitude under the smoothed IAU H,G system, phase angle in radians.
pub fn evaluate_hg_smoothed(h: f64, g: f64, phase: f64) -> PhaseCurveResult<f64> {
    ModelParameters::SmoothedHG { h, g }.magnitude(PhaseAngle::from_radians(phase)?)
}

/// Reduced magnitude under the H,G1,G2 system, phase angle in radians.
///
/// ```
///     use phase_curve_core::model::evaluate_hg1g2;
///     assert!((evaluate_hg1g2(5.0, 0.62, 0.14, 0.0).unwrap() - 5.0).abs() < 1e-12);
/// ```
pub fn evaluate_hg1g2(h: f64, g1: f64, g2: f64, phase: f64) -> PhaseCurveResult<f64> {
    ModelParameters::HG1G2 { h, g1, g2 }.magnitude(PhaseAngle::from_radians(phase)?)
}

/// Reduced magnitude under the H,G12 system, phase angle in radians.
///
/// ```
///     use phase_curve_core::model::evaluate_hg12;
///     assert!((evaluate_hg12(5.0, 0.2, 0.0).unwrap() - 5.0).abs() < 1e-12);
/// ```
pub fn evaluate_hg12(h: f64, g12: f64, phase: f64) -> PhaseCurveResult<f64> {
    ModelParameters::HG12 { h, g12 }.magnitude(PhaseAngle::from_radians(phase)?)
}
