//! # Phase Angle
//! The Sun-object-observer angle, validated once at the boundary.
use serde::{Deserialize, Serialize};

use crate::errors::{Error, PhaseCurveResult};

/// Phase angle of an observation, stored in radians.
///
/// Construction rejects negative and non-finite values, so every [`PhaseAngle`] held
/// by the rest of the crate is a valid input for every model. The upper bound depends
/// on the model and is checked during evaluation.
///
/// ```
///     use phase_curve_core::angle::PhaseAngle;
///     let phase = PhaseAngle::from_degrees(90.0).unwrap();
///     assert!((phase.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
///     assert!(PhaseAngle::from_degrees(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PhaseAngle(f64);

impl PhaseAngle {
    /// Zero phase, the observer is exactly between the Sun and the object.
    pub const ZERO: PhaseAngle = PhaseAngle(0.0);

    /// Construct a phase angle from radians.
    pub fn from_radians(radians: f64) -> PhaseCurveResult<Self> {
        if !radians.is_finite() {
            Err(Error::DomainError(format!(
                "Phase angle must be finite, got {radians} rad."
            )))?;
        }
        if radians < 0.0 {
            Err(Error::DomainError(format!(
                "Phase angle cannot be negative, got {radians} rad."
            )))?;
        }
        Ok(Self(radians))
    }

    /// Construct a phase angle from degrees.
    pub fn from_degrees(degrees: f64) -> PhaseCurveResult<Self> {
        Self::from_radians(degrees.to_radians())
    }

    /// Phase angle in radians.
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Phase angle in degrees.
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl TryFrom<f64> for PhaseAngle {
    type Error = Error;

    fn try_from(radians: f64) -> Result<Self, Self::Error> {
        Self::from_radians(radians)
    }
}

impl From<PhaseAngle> for f64 {
    fn from(value: PhaseAngle) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            PhaseAngle::from_radians(-1e-12),
            Err(Error::DomainError(_))
        ));
        assert!(matches!(
            PhaseAngle::from_degrees(-30.0),
            Err(Error::DomainError(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        for val in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                PhaseAngle::from_radians(val),
                Err(Error::DomainError(_))
            ));
        }
    }

    #[test]
    fn test_degrees() {
        let phase = PhaseAngle::from_degrees(150.0).unwrap();
        assert!((phase.degrees() - 150.0).abs() < 1e-12);
        assert_eq!(PhaseAngle::from_radians(0.0).unwrap(), PhaseAngle::ZERO);
        assert!(PhaseAngle::from_radians(-0.0).is_ok());
    }
}
