//! # Geometry
//! Conversion between observed and reduced magnitudes using the observing geometry.
//!
//! Distances are in AU, and the reduced magnitude is the magnitude the object would
//! have at 1 AU from both the Sun and the observer.
use nalgebra::Vector3;

use crate::angle::PhaseAngle;
use crate::errors::{Error, PhaseCurveResult};
use crate::model::ModelParameters;

/// Allowed rounding excess of the cosine of the phase angle outside of [-1, 1].
const COS_TOLERANCE: f64 = 1e-12;

fn check_distance(name: &str, dist: f64) -> PhaseCurveResult<()> {
    if !dist.is_finite() || dist <= 0.0 {
        Err(Error::ValueError(format!(
            "{name} must be positive and finite, got {dist}."
        )))?;
    }
    Ok(())
}

/// Compute the phase angle from the three sides of the Sun-object-observer triangle.
///
/// By the law of cosines:
///
/// cos(phase) = (r^2 + delta^2 - d^2) / (2 r delta)
///
/// # Arguments
///
/// * `helio_dist` - Distance from the Sun to the object in AU.
/// * `obs_dist` - Distance from the observer to the object in AU.
/// * `sun_obs_dist` - Distance from the Sun to the observer in AU.
pub fn phase_angle_from_distances(
    helio_dist: f64,
    obs_dist: f64,
    sun_obs_dist: f64,
) -> PhaseCurveResult<PhaseAngle> {
    check_distance("Heliocentric distance", helio_dist)?;
    check_distance("Observer distance", obs_dist)?;
    check_distance("Sun-observer distance", sun_obs_dist)?;

    let cos_phase = (helio_dist.powi(2) + obs_dist.powi(2) - sun_obs_dist.powi(2))
        / (2.0 * helio_dist * obs_dist);

    if !(-1.0 - COS_TOLERANCE..=1.0 + COS_TOLERANCE).contains(&cos_phase) {
        Err(Error::ValueError(format!(
            "Distances {helio_dist}, {obs_dist}, {sun_obs_dist} do not form a triangle."
        )))?;
    }

    // Rounding can push a degenerate triangle slightly outside of [-1, 1].
    PhaseAngle::from_radians(cos_phase.clamp(-1.0, 1.0).acos())
}

/// Compute the phase angle from heliocentric positions of the object and observer.
///
/// # Arguments
///
/// * `sun2obj` - Vector from the sun to the object in AU.
/// * `sun2obs` - Vector from the sun to the observer in AU.
pub fn phase_angle_from_vectors(
    sun2obj: &Vector3<f64>,
    sun2obs: &Vector3<f64>,
) -> PhaseCurveResult<PhaseAngle> {
    let obj2obs = sun2obs - sun2obj;
    check_distance("Heliocentric distance", sun2obj.norm())?;
    check_distance("Observer distance", obj2obs.norm())?;
    PhaseAngle::from_radians(sun2obj.angle(&-obj2obs))
}

/// Remove the distance dependence from an observed magnitude.
///
/// m - 5 log10(r delta)
pub fn reduced_magnitude(mag: f64, helio_dist: f64, obs_dist: f64) -> PhaseCurveResult<f64> {
    check_distance("Heliocentric distance", helio_dist)?;
    check_distance("Observer distance", obs_dist)?;
    Ok(mag - 5.0 * (helio_dist * obs_dist).log10())
}

/// Compute the apparent magnitude of an object from its model parameters and the
/// observing geometry.
///
/// # Arguments
///
/// * `params` - Phase curve parameters of the object.
/// * `helio_dist` - Distance from the Sun to the object in AU.
/// * `obs_dist` - Distance from the observer to the object in AU.
/// * `phase` - Phase angle of the observation.
pub fn apparent_magnitude(
    params: &ModelParameters,
    helio_dist: f64,
    obs_dist: f64,
    phase: PhaseAngle,
) -> PhaseCurveResult<f64> {
    check_distance("Heliocentric distance", helio_dist)?;
    check_distance("Observer distance", obs_dist)?;
    Ok(params.magnitude(phase)? + 5.0 * (helio_dist * obs_dist).log10())
}

/// Compute the apparent magnitude of an object from its model parameters and the
/// heliocentric positions of the object and observer.
///
/// # Arguments
///
/// * `params` - Phase curve parameters of the object.
/// * `sun2obj` - Vector from the sun to the object in AU.
/// * `sun2obs` - Vector from the sun to the observer in AU.
pub fn apparent_magnitude_from_vectors(
    params: &ModelParameters,
    sun2obj: &Vector3<f64>,
    sun2obs: &Vector3<f64>,
) -> PhaseCurveResult<f64> {
    let phase = phase_angle_from_vectors(sun2obj, sun2obs)?;
    apparent_magnitude(params, sun2obj.norm(), (sun2obs - sun2obj).norm(), phase)
}

/// Recover the absolute magnitude H from a single observed magnitude.
///
/// The slope parameters of `params` define the phase correction, its H value is
/// ignored.
///
/// ```
///     use phase_curve_core::angle::PhaseAngle;
///     use phase_curve_core::geometry::absolute_magnitude;
///     use phase_curve_core::model::ModelParameters;
///
///     let phase = PhaseAngle::from_degrees(22.9769).unwrap();
///     let shape = ModelParameters::HG { h: 0.0, g: 0.15 };
///     let h = absolute_magnitude(18.168, 1.997, 1.187, phase, &shape).unwrap();
///     assert!((h - 15.201).abs() < 0.01);
/// ```
pub fn absolute_magnitude(
    mag: f64,
    helio_dist: f64,
    obs_dist: f64,
    phase: PhaseAngle,
    params: &ModelParameters,
) -> PhaseCurveResult<f64> {
    let reduced = reduced_magnitude(mag, helio_dist, obs_dist)?;
    let correction = params.model().phase_function(phase)?;
    Ok(reduced + 2.5 * correction.log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_phase_from_distances() {
        let phase = phase_angle_from_distances(1.0, 1.0, 2f64.sqrt()).unwrap();
        assert!((phase.radians() - FRAC_PI_2).abs() < 1e-12);

        // Observer between the Sun and the object.
        let phase = phase_angle_from_distances(2.0, 1.0, 1.0).unwrap();
        assert_eq!(phase.radians(), 0.0);

        assert!(matches!(
            phase_angle_from_distances(0.0, 1.0, 1.0),
            Err(Error::ValueError(_))
        ));
        assert!(matches!(
            phase_angle_from_distances(1.0, f64::NAN, 1.0),
            Err(Error::ValueError(_))
        ));

        // Violates the triangle inequality on either side.
        assert!(matches!(
            phase_angle_from_distances(1.0, 1.0, 5.0),
            Err(Error::ValueError(_))
        ));
        assert!(matches!(
            phase_angle_from_distances(1.0, 5.0, 1.0),
            Err(Error::ValueError(_))
        ));

        // Collinear with the object between the Sun and the observer.
        let phase = phase_angle_from_distances(1.0, 2.0, 3.0).unwrap();
        assert!((phase.radians() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_phase_from_vectors() {
        let sun2obj = Vector3::new(1.0, 0.0, 0.0);
        let sun2obs = Vector3::new(1.0, 1.0, 0.0);
        let phase = phase_angle_from_vectors(&sun2obj, &sun2obs).unwrap();
        assert!((phase.radians() - FRAC_PI_2).abs() < 1e-12);

        let sun2obj = Vector3::new(2.1, -0.4, 0.3);
        let sun2obs = Vector3::new(0.3, 0.95, 0.0);
        let phase = phase_angle_from_vectors(&sun2obj, &sun2obs).unwrap();
        let expected = phase_angle_from_distances(
            sun2obj.norm(),
            (sun2obs - sun2obj).norm(),
            sun2obs.norm(),
        )
        .unwrap();
        assert!((phase.radians() - expected.radians()).abs() < 1e-10);

        assert!(phase_angle_from_vectors(&sun2obj, &sun2obj).is_err());
    }

    #[test]
    fn test_absolute_magnitude() {
        let phase = PhaseAngle::from_degrees(22.9769).unwrap();
        let simple = ModelParameters::SimpleHG { h: 0.0, g: 0.15 };
        let standard = ModelParameters::HG { h: 0.0, g: 0.15 };
        let h = absolute_magnitude(18.168, 1.997, 1.187, phase, &simple).unwrap();
        assert!((h - 15.201443654808685).abs() < 1e-9);
        let h = absolute_magnitude(18.168, 1.997, 1.187, phase, &standard).unwrap();
        assert!((h - 15.202446306600022).abs() < 1e-9);
    }

    #[test]
    fn test_apparent_inverts_absolute() {
        let phase = PhaseAngle::from_degrees(35.0).unwrap();
        for params in [
            ModelParameters::HG12 { h: 17.3, g12: 0.6 },
            ModelParameters::HG1G2 {
                h: 17.3,
                g1: 0.3,
                g2: 0.3,
            },
        ] {
            let mag = apparent_magnitude(&params, 2.4, 1.6, phase).unwrap();
            let h = absolute_magnitude(mag, 2.4, 1.6, phase, &params).unwrap();
            assert!((h - 17.3).abs() < 1e-10);
        }
    }

    #[test]
    fn test_apparent_from_vectors() {
        let params = ModelParameters::HG { h: 10.0, g: 0.15 };
        let sun2obj = Vector3::new(0.0, 2.0, 0.0);
        let sun2obs = Vector3::new(1.0, 0.0, 0.0);
        let phase = phase_angle_from_vectors(&sun2obj, &sun2obs).unwrap();
        let expected = apparent_magnitude(&params, 2.0, 5f64.sqrt(), phase).unwrap();
        let mag = apparent_magnitude_from_vectors(&params, &sun2obj, &sun2obs).unwrap();
        assert!((mag - expected).abs() < 1e-12);
    }

    #[test]
    fn test_reduced_magnitude() {
        assert_eq!(reduced_magnitude(12.0, 1.0, 1.0).unwrap(), 12.0);
        let reduced = reduced_magnitude(12.0, 10.0, 10.0).unwrap();
        assert!((reduced - 2.0).abs() < 1e-12);
        assert!(reduced_magnitude(12.0, -1.0, 1.0).is_err());
    }
}
