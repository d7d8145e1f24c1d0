//! # Conversion
//! Reduction of the H,G1,G2 system to the single slope parameter G12.
use crate::constants::{G12Branch, G12_HIGH, G12_LOW, G12_THRESHOLD};

/// Convert a G12 slope parameter to the equivalent (G1, G2) pair.
///
/// This is piecewise linear, with values below 0.2 using the low branch and 0.2 and
/// above using the high branch. The two branches agree to about 1e-4 at the threshold.
/// G12 is not restricted to the conventional 0 to 1 range, values outside of it are
/// extrapolated with the nearest branch.
///
/// ```
///     use phase_curve_core::conversion::g12_to_g1g2;
///     let (g1, g2) = g12_to_g1g2(0.5);
///     assert!((g1 - 0.49807).abs() < 1e-12);
///     assert!((g2 - 0.25095).abs() < 1e-12);
/// ```
pub fn g12_to_g1g2(g12: f64) -> (f64, f64) {
    let branch = if g12 < G12_THRESHOLD {
        &G12_LOW
    } else {
        &G12_HIGH
    };
    apply_branch(branch, g12)
}

#[inline(always)]
fn apply_branch(branch: &G12Branch, g12: f64) -> (f64, f64) {
    (
        branch.g1_scale * g12 + branch.g1_const,
        branch.g2_scale * g12 + branch.g2_const,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branches() {
        let (g1, g2) = g12_to_g1g2(0.1);
        assert!((g1 - 0.13691).abs() < 1e-12);
        assert!((g2 - 0.53088).abs() < 1e-12);

        // Threshold belongs to the high branch.
        let (g1, g2) = g12_to_g1g2(0.2);
        assert!((g1 - 0.2122).abs() < 1e-12);
        assert!((g2 - 0.4347).abs() < 1e-12);
    }

    #[test]
    fn test_continuous_at_threshold() {
        // Branch slopes are below 1 in magnitude, so the gap shrinks with eps down to
        // the offset between the branches.
        for eps in [1e-3, 1e-6, 1e-9] {
            let (g1_low, g2_low) = g12_to_g1g2(G12_THRESHOLD - eps);
            let (g1_high, g2_high) = g12_to_g1g2(G12_THRESHOLD + eps);
            assert!((g1_low - g1_high).abs() < 1e-4 + 2.0 * eps);
            assert!((g2_low - g2_high).abs() < 1e-4 + 2.0 * eps);
        }
        let low = apply_branch(&G12_LOW, G12_THRESHOLD);
        let high = apply_branch(&G12_HIGH, G12_THRESHOLD);
        assert!((low.0 - high.0).abs() < 1e-4);
        assert!((low.1 - high.1).abs() < 1e-4);
    }

    #[test]
    fn test_out_of_range_extrapolates() {
        let (g1, g2) = g12_to_g1g2(1.5);
        assert!((g1 - (0.9529 * 1.5 + 0.02162)).abs() < 1e-12);
        assert!((g2 - (-0.6125 * 1.5 + 0.5572)).abs() < 1e-12);

        let (g1, g2) = g12_to_g1g2(-0.5);
        assert!((g1 - (0.7527 * -0.5 + 0.06164)).abs() < 1e-12);
        assert!((g2 - (-0.9612 * -0.5 + 0.6270)).abs() < 1e-12);
    }
}
