//! Constants of the IAU H,G magnitude system.
//!
//! "Application of photometric models to asteroids"
//! E. Bowell, B. Hapke, D. Domingue, K. Lumme, J. Peltoniemi, A. W. Harris - 1989
//! Asteroids II, pp. 524-556

/// Shape constants of the two exponential basis functions of an H,G system.
///
/// Each basis is `exp(-a * tan(phase / 2)^b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialConstants {
    /// Scale of the first basis function.
    pub a1: f64,

    /// Exponent of the first basis function.
    pub b1: f64,

    /// Scale of the second basis function.
    pub a2: f64,

    /// Exponent of the second basis function.
    pub b2: f64,
}

/// Simplified H,G constants, adopted by the IAU in 1985.
pub const HG_SIMPLE: ExponentialConstants = ExponentialConstants {
    a1: 3.33,
    b1: 0.63,
    a2: 1.87,
    b2: 1.22,
};

/// Standard H,G constants from Bowell et al. 1989.
pub const HG_STANDARD: ExponentialConstants = ExponentialConstants {
    a1: 3.332,
    b1: 0.631,
    a2: 1.862,
    b2: 1.218,
};

/// Amplitude of the low phase angle term of the first smoothed basis function.
pub const HG_C1: f64 = 0.986;

/// Amplitude of the low phase angle term of the second smoothed basis function.
pub const HG_C2: f64 = 0.238;

/// Coefficients of the denominator of the low phase angle term, in increasing powers
/// of `sin(phase)`.
pub const HG_SMOOTH_DENOM: [f64; 3] = [0.119, 1.341, -0.754];

/// Scale of the weighting between the low phase angle and exponential terms.
pub const HG_SMOOTH_WEIGHT: f64 = 90.56;
