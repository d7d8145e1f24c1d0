//! Constants of the H,G1,G2 and H,G12 magnitude systems.
//!
//! "A three-parameter magnitude phase function for asteroids"
//! K. Muinonen, I. N. Belskaya, A. Cellino, M. Delbo, A.-C. Levasseur-Regourd,
//! A. Penttila, E. F. Tedesco - 2010
//! Icarus 209, pp. 542-555
//!
//! Knot values and end point derivatives are the published ones, as reproduced in
//! "H, G1, G2 photometric phase function extended to low-accuracy data"
//! A. Penttila, V. G. Shevchenko, O. Wilkman, K. Muinonen - 2016
//! Planetary and Space Science 123, pp. 117-125

use std::f64::consts::FRAC_1_PI;

/// Identifies the published knot tables below.
pub const SPLINE_TABLE_VERSION: &str = "Muinonen2010/Penttila2016";

/// 1 / (5 pi)
pub const FRAC_1_5PI: f64 = 0.063_661_977_236_758_134;

/// Published definition of one cubic spline basis function.
///
/// The spline is clamped: the derivative is specified at the first and last knot, the
/// interior derivatives follow from requiring a continuous second derivative.
#[derive(Debug, Clone, Copy)]
pub struct PublishedSpline {
    /// Knot locations in degrees, strictly increasing.
    pub angles_deg: &'static [f64],

    /// Basis function value at each knot.
    pub values: &'static [f64],

    /// Derivative with respect to phase angle in radians at the first and last knot.
    pub end_derivatives: [f64; 2],

    /// Slope of the linear segment joining `(0, 1)` to the first knot, per radian.
    ///
    /// [`None`] if the first knot is already at zero phase.
    pub leading_slope: Option<f64>,
}

/// First basis function, linear below 7.5 degrees.
pub const PHI1_SPLINE: PublishedSpline = PublishedSpline {
    angles_deg: &[7.5, 30.0, 60.0, 90.0, 120.0, 150.0],
    values: &[
        7.5e-1,
        3.3486016e-1,
        1.3410560e-1,
        5.1104756e-2,
        2.1465687e-2,
        3.6396989e-3,
    ],
    end_derivatives: [-1.9098593, -9.1328612e-2],
    leading_slope: Some(-6.0 * FRAC_1_PI),
};

/// Second basis function, linear below 7.5 degrees.
pub const PHI2_SPLINE: PublishedSpline = PublishedSpline {
    angles_deg: &[7.5, 30.0, 60.0, 90.0, 120.0, 150.0],
    values: &[
        9.25e-1,
        6.2884169e-1,
        3.1755495e-1,
        1.2716367e-1,
        2.2373903e-2,
        1.6505689e-4,
    ],
    end_derivatives: [-5.7295780e-1, -8.6573138e-8],
    leading_slope: Some(-9.0 * FRAC_1_5PI),
};

/// Third basis function, describing the opposition effect. Zero beyond 30 degrees.
pub const PHI3_SPLINE: PublishedSpline = PublishedSpline {
    angles_deg: &[0.0, 0.3, 1.0, 2.0, 4.0, 8.0, 12.0, 20.0, 30.0],
    values: &[
        1.0,
        8.3381185e-1,
        5.7735424e-1,
        4.2144772e-1,
        2.3174230e-1,
        1.0348178e-1,
        6.1733473e-2,
        1.6107006e-2,
        0.0,
    ],
    end_derivatives: [-1.0630097, 0.0],
    leading_slope: None,
};

/// Coefficients of one branch of the G12 to (G1, G2) conversion.
///
/// `G1 = g1_scale * G12 + g1_const` and `G2 = g2_scale * G12 + g2_const`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct G12Branch {
    /// Slope of G1 with respect to G12.
    pub g1_scale: f64,

    /// G1 at G12 = 0.
    pub g1_const: f64,

    /// Slope of G2 with respect to G12.
    pub g2_scale: f64,

    /// G2 at G12 = 0.
    pub g2_const: f64,
}

/// G12 values strictly below this use [`G12_LOW`], everything else [`G12_HIGH`].
pub const G12_THRESHOLD: f64 = 0.2;

/// Conversion used when `G12 < 0.2`.
pub const G12_LOW: G12Branch = G12Branch {
    g1_scale: 0.7527,
    g1_const: 0.06164,
    g2_scale: -0.9612,
    g2_const: 0.6270,
};

/// Conversion used when `G12 >= 0.2`.
pub const G12_HIGH: G12Branch = G12Branch {
    g1_scale: 0.9529,
    g1_const: 0.02162,
    g2_scale: -0.6125,
    g2_const: 0.5572,
};
