//! # Basis
//! Basis functions of the phase curve models.
//!
//! Every basis function is normalized to 1 at zero phase and is combined linearly with
//! the slope parameters of a model before the logarithm is taken.
//!
//! [`exponential_basis`] - The two exponential functions of the H,G systems.
//! [`spline_basis`] - The three cubic spline functions of the H,G1,G2 system.
//!
mod exponential;
mod spline;

pub use exponential::*;
pub use spline::*;
