//! # Phase Curve Core
//! Forward evaluation of the standard asteroid phase curve models.
//!
//! Given a phase angle and the parameters of a photometric system, these compute the
//! predicted reduced magnitude of a solar system object. Supported systems are:
//!
//! - The IAU H,G system, with both the simplified 1985 and the Bowell et al. 1989
//!   constants, as well as the full form including the low phase smoothing term.
//! - The Muinonen et al. 2010 H,G1,G2 system.
//! - The H,G12 reduction of the H,G1,G2 system.
//!
//! All evaluation is pure, the only shared state are the spline knot tables which are
//! built once on first use and never modified afterward.
//!
//! This crate is left as a stand alone Rust crate, without any Python wrappers. The
//! optional `pyo3` feature only enables converting errors to Python exceptions so that
//! wrappers may be written on top of it later.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod angle;
pub mod basis;
pub mod constants;
pub mod conversion;
pub mod errors;
pub mod geometry;
pub mod model;

/// Common useful imports
pub mod prelude {
    pub use crate::angle::PhaseAngle;
    pub use crate::basis::{exponential_basis, spline_basis, ExponentialVariant};
    pub use crate::conversion::g12_to_g1g2;
    pub use crate::errors::{Error, PhaseCurveResult};
    pub use crate::model::{
        evaluate_hg, evaluate_hg12, evaluate_hg1g2, evaluate_hg_smoothed, evaluate_simple_hg,
        ModelParameters, PhaseCurveModel,
    };
}
