//! # Errors
//! Errors emitted by phase_curve_core
//!
//! With the `pyo3` feature these convert to Python `ValueError`s.
use std::{error, fmt};

/// phase_curve_core specific result.
pub type PhaseCurveResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Phase angle is outside of the domain where the basis functions are defined.
    ///
    /// Negative or non-finite phase angles for every model, and phase angles at or
    /// above pi for the exponential bases.
    DomainError(String),

    /// The linear combination of basis functions is not positive, so the logarithm
    /// required to produce a magnitude is undefined.
    NumericDomainError(String),

    /// Input or variable exceeded expected or allowed bounds.
    ValueError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DomainError(s) => {
                write!(f, "{}", s)
            }
            Error::NumericDomainError(s) => {
                write!(f, "{}", s)
            }
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

#[cfg(feature = "pyo3")]
use pyo3::{exceptions, PyErr};

#[cfg(feature = "pyo3")]
impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::DomainError(s) => PyErr::new::<exceptions::PyValueError, _>(s),

            Error::NumericDomainError(s) => PyErr::new::<exceptions::PyValueError, _>(s),

            Error::ValueError(s) => PyErr::new::<exceptions::PyValueError, _>(s),
        }
    }
}
