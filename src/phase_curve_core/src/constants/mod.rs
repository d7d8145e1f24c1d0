//! # Constants
//! Physical model definitions for the phase curve systems.
//!
//! These are not tunables, each table is the literal definition of a photometric
//! system and is shared by every evaluation in the process.
//!
//! [`bowell`] - The IAU H,G system and its simplified variant.
//! [`muinonen`] - The H,G1,G2 spline tables and the H,G12 conversion.
//!
mod bowell;
mod muinonen;

pub use bowell::*;
pub use muinonen::*;
