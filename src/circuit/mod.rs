//! Circuit description and boundary handling.
//!
//! This module holds the plain records handed to the response engine: the
//! [`Topology`], the [`CircuitParameters`] in SI units, the caller-owned
//! [`ExcitationState`], and the [`Mode`] selector. [`UiParameters`] converts
//! form units (mH, nF) to SI at the boundary.

mod params;
mod types;
mod validate;

pub use params::{CircuitParameters, UiParameters, MILLIHENRY, NANOFARAD};
pub use types::*;
pub use validate::validate_parameters;
