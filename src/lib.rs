//! # RLC Response
//!
//! Electrical response of series R, RC, RL and RLC one-port circuits.
//!
//! This library provides:
//! - A frequency sweep of current magnitude with resonance detection
//! - Closed-form step transients for RC (capacitor voltage), RL (inductor
//!   current) and RLC (overdamped, critically damped or underdamped)
//! - Chart layout descriptions and CSV output for front ends
//!
//! ## Architecture
//!
//! - [`circuit`] - Topology, parameter records and boundary checks
//! - [`response`] - The stateless response engine
//! - [`output`] - CSV writers and chart layouts
//! - [`error`] - Error type for the boundary (the engine itself never fails)
//!
//! ## Usage
//!
//! ```
//! use rlc_response::{CircuitParameters, ExcitationState, Topology};
//! use rlc_response::response::{frequency_response, time_response};
//!
//! let params = CircuitParameters::new(Topology::RLC, 100.0, 0.0, 0.01, 1e-6, 5.0);
//! let sweep = frequency_response(&params);
//! assert!(sweep.resonance_frequency.is_some());
//!
//! let step = time_response(&params, ExcitationState::Engaged).unwrap();
//! assert_eq!(step.values[0], 0.0);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! rlcsim --topology rlc --mode frequency -r 100 -l 10 -c 1000 -v 5 > sweep.csv
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { simulate_time } from 'rlc_response';
//!
//! const result = simulate_time('RC', 1000, 0, 0, 100, 5, connected);
//! ```
//!
//! ## Units
//!
//! The engine works in SI base units (Ω, H, F, V, s). Forms usually take
//! inductance in mH and capacitance in nF; [`circuit::UiParameters`] does the
//! conversion. Times in results are reported in milliseconds, frequencies in
//! hertz.

pub mod circuit;
pub mod error;
pub mod output;
pub mod response;

// Re-export main types for convenience
pub use circuit::{CircuitParameters, ExcitationState, Mode, Topology, UiParameters};
pub use error::{ResponseError, Result};
pub use response::{
    simulate, FrequencySweepResult, Response, ResponseEngine, SweepConfig, TimeSweepResult,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{simulate_frequency, simulate_time, WasmResponse};
