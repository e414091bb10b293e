//! Circuit response engine.
//!
//! Two independent, stateless analyses over the same [`CircuitParameters`]:
//!
//! - [`frequency_response`] sweeps 100 Hz..50 kHz on a log grid and reports
//!   the current magnitude |I| = V/|Z|, plus the resonance for RLC.
//! - [`time_response`] evaluates the closed-form step transient: capacitor
//!   voltage (RC), inductor current (RL), or the second-order response (RLC)
//!   classified by damping regime.
//!
//! Nothing here returns an error. Divisions by a vanishing impedance, time
//! constant or resistance are guarded by substituting a tiny epsilon, so the
//! worst case is a very large but finite value.

mod engine;
mod first_order;
mod frequency;
mod sampling;
mod second_order;
mod transient;

pub use engine::{Response, ResponseEngine, SweepConfig};
pub use first_order::{FirstOrderKind, FirstOrderTransient};
pub use frequency::{
    analytic_resonance_frequency, capacitive_reactance, impedance_magnitude, inductive_reactance,
    FrequencySweepResult,
};
pub use sampling::{linspace_from_zero, logspace};
pub use second_order::{DampingRegime, SecondOrderTransient};
pub use transient::{Quantity, TimeSweepResult};

use crate::circuit::{CircuitParameters, ExcitationState, Mode};

/// Lowest swept frequency (Hz).
pub const DEFAULT_F_MIN: f64 = 100.0;

/// Highest swept frequency (Hz).
pub const DEFAULT_F_MAX: f64 = 50_000.0;

/// Frequency samples per sweep.
pub const DEFAULT_FREQUENCY_POINTS: usize = 500;

/// Time samples for RC and RL.
pub const DEFAULT_FIRST_ORDER_POINTS: usize = 500;

/// Time samples for RLC.
pub const DEFAULT_SECOND_ORDER_POINTS: usize = 1000;

/// RLC time horizon (s).
pub const DEFAULT_SECOND_ORDER_HORIZON: f64 = 0.01;

/// RC/RL horizon in time constants.
pub const DEFAULT_HORIZON_TIME_CONSTANTS: f64 = 5.0;

/// Floor for impedance magnitudes before dividing.
pub const IMPEDANCE_EPSILON: f64 = 1e-12;

/// Stand-in for a zero time constant or resistance divisor.
pub const TIME_CONSTANT_EPSILON: f64 = 1e-12;

/// Stand-in for a zero time constant when sizing the RC/RL horizon (s).
pub const HORIZON_EPSILON: f64 = 1e-6;

/// |α - ω₀| below which an RLC circuit counts as critically damped.
pub const CRITICAL_DAMPING_TOLERANCE: f64 = 1e-6;

/// Replace a zero (or NaN) divisor with `epsilon`.
pub(crate) fn or_epsilon(x: f64, epsilon: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        epsilon
    } else {
        x
    }
}

/// Frequency sweep on the default grid.
pub fn frequency_response(params: &CircuitParameters) -> FrequencySweepResult {
    ResponseEngine::new().frequency_response(params)
}

/// Step response on the default grid (`None` for topology R).
pub fn time_response(
    params: &CircuitParameters,
    excitation: ExcitationState,
) -> Option<TimeSweepResult> {
    ResponseEngine::new().time_response(params, excitation)
}

/// Run the analysis selected by `mode` on the default grid.
pub fn simulate(
    params: &CircuitParameters,
    mode: Mode,
    excitation: ExcitationState,
) -> Option<Response> {
    ResponseEngine::new().simulate(params, mode, excitation)
}
