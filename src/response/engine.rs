//! Engine entry point and sweep configuration.

use crate::circuit::{CircuitParameters, ExcitationState, Mode};

use super::frequency::{self, FrequencySweepResult};
use super::transient::{self, TimeSweepResult};
use super::{
    DEFAULT_FIRST_ORDER_POINTS, DEFAULT_F_MAX, DEFAULT_F_MIN, DEFAULT_FREQUENCY_POINTS,
    DEFAULT_HORIZON_TIME_CONSTANTS, DEFAULT_SECOND_ORDER_HORIZON, DEFAULT_SECOND_ORDER_POINTS,
};

/// Sweep grid configuration.
///
/// The defaults are the standard grids: 500 log-spaced points over
/// 100 Hz..50 kHz, 500 first-order samples over five time constants, and
/// 1000 RLC samples over 10 ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Lowest swept frequency (Hz)
    pub f_min: f64,
    /// Highest swept frequency (Hz)
    pub f_max: f64,
    /// Number of frequency samples
    pub frequency_points: usize,
    /// Number of RC/RL time samples
    pub first_order_points: usize,
    /// Number of RLC time samples
    pub second_order_points: usize,
    /// RLC time horizon (s)
    pub second_order_horizon: f64,
    /// RC/RL horizon in multiples of the active time constant
    pub horizon_time_constants: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            f_min: DEFAULT_F_MIN,
            f_max: DEFAULT_F_MAX,
            frequency_points: DEFAULT_FREQUENCY_POINTS,
            first_order_points: DEFAULT_FIRST_ORDER_POINTS,
            second_order_points: DEFAULT_SECOND_ORDER_POINTS,
            second_order_horizon: DEFAULT_SECOND_ORDER_HORIZON,
            horizon_time_constants: DEFAULT_HORIZON_TIME_CONSTANTS,
        }
    }
}

impl SweepConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the swept frequency band (Hz). Both bounds must be positive.
    pub fn with_band(mut self, f_min: f64, f_max: f64) -> Self {
        self.f_min = f_min;
        self.f_max = f_max;
        self
    }

    /// Set the number of frequency samples (at least 2).
    pub fn with_frequency_points(mut self, points: usize) -> Self {
        self.frequency_points = points;
        self
    }

    /// Set the number of RC/RL time samples (at least 2).
    pub fn with_first_order_points(mut self, points: usize) -> Self {
        self.first_order_points = points;
        self
    }

    /// Set the number of RLC time samples (at least 2).
    pub fn with_second_order_points(mut self, points: usize) -> Self {
        self.second_order_points = points;
        self
    }

    /// Set the RLC time horizon in seconds.
    pub fn with_second_order_horizon(mut self, horizon: f64) -> Self {
        self.second_order_horizon = horizon;
        self
    }

    /// Set the RC/RL horizon as a multiple of the time constant.
    pub fn with_horizon_time_constants(mut self, multiple: f64) -> Self {
        self.horizon_time_constants = multiple;
        self
    }
}

/// Output of one engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Frequency(FrequencySweepResult),
    Time(TimeSweepResult),
}

/// Circuit response engine.
///
/// Holds only its sweep configuration; every call is an independent pure
/// computation, so one engine can serve any number of callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseEngine {
    config: SweepConfig,
}

impl ResponseEngine {
    /// Create an engine with the default sweep grids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom sweep grids.
    pub fn with_config(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Get the sweep configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Sweep the frequency band and report current magnitude.
    pub fn frequency_response(&self, params: &CircuitParameters) -> FrequencySweepResult {
        frequency::sweep(params, &self.config)
    }

    /// Step response for the given excitation (`None` for topology R).
    pub fn time_response(
        &self,
        params: &CircuitParameters,
        excitation: ExcitationState,
    ) -> Option<TimeSweepResult> {
        transient::sweep(params, excitation, &self.config)
    }

    /// Run the analysis selected by `mode`.
    ///
    /// `excitation` is ignored in frequency mode.
    pub fn simulate(
        &self,
        params: &CircuitParameters,
        mode: Mode,
        excitation: ExcitationState,
    ) -> Option<Response> {
        match mode {
            Mode::Frequency => Some(Response::Frequency(self.frequency_response(params))),
            Mode::Time => self.time_response(params, excitation).map(Response::Time),
        }
    }
}
