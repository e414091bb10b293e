//! Time-domain sweeps built from the closed-form transients.

use crate::circuit::{CircuitParameters, ExcitationState, Topology};

use super::engine::SweepConfig;
use super::first_order::FirstOrderTransient;
use super::sampling::linspace_from_zero;
use super::second_order::{DampingRegime, SecondOrderTransient};
use super::{or_epsilon, HORIZON_EPSILON};

/// Physical quantity plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Voltage,
    Current,
}

impl Quantity {
    /// Axis title with unit.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Quantity::Voltage => "Voltage (V)",
            Quantity::Current => "Current (A)",
        }
    }

    /// Column header for tabular output.
    pub fn column_name(&self) -> &'static str {
        match self {
            Quantity::Voltage => "Voltage_V",
            Quantity::Current => "Current_A",
        }
    }
}

/// Result of a time-domain sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSweepResult {
    /// Topology the response was computed for
    pub topology: Topology,
    /// Sample times (ms), from 0 to the horizon
    pub times_ms: Vec<f64>,
    /// Response value at each sample
    pub values: Vec<f64>,
    /// Response name ("charging", "underdamped", ...)
    pub label: &'static str,
    /// Time constants or damping figures
    pub annotation: String,
    /// What `values` measures
    pub quantity: Quantity,
    /// Damping regime (RLC only)
    pub regime: Option<DampingRegime>,
}

impl TimeSweepResult {
    /// Iterate over (time in ms, value) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times_ms.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times_ms.len()
    }

    /// Check if the sweep is empty.
    pub fn is_empty(&self) -> bool {
        self.times_ms.is_empty()
    }

    /// Last sample time (ms).
    pub fn horizon_ms(&self) -> f64 {
        self.times_ms.last().copied().unwrap_or(0.0)
    }
}

/// Compute the time response for the topology.
///
/// Returns `None` for a bare resistor, which has no transient. The RLC
/// response is always an engaged step from rest; `excitation` only affects
/// RC and RL.
pub(crate) fn sweep(
    params: &CircuitParameters,
    excitation: ExcitationState,
    config: &SweepConfig,
) -> Option<TimeSweepResult> {
    let _span = tracing::debug_span!(
        "time_response",
        topology = %params.topology,
        %excitation
    )
    .entered();

    match params.topology {
        Topology::R => {
            tracing::debug!("no transient for a purely resistive circuit");
            None
        }
        Topology::RC => Some(first_order(
            params.topology,
            FirstOrderTransient::rc(params, excitation),
            Quantity::Voltage,
            config,
        )),
        Topology::RL => Some(first_order(
            params.topology,
            FirstOrderTransient::rl(params, excitation),
            Quantity::Current,
            config,
        )),
        Topology::RLC => Some(second_order(params, config)),
    }
}

fn first_order(
    topology: Topology,
    transient: FirstOrderTransient,
    quantity: Quantity,
    config: &SweepConfig,
) -> TimeSweepResult {
    let tau = transient.active_tau();
    if tau == 0.0 {
        tracing::debug!("degenerate time constant, using minimum horizon");
    }
    let t_max = config.horizon_time_constants * or_epsilon(tau, HORIZON_EPSILON);
    let times = linspace_from_zero(t_max, config.first_order_points);

    TimeSweepResult {
        topology,
        values: times.iter().map(|&t| transient.value_at(t)).collect(),
        times_ms: times.iter().map(|&t| t * 1000.0).collect(),
        label: transient.kind.label(),
        annotation: transient.annotation(),
        quantity,
        regime: None,
    }
}

fn second_order(params: &CircuitParameters, config: &SweepConfig) -> TimeSweepResult {
    let transient = SecondOrderTransient::new(params);
    let regime = transient.regime();
    let times = linspace_from_zero(config.second_order_horizon, config.second_order_points);

    TimeSweepResult {
        topology: params.topology,
        values: times.iter().map(|&t| transient.value_at(t)).collect(),
        times_ms: times.iter().map(|&t| t * 1000.0).collect(),
        label: regime.label(),
        annotation: transient.annotation(),
        quantity: Quantity::Voltage,
        regime: Some(regime),
    }
}
