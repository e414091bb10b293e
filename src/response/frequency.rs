//! Sinusoidal steady-state sweep.
//!
//! For each sampled frequency f:
//!   1. X_L = 2πfL and X_C = 1/(2πfC) for the elements present
//!   2. |Z| = sqrt(Rtot² + (X_L - X_C)²), keeping only the active terms
//!   3. |I| = V / |Z|
//!
//! The minimum |Z| over the sweep marks the RLC resonance.

use std::f64::consts::PI;

use crate::circuit::{CircuitParameters, Topology};

use super::engine::SweepConfig;
use super::sampling::logspace;
use super::IMPEDANCE_EPSILON;

/// Result of a frequency sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySweepResult {
    /// Topology the sweep was computed for
    pub topology: Topology,
    /// Sampled frequencies (Hz), log-spaced and increasing
    pub frequencies: Vec<f64>,
    /// Current magnitude (A) at each frequency
    pub currents: Vec<f64>,
    /// Sample frequency with the smallest impedance (RLC only)
    pub resonance_frequency: Option<f64>,
    /// Closed-form 1/(2π√(LC)) (RLC with positive L and C only)
    pub analytic_resonance: Option<f64>,
}

impl FrequencySweepResult {
    /// Iterate over (frequency, current) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.currents.iter().copied())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Check if the sweep is empty.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Largest current in the sweep (0 when empty).
    pub fn max_current(&self) -> f64 {
        self.currents.iter().copied().fold(0.0, f64::max)
    }
}

/// Inductive reactance X_L = 2πfL (zero if the element is absent or L <= 0).
pub fn inductive_reactance(params: &CircuitParameters, frequency: f64) -> f64 {
    let l = params.effective_inductance();
    if l > 0.0 {
        2.0 * PI * frequency * l
    } else {
        0.0
    }
}

/// Capacitive reactance X_C = 1/(2πfC) (zero if the element is absent or C <= 0).
pub fn capacitive_reactance(params: &CircuitParameters, frequency: f64) -> f64 {
    let c = params.effective_capacitance();
    if c > 0.0 {
        1.0 / (2.0 * PI * frequency * c)
    } else {
        0.0
    }
}

/// Series impedance magnitude |Z| at a frequency.
pub fn impedance_magnitude(params: &CircuitParameters, frequency: f64) -> f64 {
    let r_tot = params.total_resistance();
    let x_l = inductive_reactance(params, frequency);
    let x_c = capacitive_reactance(params, frequency);

    match params.topology {
        Topology::R => r_tot,
        Topology::RL => r_tot.hypot(x_l),
        Topology::RC => r_tot.hypot(x_c),
        Topology::RLC => r_tot.hypot(x_l - x_c),
    }
}

/// Closed-form series resonance 1/(2π√(LC)).
///
/// Returns `None` unless both `l` and `c` are positive.
pub fn analytic_resonance_frequency(l: f64, c: f64) -> Option<f64> {
    if l > 0.0 && c > 0.0 {
        Some(1.0 / (2.0 * PI * (l * c).sqrt()))
    } else {
        None
    }
}

/// Run the sweep over the configured band.
pub(crate) fn sweep(params: &CircuitParameters, config: &SweepConfig) -> FrequencySweepResult {
    let frequencies = logspace(config.f_min, config.f_max, config.frequency_points);
    let _span = tracing::debug_span!(
        "frequency_response",
        topology = %params.topology,
        n_points = frequencies.len()
    )
    .entered();

    let mut currents = Vec::with_capacity(frequencies.len());
    let mut z_min = f64::INFINITY;
    let mut resonance_frequency = None;

    for &f in &frequencies {
        let z = impedance_magnitude(params, f);
        if z < IMPEDANCE_EPSILON {
            tracing::trace!(frequency = f, z, "impedance floored to epsilon");
        }
        currents.push(params.v / z.max(IMPEDANCE_EPSILON));

        if z < z_min {
            z_min = z;
            if params.topology == Topology::RLC {
                resonance_frequency = Some(f);
            }
        }
    }

    let analytic_resonance = match params.topology {
        Topology::RLC => analytic_resonance_frequency(params.l, params.c),
        _ => None,
    };

    tracing::debug!(
        z_min,
        ?resonance_frequency,
        ?analytic_resonance,
        "frequency sweep complete"
    );

    FrequencySweepResult {
        topology: params.topology,
        frequencies,
        currents,
        resonance_frequency,
        analytic_resonance,
    }
}
