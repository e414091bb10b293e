//! Circuit parameter records.

use super::types::Topology;

/// Millihenries to henries.
pub const MILLIHENRY: f64 = 1e-3;

/// Nanofarads to farads.
pub const NANOFARAD: f64 = 1e-9;

/// Parameters of a single engine invocation, in SI base units.
///
/// Values are taken as given: the engine assumes finite numbers and leaves
/// sanitizing to the caller (see [`UiParameters::to_si`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParameters {
    /// Circuit type
    pub topology: Topology,
    /// Main resistance (Ω)
    pub r: f64,
    /// Series / damping resistance (Ω)
    pub rs: f64,
    /// Inductance (H)
    pub l: f64,
    /// Capacitance (F)
    pub c: f64,
    /// Source voltage (V)
    pub v: f64,
}

impl CircuitParameters {
    /// Create a parameter record from SI values.
    pub fn new(topology: Topology, r: f64, rs: f64, l: f64, c: f64, v: f64) -> Self {
        Self {
            topology,
            r,
            rs,
            l,
            c,
            v,
        }
    }

    /// Total series resistance R + Rs.
    pub fn total_resistance(&self) -> f64 {
        self.r + self.rs
    }

    /// Inductance seen by the analysis: zero when the topology has no inductor.
    pub fn effective_inductance(&self) -> f64 {
        if self.topology.has_inductor() {
            self.l
        } else {
            0.0
        }
    }

    /// Capacitance seen by the analysis: zero when the topology has no capacitor.
    pub fn effective_capacitance(&self) -> f64 {
        if self.topology.has_capacitor() {
            self.c
        } else {
            0.0
        }
    }
}

/// Parameters as entered in a form: inductance in mH, capacitance in nF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiParameters {
    /// Circuit type
    pub topology: Topology,
    /// Main resistance (Ω)
    pub r: f64,
    /// Series / damping resistance (Ω)
    pub rs: f64,
    /// Inductance (mH)
    pub l_mh: f64,
    /// Capacitance (nF)
    pub c_nf: f64,
    /// Source voltage (V)
    pub v: f64,
}

impl Default for UiParameters {
    fn default() -> Self {
        Self {
            topology: Topology::RC,
            r: 1000.0,
            rs: 0.0,
            l_mh: 0.0,
            c_nf: 100.0,
            v: 5.0,
        }
    }
}

impl UiParameters {
    /// Convert to SI units for the engine.
    ///
    /// Non-finite fields (an unparsable or empty input) become zero.
    pub fn to_si(&self) -> CircuitParameters {
        CircuitParameters {
            topology: self.topology,
            r: finite_or_zero(self.r),
            rs: finite_or_zero(self.rs),
            l: finite_or_zero(self.l_mh) * MILLIHENRY,
            c: finite_or_zero(self.c_nf) * NANOFARAD,
            v: finite_or_zero(self.v),
        }
    }
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}
