//! First-order step transients (RC capacitor voltage, RL inductor current).
//!
//! Both circuits follow the same exponential law with time constant τ:
//!
//! ```text
//! engaged:    y(t) = Y (1 - e^(-t/τ_on))
//! disengaged: y(t) = Y e^(-t/τ_off)
//! ```
//!
//! The series resistor Rs is only in the loop while the source is engaged,
//! so the two regimes have different time constants. Disengaging is assumed
//! to happen after the engaged transient has settled, so the decay starts
//! from the engaged final value.

use crate::circuit::{CircuitParameters, ExcitationState};

use super::{or_epsilon, TIME_CONSTANT_EPSILON};

/// Which exponential a first-order circuit is following.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstOrderKind {
    /// RC, source engaged
    Charging,
    /// RC, source disengaged
    Discharging,
    /// RL, source engaged
    CurrentGrowth,
    /// RL, source disengaged
    CurrentDecay,
}

impl FirstOrderKind {
    /// Human-readable response name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Charging => "charging",
            Self::Discharging => "discharging",
            Self::CurrentGrowth => "current growth",
            Self::CurrentDecay => "current decay",
        }
    }

    /// Check if the response rises toward its final value.
    pub fn is_rising(&self) -> bool {
        matches!(self, Self::Charging | Self::CurrentGrowth)
    }
}

/// Closed-form first-order transient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderTransient {
    pub kind: FirstOrderKind,
    /// Final value when rising, initial value when decaying
    pub amplitude: f64,
    /// Time constant with the source engaged (s), as computed
    pub tau_on: f64,
    /// Time constant with the source disengaged (s), as computed
    pub tau_off: f64,
}

impl FirstOrderTransient {
    /// RC capacitor voltage: τ_on = (R+Rs)C, τ_off = RC.
    pub fn rc(params: &CircuitParameters, excitation: ExcitationState) -> Self {
        let c = params.effective_capacitance();
        Self {
            kind: if excitation.is_engaged() {
                FirstOrderKind::Charging
            } else {
                FirstOrderKind::Discharging
            },
            amplitude: params.v,
            tau_on: params.total_resistance() * c,
            tau_off: params.r * c,
        }
    }

    /// RL inductor current: τ_on = L/(R+Rs), τ_off = L/R, I∞ = V/(R+Rs).
    ///
    /// Zero resistances are replaced by a tiny epsilon, giving a very long
    /// but finite time constant.
    pub fn rl(params: &CircuitParameters, excitation: ExcitationState) -> Self {
        let l = params.effective_inductance();
        let r_on = or_epsilon(params.total_resistance(), TIME_CONSTANT_EPSILON);
        let r_off = or_epsilon(params.r, TIME_CONSTANT_EPSILON);
        Self {
            kind: if excitation.is_engaged() {
                FirstOrderKind::CurrentGrowth
            } else {
                FirstOrderKind::CurrentDecay
            },
            amplitude: params.v / r_on,
            tau_on: l / r_on,
            tau_off: l / r_off,
        }
    }

    /// Time constant of the regime being followed.
    pub fn active_tau(&self) -> f64 {
        if self.kind.is_rising() {
            self.tau_on
        } else {
            self.tau_off
        }
    }

    /// Response at time `t` (s).
    pub fn value_at(&self, t: f64) -> f64 {
        let tau = or_epsilon(self.active_tau(), TIME_CONSTANT_EPSILON);
        let decay = (-t / tau).exp();
        if self.kind.is_rising() {
            self.amplitude * (1.0 - decay)
        } else {
            self.amplitude * decay
        }
    }

    /// Both time constants in milliseconds, e.g. `τ_on=0.10 ms, τ_off=0.10 ms`.
    pub fn annotation(&self) -> String {
        format!(
            "τ_on={:.2} ms, τ_off={:.2} ms",
            self.tau_on * 1000.0,
            self.tau_off * 1000.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Topology;
    use approx::assert_relative_eq;

    fn rc_params() -> CircuitParameters {
        CircuitParameters::new(Topology::RC, 1000.0, 0.0, 0.0, 1e-7, 5.0)
    }

    #[test]
    fn test_rc_charging_one_tau() {
        let rc = FirstOrderTransient::rc(&rc_params(), ExcitationState::Engaged);
        assert_eq!(rc.kind, FirstOrderKind::Charging);
        assert_relative_eq!(rc.tau_on, 1e-4, max_relative = 1e-12);
        assert_eq!(rc.value_at(0.0), 0.0);
        assert_relative_eq!(rc.value_at(1e-4), 5.0 * (1.0 - (-1.0f64).exp()), max_relative = 1e-12);
        assert_relative_eq!(rc.value_at(1e-4), 3.16, epsilon = 0.01);
    }

    #[test]
    fn test_rc_discharging_starts_at_source_voltage() {
        let rc = FirstOrderTransient::rc(&rc_params(), ExcitationState::Disengaged);
        assert_eq!(rc.kind, FirstOrderKind::Discharging);
        assert_eq!(rc.value_at(0.0), 5.0);
        assert_relative_eq!(rc.value_at(1e-4), 5.0 * (-1.0f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_rc_series_resistance_only_while_engaged() {
        let p = CircuitParameters::new(Topology::RC, 1000.0, 500.0, 0.0, 1e-6, 5.0);
        let rc = FirstOrderTransient::rc(&p, ExcitationState::Engaged);
        assert_relative_eq!(rc.tau_on, 1.5e-3, max_relative = 1e-12);
        assert_relative_eq!(rc.tau_off, 1.0e-3, max_relative = 1e-12);
        assert_eq!(rc.annotation(), "τ_on=1.50 ms, τ_off=1.00 ms");
    }

    #[test]
    fn test_rl_growth_and_decay() {
        let p = CircuitParameters::new(Topology::RL, 100.0, 100.0, 0.2, 0.0, 10.0);
        let growth = FirstOrderTransient::rl(&p, ExcitationState::Engaged);
        assert_eq!(growth.kind.label(), "current growth");
        assert_relative_eq!(growth.amplitude, 0.05, max_relative = 1e-12);
        assert_relative_eq!(growth.tau_on, 1e-3, max_relative = 1e-12);
        assert_relative_eq!(growth.tau_off, 2e-3, max_relative = 1e-12);

        let decay = FirstOrderTransient::rl(&p, ExcitationState::Disengaged);
        assert_eq!(decay.kind.label(), "current decay");
        // Decay starts from the engaged steady-state current
        assert_relative_eq!(decay.value_at(0.0), 0.05, max_relative = 1e-12);
        assert_relative_eq!(decay.value_at(2e-3), 0.05 * (-1.0f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_rl_zero_resistance_stays_finite() {
        let p = CircuitParameters::new(Topology::RL, 0.0, 0.0, 0.1, 0.0, 1.0);
        let rl = FirstOrderTransient::rl(&p, ExcitationState::Engaged);
        assert!(rl.amplitude.is_finite());
        assert!(rl.tau_on.is_finite());
        assert!(rl.value_at(1e-3).is_finite());
    }

    #[test]
    fn test_rc_zero_capacitance_settles_instantly() {
        let p = CircuitParameters::new(Topology::RC, 1000.0, 0.0, 0.0, 0.0, 5.0);
        let rc = FirstOrderTransient::rc(&p, ExcitationState::Engaged);
        assert_eq!(rc.tau_on, 0.0);
        assert_eq!(rc.value_at(0.0), 0.0);
        assert_relative_eq!(rc.value_at(1e-6), 5.0);
    }
}
