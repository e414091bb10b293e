//! Series RLC step response from rest.
//!
//! With α = (R+Rs)/(2L) and ω₀ = 1/√(LC) the characteristic roots are
//! `-α ± √(α² - ω₀²)`, giving three damping regimes:
//!
//! | Regime | Condition | Response |
//! |--------|-----------|----------|
//! | Critically damped | \|α - ω₀\| < 1e-6 | `V - e^(-αt) (V + αV t)` |
//! | Overdamped | α > ω₀ | `A e^(r₁t) - A e^(r₂t)`, `A = V/(r₁ - r₂)` |
//! | Underdamped | α < ω₀ | `V - e^(-αt) (V cos ω_d t + (αV/ω_d) sin ω_d t)` |
//!
//! Every regime starts at zero. Requires L > 0 and C > 0; this is not checked
//! here (see [`crate::circuit::validate_parameters`]).

use crate::circuit::CircuitParameters;

use super::CRITICAL_DAMPING_TOLERANCE;

/// Damping classification of a second-order transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingRegime {
    /// Two distinct real roots, no overshoot
    Overdamped,
    /// Repeated real root
    CriticallyDamped,
    /// Complex roots, decaying oscillation
    Underdamped,
}

impl DampingRegime {
    /// Classify by comparing α with ω₀.
    ///
    /// The near-equality test comes first so that rounding in α or ω₀ cannot
    /// push a critically damped circuit into the overdamped branch.
    pub fn classify(alpha: f64, omega_0: f64) -> Self {
        if (alpha - omega_0).abs() < CRITICAL_DAMPING_TOLERANCE {
            Self::CriticallyDamped
        } else if alpha > omega_0 {
            Self::Overdamped
        } else {
            Self::Underdamped
        }
    }

    /// Human-readable regime name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdamped => "overdamped",
            Self::CriticallyDamped => "critically damped",
            Self::Underdamped => "underdamped",
        }
    }
}

/// Regime-specific coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Solution {
    Overdamped { r1: f64, r2: f64, a: f64, b: f64 },
    CriticallyDamped { a: f64, b: f64 },
    Underdamped { omega_d: f64, a: f64, b: f64 },
}

/// Closed-form RLC step response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondOrderTransient {
    /// Damping coefficient α (1/s)
    pub alpha: f64,
    /// Undamped natural frequency ω₀ (rad/s)
    pub omega_0: f64,
    /// Source voltage (V)
    pub v: f64,
    solution: Solution,
}

impl SecondOrderTransient {
    /// Build the response for an engaged step from rest.
    pub fn new(params: &CircuitParameters) -> Self {
        let alpha = params.total_resistance() / (2.0 * params.l);
        let omega_0 = 1.0 / (params.l * params.c).sqrt();
        let v = params.v;

        let solution = match DampingRegime::classify(alpha, omega_0) {
            DampingRegime::Overdamped => {
                let s = (alpha * alpha - omega_0 * omega_0).sqrt();
                let r1 = -alpha + s;
                let r2 = -alpha - s;
                let a = v / (r1 - r2);
                Solution::Overdamped { r1, r2, a, b: -a }
            }
            DampingRegime::CriticallyDamped => Solution::CriticallyDamped { a: v, b: alpha * v },
            DampingRegime::Underdamped => {
                let omega_d = (omega_0 * omega_0 - alpha * alpha).sqrt();
                Solution::Underdamped {
                    omega_d,
                    a: v,
                    b: alpha * v / omega_d,
                }
            }
        };

        tracing::debug!(alpha, omega_0, regime = ?solution, "second-order regime selected");

        Self {
            alpha,
            omega_0,
            v,
            solution,
        }
    }

    /// The damping regime in effect.
    pub fn regime(&self) -> DampingRegime {
        match self.solution {
            Solution::Overdamped { .. } => DampingRegime::Overdamped,
            Solution::CriticallyDamped { .. } => DampingRegime::CriticallyDamped,
            Solution::Underdamped { .. } => DampingRegime::Underdamped,
        }
    }

    /// Damped oscillation frequency ω_d (underdamped only).
    pub fn damped_frequency(&self) -> Option<f64> {
        match self.solution {
            Solution::Underdamped { omega_d, .. } => Some(omega_d),
            _ => None,
        }
    }

    /// Response at time `t` (s).
    pub fn value_at(&self, t: f64) -> f64 {
        match self.solution {
            Solution::Overdamped { r1, r2, a, b } => a * (r1 * t).exp() + b * (r2 * t).exp(),
            Solution::CriticallyDamped { a, b } => self.v - (-self.alpha * t).exp() * (a + b * t),
            Solution::Underdamped { omega_d, a, b } => {
                let wt = omega_d * t;
                self.v - (-self.alpha * t).exp() * (a * wt.cos() + b * wt.sin())
            }
        }
    }

    /// `α=…, ω₀=…` with two decimals.
    pub fn annotation(&self) -> String {
        format!("α={:.2}, ω₀={:.2}", self.alpha, self.omega_0)
    }
}
