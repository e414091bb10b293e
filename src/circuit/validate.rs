//! Boundary checks run by callers before invoking the engine.
//!
//! The engine does not call these: it accepts any finite input and degrades
//! gracefully. Front ends use them to report a readable error instead of
//! plotting NaN.

use crate::error::{ResponseError, Result};

use super::{CircuitParameters, Mode, Topology};

/// Validate parameters for the requested analysis.
///
/// Checks:
/// - Every value is finite
/// - Time mode is defined for the topology (not for a bare resistor)
/// - RLC time response has positive inductance and capacitance
pub fn validate_parameters(params: &CircuitParameters, mode: Mode) -> Result<()> {
    let fields = [
        ("R", params.r),
        ("Rs", params.rs),
        ("L", params.l),
        ("C", params.c),
        ("V", params.v),
    ];
    for (param, value) in fields {
        if !value.is_finite() {
            return Err(ResponseError::NonFiniteParameter { param, value });
        }
    }

    if mode == Mode::Time {
        match params.topology {
            Topology::R => return Err(ResponseError::unsupported("Time", params.topology)),
            Topology::RLC => {
                if params.l <= 0.0 {
                    return Err(ResponseError::invalid_parameter(
                        "L",
                        "RLC time response",
                        "inductance must be positive",
                    ));
                }
                if params.c <= 0.0 {
                    return Err(ResponseError::invalid_parameter(
                        "C",
                        "RLC time response",
                        "capacitance must be positive",
                    ));
                }
            }
            Topology::RC | Topology::RL => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rlc(l: f64, c: f64) -> CircuitParameters {
        CircuitParameters::new(Topology::RLC, 50.0, 0.0, l, c, 10.0)
    }

    #[test]
    fn test_rlc_time_requires_reactive_elements() {
        assert!(validate_parameters(&rlc(0.1, 1e-6), Mode::Time).is_ok());
        assert!(matches!(
            validate_parameters(&rlc(0.0, 1e-6), Mode::Time),
            Err(ResponseError::InvalidParameter { param: "L", .. })
        ));
        assert!(matches!(
            validate_parameters(&rlc(0.1, 0.0), Mode::Time),
            Err(ResponseError::InvalidParameter { param: "C", .. })
        ));
        // The frequency sweep tolerates missing elements.
        assert!(validate_parameters(&rlc(0.0, 0.0), Mode::Frequency).is_ok());
    }

    #[test]
    fn test_resistor_has_no_time_response() {
        let p = CircuitParameters::new(Topology::R, 100.0, 0.0, 0.0, 0.0, 1.0);
        assert!(matches!(
            validate_parameters(&p, Mode::Time),
            Err(ResponseError::UnsupportedAnalysis { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut p = rlc(0.1, 1e-6);
        p.v = f64::NAN;
        assert!(matches!(
            validate_parameters(&p, Mode::Frequency),
            Err(ResponseError::NonFiniteParameter { param: "V", .. })
        ));
    }
}
