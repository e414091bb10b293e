//! End-to-end checks of the engine through the public API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rlc_response::response::{
    frequency_response, logspace, time_response, DampingRegime, FirstOrderTransient, Quantity,
    SecondOrderTransient,
};
use rlc_response::{
    simulate, CircuitParameters, ExcitationState, Mode, Response, Topology, UiParameters,
};

fn params(topology: Topology, r: f64, rs: f64, l: f64, c: f64, v: f64) -> CircuitParameters {
    CircuitParameters::new(topology, r, rs, l, c, v)
}

#[test]
fn test_logspace_spans_bounds() {
    let xs = logspace(100.0, 50_000.0, 500);
    assert_relative_eq!(xs[0], 100.0, max_relative = 1e-12);
    assert_relative_eq!(xs[499], 50_000.0, max_relative = 1e-12);
    assert!(xs.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_frequency_sweep_grid() {
    let result = frequency_response(&params(Topology::RC, 1000.0, 0.0, 0.0, 1e-7, 5.0));
    assert_eq!(result.len(), 500);
    assert_relative_eq!(result.frequencies[0], 100.0, max_relative = 1e-12);
    assert_relative_eq!(result.frequencies[499], 50_000.0, max_relative = 1e-12);
}

#[test]
fn test_resistive_sweep_is_flat() {
    let result = frequency_response(&params(Topology::R, 470.0, 30.0, 0.0, 0.0, 5.0));
    let expected = 5.0 / 500.0;
    assert!(result
        .currents
        .iter()
        .all(|&i| (i - expected).abs() <= 1e-12 * expected));
}

#[test]
fn test_rlc_resonance() {
    let result = frequency_response(&params(Topology::RLC, 100.0, 0.0, 0.01, 1e-5, 5.0));
    let f_res = result.resonance_frequency.expect("RLC sweep reports a resonance");
    // Within one grid step (ratio ≈ 1.0125) of 1/(2π√(LC)) ≈ 503.29 Hz
    assert_relative_eq!(f_res, 503.29, max_relative = 0.0125);
    assert_relative_eq!(result.analytic_resonance.unwrap(), 503.29, max_relative = 1e-4);

    // Same formula for a different L·C
    let result = frequency_response(&params(Topology::RLC, 100.0, 0.0, 0.01, 1e-6, 5.0));
    let f_0 = 1.0 / (2.0 * std::f64::consts::PI * (0.01f64 * 1e-6).sqrt());
    assert_relative_eq!(result.analytic_resonance.unwrap(), f_0, max_relative = 1e-12);
    assert_relative_eq!(result.resonance_frequency.unwrap(), f_0, max_relative = 0.0125);
}

#[test]
fn test_lossless_rlc_stays_finite() {
    // R = Rs = 0 with reactances cancelling at 100 Hz, the first sample
    let l: f64 = 0.01;
    let c = 1.0 / ((2.0 * std::f64::consts::PI * 100.0).powi(2) * l);
    for topology in Topology::ALL {
        let result = frequency_response(&params(topology, 0.0, 0.0, l, c, 5.0));
        assert!(result.currents.iter().all(|i| i.is_finite() && *i >= 0.0));
    }

    let result = frequency_response(&params(Topology::RLC, 0.0, 0.0, l, c, 5.0));
    assert_eq!(result.resonance_frequency, Some(result.frequencies[0]));
    assert!(result.currents[0].is_finite());
    assert!(result.currents[0] > 1e9);
}

#[test]
fn test_rc_charging_properties() {
    let p = params(Topology::RC, 1000.0, 0.0, 0.0, 1e-7, 5.0);
    let transient = FirstOrderTransient::rc(&p, ExcitationState::Engaged);
    assert_relative_eq!(transient.value_at(1e-4), 3.1606, epsilon = 1e-3);

    let result = time_response(&p, ExcitationState::Engaged).unwrap();
    assert_eq!(result.len(), 500);
    assert_eq!(result.label, "charging");
    let last = *result.values.last().unwrap();
    assert!(last < 5.0 && last > 4.95);
}

#[test]
fn test_rc_discharging_properties() {
    let p = params(Topology::RC, 1000.0, 0.0, 0.0, 1e-7, 5.0);
    let result = time_response(&p, ExcitationState::Disengaged).unwrap();
    assert_eq!(result.values[0], 5.0);
    assert!(result.values.windows(2).all(|w| w[1] < w[0]));
    assert_abs_diff_eq!(*result.values.last().unwrap(), 0.0, epsilon = 0.05);
}

#[test]
fn test_rl_decay_from_steady_current() {
    let p = params(Topology::RL, 50.0, 50.0, 0.05, 0.0, 10.0);
    let growth = time_response(&p, ExcitationState::Engaged).unwrap();
    let decay = time_response(&p, ExcitationState::Disengaged).unwrap();
    assert_eq!(growth.quantity, Quantity::Current);
    assert_relative_eq!(decay.values[0], 0.1, max_relative = 1e-12);
    // Growth approaches the same steady current
    assert_relative_eq!(*growth.values.last().unwrap(), 0.1, max_relative = 0.01);
    // Decay runs through R only: τ_off = 1 ms, horizon 5 ms
    assert_relative_eq!(decay.horizon_ms(), 5.0, max_relative = 1e-12);
}

#[test]
fn test_rlc_underdamped() {
    let p = params(Topology::RLC, 50.0, 0.0, 0.1, 1e-6, 10.0);
    let transient = SecondOrderTransient::new(&p);
    assert_relative_eq!(transient.alpha, 250.0, max_relative = 1e-12);
    assert_relative_eq!(transient.omega_0, 3162.3, max_relative = 1e-4);

    let result = time_response(&p, ExcitationState::Engaged).unwrap();
    assert_eq!(result.regime, Some(DampingRegime::Underdamped));
    assert_eq!(result.label, "underdamped");
    assert_eq!(result.len(), 1000);
    assert_abs_diff_eq!(result.values[0], 0.0, epsilon = 1e-12);

    // Oscillates around V: crosses it several times within 10 ms
    let crossings = result
        .values
        .windows(2)
        .filter(|w| (w[0] - 10.0).signum() != (w[1] - 10.0).signum())
        .count();
    assert!(crossings >= 4);

    // Swings shrink with the e^(-αt) envelope
    let early = result.values[..200].iter().map(|y| (y - 10.0).abs()).fold(0.0, f64::max);
    let late = result.values[800..].iter().map(|y| (y - 10.0).abs()).fold(0.0, f64::max);
    assert!(late < early * 0.5);

    // y(t) = V - e^(-αt)(V cos ω_d t + (αV/ω_d) sin ω_d t)
    let omega_d = (1e7f64 - 62_500.0).sqrt();
    let k = 100;
    let t = result.times_ms[k] / 1000.0;
    let wt = omega_d * t;
    let expected =
        10.0 - (-250.0 * t).exp() * (10.0 * wt.cos() + (2500.0 / omega_d) * wt.sin());
    assert_relative_eq!(result.values[k], expected, max_relative = 1e-9);
}

#[test]
fn test_rlc_critically_damped() {
    // Choose R so that R/(2L) = 1/√(LC)
    let l: f64 = 0.1;
    let c: f64 = 1e-5;
    let r = 2.0 * l / (l * c).sqrt();
    let result = time_response(&params(Topology::RLC, r, 0.0, l, c, 10.0), ExcitationState::Engaged)
        .unwrap();
    assert_eq!(result.regime, Some(DampingRegime::CriticallyDamped));
    assert_eq!(result.label, "critically damped");

    // y(t) = V - e^(-αt)(V + αV t), α = 1000
    let k = 100;
    let t = result.times_ms[k] / 1000.0;
    let expected = 10.0 - (-1000.0 * t).exp() * (10.0 + 1000.0 * 10.0 * t);
    assert_relative_eq!(result.values[k], expected, max_relative = 1e-6);
}

#[test]
fn test_rlc_overdamped() {
    let result = time_response(
        &params(Topology::RLC, 2000.0, 0.0, 0.1, 1e-5, 10.0),
        ExcitationState::Engaged,
    )
    .unwrap();
    assert_eq!(result.regime, Some(DampingRegime::Overdamped));
    assert_eq!(result.values[0], 0.0);
    assert!(result.values.iter().all(|y| y.is_finite() && *y >= 0.0));

    // α = 10000, ω₀ = 1000: y(t) = A(e^(r₁t) - e^(r₂t)), A = V/(r₁ - r₂)
    let s = (1e8f64 - 1e6).sqrt();
    let (r1, r2) = (-10_000.0 + s, -10_000.0 - s);
    let a = 10.0 / (r1 - r2);
    let k = 100;
    let t = result.times_ms[k] / 1000.0;
    let expected = a * ((r1 * t).exp() - (r2 * t).exp());
    assert_relative_eq!(result.values[k], expected, max_relative = 1e-9);
}

#[test]
fn test_idempotent() {
    let p = params(Topology::RLC, 80.0, 5.0, 10e-3, 150e-9, 50.0);
    for mode in [Mode::Frequency, Mode::Time] {
        let a = simulate(&p, mode, ExcitationState::Engaged).unwrap();
        let b = simulate(&p, mode, ExcitationState::Engaged).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_form_units_match_si() {
    let ui = UiParameters {
        topology: Topology::RLC,
        r: 80.0,
        rs: 0.0,
        l_mh: 10.0,
        c_nf: 150.0,
        v: 50.0,
    };
    let from_ui = simulate(&ui.to_si(), Mode::Frequency, ExcitationState::Engaged);
    let direct = simulate(
        &params(Topology::RLC, 80.0, 0.0, 10e-3, 150e-9, 50.0),
        Mode::Frequency,
        ExcitationState::Engaged,
    );
    match (from_ui, direct) {
        (Some(Response::Frequency(a)), Some(Response::Frequency(b))) => {
            assert_eq!(a.resonance_frequency, b.resonance_frequency);
            for (x, y) in a.currents.iter().zip(&b.currents) {
                assert_relative_eq!(*x, *y, max_relative = 1e-12);
            }
        }
        other => panic!("unexpected responses: {:?}", other),
    }
}
