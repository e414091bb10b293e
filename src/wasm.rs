//! WASM bindings for the response engine.
//!
//! Inputs use form units (Ω, mH, nF, V). The source on/off switch stays in
//! JavaScript and is passed into each time-domain call.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { simulate_frequency, simulate_time } from 'rlc_response';
//!
//! await init();
//!
//! const freq = simulate_frequency('RLC', 100, 0, 10, 1000, 5);
//! Plotly.newPlot('plot', [{ x: freq.x, y: freq.y }], { xaxis: { type: 'log' } });
//!
//! let connected = true;
//! const time = simulate_time('RC', 1000, 0, 0, 100, 5, connected);
//! console.log(time.label, time.annotation);
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{validate_parameters, ExcitationState, Mode, Topology, UiParameters};
use crate::output::ChartLayout;
use crate::response::{frequency_response, time_response};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A computed response with its chart description.
#[wasm_bindgen]
pub struct WasmResponse {
    x: Vec<f64>,
    y: Vec<f64>,
    label: String,
    annotation: String,
    resonance: Option<f64>,
    layout: ChartLayout,
}

#[wasm_bindgen]
impl WasmResponse {
    /// Frequencies (Hz) or times (ms).
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> Vec<f64> {
        self.x.clone()
    }

    /// Current magnitude (A), or the transient voltage/current.
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Vec<f64> {
        self.y.clone()
    }

    /// Response name, empty for frequency sweeps.
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.label.clone()
    }

    /// Time constants or damping figures, empty for frequency sweeps.
    #[wasm_bindgen(getter)]
    pub fn annotation(&self) -> String {
        self.annotation.clone()
    }

    /// RLC resonance frequency (Hz), or `undefined`.
    #[wasm_bindgen(getter)]
    pub fn resonance(&self) -> Option<f64> {
        self.resonance
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.layout.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn x_title(&self) -> String {
        self.layout.x_title.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn y_title(&self) -> String {
        self.layout.y_title.to_string()
    }

    /// Whether the x axis should be logarithmic.
    #[wasm_bindgen(getter)]
    pub fn log_x(&self) -> bool {
        self.layout.log_x
    }

    /// Line shown under the chart (resonance readout).
    #[wasm_bindgen(getter)]
    pub fn info(&self) -> String {
        self.layout.info.clone()
    }
}

fn ui_parameters(
    topology: &str,
    r: f64,
    rs: f64,
    l_mh: f64,
    c_nf: f64,
    v: f64,
) -> Result<UiParameters, JsValue> {
    let topology: Topology = topology
        .parse()
        .map_err(|e: crate::error::ResponseError| JsValue::from_str(&e.to_string()))?;
    Ok(UiParameters {
        topology,
        r,
        rs,
        l_mh,
        c_nf,
        v,
    })
}

/// Frequency sweep, 100 Hz to 50 kHz.
#[wasm_bindgen]
pub fn simulate_frequency(
    topology: &str,
    r: f64,
    rs: f64,
    l_mh: f64,
    c_nf: f64,
    v: f64,
) -> Result<WasmResponse, JsValue> {
    let params = ui_parameters(topology, r, rs, l_mh, c_nf, v)?.to_si();
    let result = frequency_response(&params);
    let layout = ChartLayout::for_frequency(&params, &result);

    Ok(WasmResponse {
        resonance: result.resonance_frequency,
        x: result.frequencies,
        y: result.currents,
        label: String::new(),
        annotation: String::new(),
        layout,
    })
}

/// Step response with the source connected (`engaged = true`) or removed.
#[wasm_bindgen]
pub fn simulate_time(
    topology: &str,
    r: f64,
    rs: f64,
    l_mh: f64,
    c_nf: f64,
    v: f64,
    engaged: bool,
) -> Result<WasmResponse, JsValue> {
    let params = ui_parameters(topology, r, rs, l_mh, c_nf, v)?.to_si();
    validate_parameters(&params, Mode::Time).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = time_response(&params, ExcitationState::from_engaged(engaged))
        .ok_or_else(|| JsValue::from_str("no time response for this topology"))?;
    let layout = ChartLayout::for_time(&result);

    Ok(WasmResponse {
        label: result.label.to_string(),
        annotation: result.annotation,
        x: result.times_ms,
        y: result.values,
        resonance: None,
        layout,
    })
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
