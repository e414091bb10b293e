//! Results output: CSV tables and chart layout descriptions.
//!
//! The engine does no rendering. A [`ChartLayout`] carries everything a
//! plotting front end needs beyond the data series: titles, axis labels,
//! the axis scale, and the optional resonance marker.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::circuit::CircuitParameters;
use crate::error::{ResponseError, Result};
use crate::response::{FrequencySweepResult, Response, TimeSweepResult};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One row per sample
    #[default]
    Csv,
    /// Title, response name and key figures
    Summary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Summary => f.write_str("summary"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ResponseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "summary" | "text" => Ok(OutputFormat::Summary),
            _ => Err(ResponseError::UnknownFormat { name: s.to_string() }),
        }
    }
}

/// Write a response in the chosen format.
pub fn write_response<W: Write>(
    format: OutputFormat,
    params: &CircuitParameters,
    response: &Response,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(response, writer),
        OutputFormat::Summary => write_summary(params, response, writer),
    }
}

/// Vertical line drawn at a frequency, spanning `[0, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y_max: f64,
}

/// Renderer-agnostic chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    /// Logarithmic x axis
    pub log_x: bool,
    /// Series name for the legend
    pub series_name: String,
    pub marker: Option<Marker>,
    /// Extra line shown under the chart (empty when there is nothing to say)
    pub info: String,
}

impl ChartLayout {
    /// Layout for a frequency sweep, with values shown in form units.
    pub fn for_frequency(params: &CircuitParameters, result: &FrequencySweepResult) -> Self {
        let marker = result.resonance_frequency.map(|x| Marker {
            x,
            y_max: result.max_current(),
        });
        let info = result
            .resonance_frequency
            .map(|f| format!("≈ Resonance frequency: {:.2} Hz", f))
            .unwrap_or_default();

        Self {
            title: format!(
                "Frequency response ({}) — R={}Ω, Rs={}Ω, L={:.1} mH, C={:.1} nF, V={}V",
                result.topology,
                params.r,
                params.rs,
                params.l * 1e3,
                params.c * 1e9,
                params.v
            ),
            x_title: "Frequency (Hz)",
            y_title: "Current (A)",
            log_x: true,
            series_name: "|I| (A)".to_string(),
            marker,
            info,
        }
    }

    /// Layout for a time sweep.
    pub fn for_time(result: &TimeSweepResult) -> Self {
        Self {
            title: format!("Time response ({}) — {}", result.topology, result.annotation),
            x_title: "Time (ms)",
            y_title: result.quantity.axis_label(),
            log_x: false,
            series_name: result.label.to_string(),
            marker: None,
            info: String::new(),
        }
    }

    /// Layout for either kind of response.
    pub fn for_response(params: &CircuitParameters, response: &Response) -> Self {
        match response {
            Response::Frequency(result) => Self::for_frequency(params, result),
            Response::Time(result) => Self::for_time(result),
        }
    }
}

/// Write a frequency sweep as CSV.
///
/// Format:
/// ```csv
/// Frequency_Hz,Current_A
/// 100,0.0031
/// 101.25,0.0032
/// ```
pub fn write_frequency_csv<W: Write>(result: &FrequencySweepResult, writer: &mut W) -> Result<()> {
    writeln!(writer, "Frequency_Hz,Current_A")?;
    for (f, i) in result.points() {
        writeln!(writer, "{},{}", f, i)?;
    }
    Ok(())
}

/// Write a time sweep as CSV.
///
/// Format:
/// ```csv
/// Time_ms,Voltage_V
/// 0,0
/// 0.001002,0.0499
/// ```
pub fn write_time_csv<W: Write>(result: &TimeSweepResult, writer: &mut W) -> Result<()> {
    writeln!(writer, "Time_ms,{}", result.quantity.column_name())?;
    for (t, y) in result.points() {
        writeln!(writer, "{},{}", t, y)?;
    }
    Ok(())
}

/// Write either kind of response as CSV.
pub fn write_csv<W: Write>(response: &Response, writer: &mut W) -> Result<()> {
    match response {
        Response::Frequency(result) => write_frequency_csv(result, writer),
        Response::Time(result) => write_time_csv(result, writer),
    }
}

/// Write a short human-readable summary.
pub fn write_summary<W: Write>(
    params: &CircuitParameters,
    response: &Response,
    writer: &mut W,
) -> Result<()> {
    let layout = ChartLayout::for_response(params, response);
    writeln!(writer, "{}", layout.title)?;

    match response {
        Response::Frequency(result) => {
            writeln!(
                writer,
                "{} points, {:.0} Hz .. {:.0} Hz, peak current {:.6} A",
                result.len(),
                result.frequencies.first().copied().unwrap_or(0.0),
                result.frequencies.last().copied().unwrap_or(0.0),
                result.max_current()
            )?;
            if !layout.info.is_empty() {
                writeln!(writer, "{}", layout.info)?;
            }
            if let Some(f_0) = result.analytic_resonance {
                writeln!(writer, "Analytic resonance: {:.2} Hz", f_0)?;
            }
        }
        Response::Time(result) => {
            writeln!(
                writer,
                "{}: {} points over {:.4} ms, final {} {:.6}",
                result.label,
                result.len(),
                result.horizon_ms(),
                result.quantity.axis_label(),
                result.values.last().copied().unwrap_or(0.0)
            )?;
        }
    }
    Ok(())
}
