//! Error types for the circuit response engine.
//!
//! The response engine itself never fails: degenerate inputs are absorbed by
//! epsilon guards. [`ResponseError`] covers the boundary around it, namely
//! parsing names typed by a user, checking parameters before they reach the
//! engine, and writing results out.

use thiserror::Error;

/// Result type alias using [`ResponseError`].
pub type Result<T> = std::result::Result<T, ResponseError>;

/// Unified error type for all boundary operations.
#[derive(Error, Debug)]
pub enum ResponseError {
    // ============ Name Parsing Errors ============
    /// Unknown circuit topology name
    #[error("Unknown topology '{name}' (expected R, RC, RL or RLC)")]
    UnknownTopology { name: String },

    /// Unknown analysis mode name
    #[error("Unknown mode '{name}' (expected frequency or time)")]
    UnknownMode { name: String },

    /// Unknown excitation state name
    #[error("Unknown excitation state '{name}' (expected engaged or disengaged)")]
    UnknownExcitation { name: String },

    /// Unknown output format name
    #[error("Unknown output format '{name}' (expected csv or summary)")]
    UnknownFormat { name: String },

    // ============ Parameter Errors ============
    /// A parameter is NaN or infinite
    #[error("Parameter '{param}' must be a finite number (got {value})")]
    NonFiniteParameter { param: &'static str, value: f64 },

    /// A parameter violates a precondition of the requested analysis
    #[error("Invalid parameter '{param}' for {analysis}: {message}")]
    InvalidParameter {
        param: &'static str,
        analysis: &'static str,
        message: String,
    },

    /// The requested analysis is not defined for the topology
    #[error("{analysis} response is not available for topology {topology}")]
    UnsupportedAnalysis {
        analysis: &'static str,
        topology: String,
    },

    // ============ I/O Errors ============
    /// Error writing results
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        param: &'static str,
        analysis: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            param,
            analysis,
            message: message.into(),
        }
    }

    /// Create an unsupported analysis error
    pub fn unsupported(analysis: &'static str, topology: impl ToString) -> Self {
        Self::UnsupportedAnalysis {
            analysis,
            topology: topology.to_string(),
        }
    }
}
