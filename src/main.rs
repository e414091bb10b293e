//! rlcsim - R/RC/RL/RLC circuit response calculator
//!
//! Computes one analysis per invocation and writes it to stdout.
//!
//! # Usage
//!
//! ```bash
//! rlcsim --topology rlc --mode frequency -r 80 -l 10 -c 150 -v 50 > sweep.csv
//! rlcsim --topology rc --mode time -r 1000 -c 100 -v 5 --disengaged --format summary
//! ```

use std::io::{self, Write};

use clap::Parser;
use rlc_response::{
    circuit::validate_parameters,
    error::{ResponseError, Result},
    output::{write_response, OutputFormat},
    simulate, ExcitationState, Mode, Topology, UiParameters,
};

/// Series R/RC/RL/RLC circuit response calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Circuit type: R, RC, RL or RLC
    #[arg(short, long, default_value_t = Topology::RC)]
    topology: Topology,

    /// Analysis: frequency or time
    #[arg(short, long, default_value_t = Mode::Frequency)]
    mode: Mode,

    /// Resistance in ohms
    #[arg(short = 'r', long = "resistance", default_value_t = 1000.0)]
    r: f64,

    /// Series (damping) resistance in ohms
    #[arg(long, default_value_t = 0.0)]
    rs: f64,

    /// Inductance in millihenries
    #[arg(short = 'l', long = "inductance", default_value_t = 0.0)]
    l: f64,

    /// Capacitance in nanofarads
    #[arg(short = 'c', long = "capacitance", default_value_t = 100.0)]
    c: f64,

    /// Source voltage in volts
    #[arg(short = 'v', long = "voltage", default_value_t = 5.0)]
    v: f64,

    /// Source removed (decay transient) instead of connected
    #[arg(long)]
    disengaged: bool,

    /// Output format: csv or summary
    #[arg(short, long, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let params = UiParameters {
        topology: args.topology,
        r: args.r,
        rs: args.rs,
        l_mh: args.l,
        c_nf: args.c,
        v: args.v,
    }
    .to_si();

    validate_parameters(&params, args.mode)?;

    let excitation = ExcitationState::from_engaged(!args.disengaged);
    tracing::info!(?params, mode = %args.mode, %excitation, "running analysis");

    let response = simulate(&params, args.mode, excitation)
        .ok_or_else(|| ResponseError::unsupported("Time", params.topology))?;

    let mut stdout = io::stdout().lock();
    write_response(args.format, &params, &response, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
