//! Core types describing what is being analysed.

use std::fmt;
use std::str::FromStr;

use crate::error::ResponseError;

/// Series one-port circuit type.
///
/// The topology decides which reactive elements take part in the response.
/// Component values of elements absent from the topology are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// Resistors only
    R,
    /// Resistor and capacitor
    #[default]
    RC,
    /// Resistor and inductor
    RL,
    /// Resistor, inductor and capacitor
    RLC,
}

impl Topology {
    /// All topologies, in display order.
    pub const ALL: [Topology; 4] = [Topology::R, Topology::RC, Topology::RL, Topology::RLC];

    /// Check if the topology contains an inductor.
    pub fn has_inductor(&self) -> bool {
        matches!(self, Topology::RL | Topology::RLC)
    }

    /// Check if the topology contains a capacitor.
    pub fn has_capacitor(&self) -> bool {
        matches!(self, Topology::RC | Topology::RLC)
    }

    /// Short name as used in titles ("R", "RC", "RL", "RLC").
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::R => "R",
            Topology::RC => "RC",
            Topology::RL => "RL",
            Topology::RLC => "RLC",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = ResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "R" => Ok(Topology::R),
            "RC" => Ok(Topology::RC),
            "RL" => Ok(Topology::RL),
            "RLC" => Ok(Topology::RLC),
            _ => Err(ResponseError::UnknownTopology { name: s.to_string() }),
        }
    }
}

/// Whether the driving DC source is connected.
///
/// Owned by the caller and passed into every time-domain call; the engine
/// keeps no excitation state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExcitationState {
    /// Source connected: charging / current growth transient
    #[default]
    Engaged,
    /// Source removed: discharge / current decay transient
    Disengaged,
}

impl ExcitationState {
    /// Build from a "source connected" flag.
    pub fn from_engaged(engaged: bool) -> Self {
        if engaged {
            Self::Engaged
        } else {
            Self::Disengaged
        }
    }

    /// Check if the source is connected.
    pub fn is_engaged(&self) -> bool {
        matches!(self, Self::Engaged)
    }

    /// The opposite state, as produced by flipping the source switch.
    pub fn toggled(self) -> Self {
        match self {
            Self::Engaged => Self::Disengaged,
            Self::Disengaged => Self::Engaged,
        }
    }
}

impl fmt::Display for ExcitationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engaged => f.write_str("engaged"),
            Self::Disengaged => f.write_str("disengaged"),
        }
    }
}

impl FromStr for ExcitationState {
    type Err = ResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "engaged" | "connected" | "on" => Ok(Self::Engaged),
            "disengaged" | "disconnected" | "off" => Ok(Self::Disengaged),
            _ => Err(ResponseError::UnknownExcitation { name: s.to_string() }),
        }
    }
}

/// Which of the two analyses to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Sinusoidal steady-state sweep
    #[default]
    Frequency,
    /// Step transient
    Time,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Frequency => f.write_str("frequency"),
            Mode::Time => f.write_str("time"),
        }
    }
}

impl FromStr for Mode {
    type Err = ResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frequency" | "freq" | "ac" => Ok(Mode::Frequency),
            "time" | "transient" | "tran" => Ok(Mode::Time),
            _ => Err(ResponseError::UnknownMode { name: s.to_string() }),
        }
    }
}
