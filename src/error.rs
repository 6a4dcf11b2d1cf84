// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClkError {
    /// A confirmation poll did not complete in its bound.
    /// Hardware is left as written.
    Timeout { clk: String, what: &'static str, offset: u32 },
    /// The requested rate cannot be programmed from the node's table.
    InvalidRate { clk: String, rate: u64 },
    /// A register region or descriptor is missing or inconsistent.
    Config(String),
    /// The node's op set does not contain this operation.
    NotSupported { clk: String, op: &'static str },
    NoSuchClock(String),
    InvalidParent { clk: String, parent: String },
    /// Rate change refused while the clock is running.
    Busy(String),
}

impl core::fmt::Display for ClkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClkError::Timeout { clk, what, offset } =>
                write!(f, "{} timed out waiting for {} reg=0x{:04x}", clk, what, offset),
            ClkError::InvalidRate { clk, rate } =>
                write!(f, "{} cannot be set to rate={}", clk, rate),
            ClkError::Config(msg) => write!(f, "configuration error: {}", msg),
            ClkError::NotSupported { clk, op } =>
                write!(f, "{} does not support {}", clk, op),
            ClkError::NoSuchClock(name) => write!(f, "no such clock: {}", name),
            ClkError::InvalidParent { clk, parent } =>
                write!(f, "{} is not a possible parent of {}", parent, clk),
            ClkError::Busy(clk) => write!(f, "{} must be gated before changing its rate", clk),
        }
    }
}

impl Error for ClkError {}

pub type Result<T> = std::result::Result<T, ClkError>;
