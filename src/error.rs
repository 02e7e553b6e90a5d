//! Error types for VLSM calculation and export.

use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VlsmError {
    #[error("Malformed IPv4 address '{0}', expected dotted-quad form A.B.C.D")]
    MalformedAddress(String),

    #[error("Invalid host count '{value}': {reason}")]
    InvalidHostCount { value: String, reason: String },

    #[error("Invalid prefix /{0}, must be between /1 and /32")]
    InvalidPrefix(u8),

    #[error("{hosts} hosts do not fit in any IPv4 subnet")]
    PrefixUnderflow { hosts: i64 },

    #[error("Address space exhausted: cannot advance past {address}")]
    AddressSpaceExhausted { address: Ipv4Addr },

    #[error("Octet index {0} out of range, must be 0 to 3")]
    InvalidOctetIndex(usize),

    #[error("Invalid network '{network}': {reason}")]
    InvalidNetwork { network: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VlsmError {
    pub(crate) fn host_count(value: impl ToString, reason: impl Into<String>) -> Self {
        VlsmError::InvalidHostCount {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn network(network: impl Into<String>, reason: impl Into<String>) -> Self {
        VlsmError::InvalidNetwork {
            network: network.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VlsmError>;
