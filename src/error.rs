//! Error types for port range operations.

use thiserror::Error;

/// Errors produced by port range construction, validation, and combination.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRangeError {
    /// A range's bounds are structurally invalid: a port is zero, or the
    /// minimum is above the maximum.
    #[error("Bad port range: {min}-{max}")]
    BadRange { min: u16, max: u16 },

    /// The protocol number is not TCP (6) or UDP (17).
    #[error("Bad protocol: {0}")]
    BadProto(u8),

    /// An intersection or merge was attempted on ranges that cannot be
    /// combined into one contiguous range.
    #[error("Disjoint port ranges")]
    DisjointRanges,
}

pub type Result<T> = std::result::Result<T, PortRangeError>;
