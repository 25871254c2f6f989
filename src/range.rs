use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PortRangeError, Result};
use crate::protocol::Protocol;

/// An inclusive range of TCP or UDP port numbers.
///
/// A valid range has both bounds in `1..=65535` with `min_port <= max_port`.
/// [`PortRange::new`] enforces this; callers building a range from literal
/// fields are responsible for it themselves and can re-check with
/// [`PortRange::validate`]. The combining operations assume their inputs are
/// valid and do not re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRange {
    pub min_port: u16,
    pub max_port: u16,
    pub protocol: Protocol,
}

impl PortRange {
    /// Creates a validated port range.
    ///
    /// Bounds are checked before the protocol, so a range that is wrong on
    /// both counts reports `BadRange` rather than `BadProto`.
    ///
    /// # Returns
    /// `BadRange` if either port is 0 or `min_port > max_port`; `BadProto`
    /// if `proto` is not TCP (6) or UDP (17).
    pub fn new(min_port: u16, max_port: u16, proto: u8) -> Result<Self> {
        if min_port == 0 || max_port == 0 || min_port > max_port {
            return Err(PortRangeError::BadRange {
                min: min_port,
                max: max_port,
            });
        }
        let protocol = Protocol::try_from(proto)?;
        Ok(PortRange {
            min_port,
            max_port,
            protocol,
        })
    }

    /// Re-runs the constructor's bounds checks against this value.
    ///
    /// Useful after mutating the fields directly. The protocol cannot be
    /// invalid once the value exists, so only `BadRange` can be reported.
    pub fn validate(&self) -> Result<()> {
        if self.min_port == 0 || self.max_port == 0 || self.min_port > self.max_port {
            return Err(PortRangeError::BadRange {
                min: self.min_port,
                max: self.max_port,
            });
        }
        Ok(())
    }

    /// Indicates whether two ranges are the same protocol and share at least
    /// one port. TCP port 80 and UDP port 80 are disjoint entities. This
    /// property is symmetric.
    pub fn overlaps_with(&self, other: &PortRange) -> bool {
        if self.protocol != other.protocol {
            return false;
        }
        self.min_port <= other.max_port && other.min_port <= self.max_port
    }

    /// Indicates whether two ranges are the same protocol, do not overlap,
    /// and are exactly one port apart. This property is symmetric.
    pub fn is_adjacent_to(&self, other: &PortRange) -> bool {
        if self.protocol != other.protocol || self.overlaps_with(other) {
            return false;
        }
        // Widen before the +1: a range ending at 65535 has no successor and
        // must not wrap into a false adjacency.
        u32::from(self.max_port) + 1 == u32::from(other.min_port)
            || u32::from(other.max_port) + 1 == u32::from(self.min_port)
    }

    /// Shrinks this range in place to its intersection with `other`.
    ///
    /// Returns `DisjointRanges` and leaves this range untouched if the two
    /// do not overlap (which includes differing protocols).
    pub fn intersect_with(&mut self, other: &PortRange) -> Result<()> {
        if !self.overlaps_with(other) {
            return Err(PortRangeError::DisjointRanges);
        }
        self.min_port = self.min_port.max(other.min_port);
        self.max_port = self.max_port.min(other.max_port);
        Ok(())
    }

    /// Grows this range in place to the union of the two ranges.
    ///
    /// The union is only contiguous when the ranges overlap or are adjacent;
    /// otherwise returns `DisjointRanges` and leaves this range untouched.
    /// Unlike intersection, adjacency is mergeable.
    pub fn merge_with(&mut self, other: &PortRange) -> Result<()> {
        if !self.overlaps_with(other) && !self.is_adjacent_to(other) {
            return Err(PortRangeError::DisjointRanges);
        }
        self.min_port = self.min_port.min(other.min_port);
        self.max_port = self.max_port.max(other.max_port);
        Ok(())
    }

    /// Indicates that every port of this range sorts strictly before every
    /// port of `other`.
    ///
    /// Protocols order numerically first: all TCP (6) ports are below any
    /// UDP (17) port, regardless of the numeric bounds. Within a protocol,
    /// overlapping ranges are never ordered; otherwise this range is below
    /// when its maximum is under the other's minimum. Not symmetric.
    pub fn entirely_less_than(&self, other: &PortRange) -> bool {
        if self.protocol < other.protocol {
            return true;
        }
        if self.overlaps_with(other) {
            return false;
        }
        self.max_port < other.min_port
    }

    /// Number of ports covered by the range.
    pub fn size(&self) -> u16 {
        self.max_port - self.min_port + 1
    }

    /// Whether `port` falls inside the range.
    pub fn contains(&self, port: u16) -> bool {
        self.min_port <= port && port <= self.max_port
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.protocol, self.min_port, self.max_port)
    }
}
