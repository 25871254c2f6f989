//! Interval algebra for TCP and UDP port ranges.
//!
//! This library models a contiguous range of port numbers tagged with a
//! transport protocol and provides the comparisons needed to test overlap
//! and adjacency, intersect and merge ranges in place, and order ranges
//! across protocols. It is a building block for tools that keep port usage
//! as a minimal set of non-overlapping ranges per protocol, such as
//! firewall rule or port allocation managers.

pub mod error;
pub mod protocol;
pub mod range;

pub use error::{PortRangeError, Result};
pub use protocol::{Protocol, PROTO_INVALID, PROTO_TCP, PROTO_UDP};
pub use range::PortRange;
