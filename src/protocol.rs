use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PortRangeError;

/// 0 is technically a valid protocol number, but this crate only models
/// TCP and UDP; 0 is the explicit "invalid" sentinel.
pub const PROTO_INVALID: u8 = 0;
/// IANA protocol number for TCP.
pub const PROTO_TCP: u8 = 6;
/// IANA protocol number for UDP.
pub const PROTO_UDP: u8 = 17;

/// The transport protocol a port range belongs to.
///
/// Discriminants are the IANA protocol numbers. The derived `Ord` follows
/// declaration order, which matches the numeric order (TCP 6 before UDP 17)
/// that [`PortRange::entirely_less_than`](crate::PortRange::entirely_less_than)
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Protocol {
    Tcp = 6,
    Udp = 17,
}

impl Protocol {
    /// The raw IANA protocol number.
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Protocol {
    type Error = PortRangeError;

    fn try_from(proto: u8) -> Result<Self, Self::Error> {
        match proto {
            PROTO_TCP => Ok(Protocol::Tcp),
            PROTO_UDP => Ok(Protocol::Udp),
            other => Err(PortRangeError::BadProto(other)),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "tcp"),
            Protocol::Udp => write!(f, "udp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_recognized_numbers() {
        assert_eq!(Protocol::try_from(PROTO_TCP), Ok(Protocol::Tcp));
        assert_eq!(Protocol::try_from(PROTO_UDP), Ok(Protocol::Udp));
    }

    #[test]
    fn test_try_from_rejects_other_numbers() {
        assert_eq!(
            Protocol::try_from(PROTO_INVALID),
            Err(PortRangeError::BadProto(0))
        );
        assert_eq!(Protocol::try_from(99), Err(PortRangeError::BadProto(99)));
    }

    #[test]
    fn test_ordering_matches_protocol_numbers() {
        assert!(Protocol::Tcp < Protocol::Udp);
        assert_eq!(Protocol::Tcp.number(), 6);
        assert_eq!(Protocol::Udp.number(), 17);
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Protocol::Tcp.to_string(), "tcp");
        assert_eq!(Protocol::Udp.to_string(), "udp");
    }
}
