//! IP address family classification.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Address family of a network prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => f.write_str("IPv4"),
            AddressFamily::Ipv6 => f.write_str("IPv6"),
        }
    }
}

/// Implemented by addresses and prefixes that belong to exactly one family.
pub trait Family {
    /// Return the address family of `self`.
    fn family(&self) -> AddressFamily;
}

impl Family for IpAddr {
    fn family(&self) -> AddressFamily {
        match self {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

impl Family for IpNet {
    fn family(&self) -> AddressFamily {
        self.addr().family()
    }
}

impl Family for Ipv4Net {
    fn family(&self) -> AddressFamily {
        AddressFamily::Ipv4
    }
}

impl Family for Ipv6Net {
    fn family(&self) -> AddressFamily {
        AddressFamily::Ipv6
    }
}
