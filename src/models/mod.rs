//! Domain models for CIDR pairs.
//!
//! - [`CidrPair`] - one IPv4 and/or one IPv6 network prefix
//! - [`AddressFamily`] and [`Family`] - address family classification

mod cidr_pair;
mod family;

// Re-export public types
pub use cidr_pair::CidrPair;
pub use family::{AddressFamily, Family};
