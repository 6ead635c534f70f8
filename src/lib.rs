//! Parse one IPv4 and/or one IPv6 CIDR from a single string.
//!
//! ```
//! use cidr_pair::{must_parse_cidrs, parse_cidrs};
//!
//! let pods = parse_cidrs("10.0.0.0/16, fd00::/8").unwrap();
//! assert!(pods.is_dual_stack());
//!
//! // Built-in defaults only.
//! let services = must_parse_cidrs("100.64.0.0/13");
//! assert!(services.is4());
//! ```

pub mod error;
pub mod models;
mod parse;

pub use error::CidrPairError;
pub use models::{AddressFamily, CidrPair, Family};
pub use parse::{must_parse_cidrs, parse_cidrs, SEPARATOR_PATTERN};
