//! Errors returned while parsing a [`CidrPair`](crate::models::CidrPair).

use crate::models::AddressFamily;

/// An error which can be returned when parsing a CIDR pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrPairError {
    /// More than two comma separated CIDRs were given.
    #[error("parse_cidrs({input:?}): more than 2 CIDRs given")]
    TooManyCidrs {
        /// The complete input string.
        input: String,
    },

    /// A segment is not a valid CIDR.
    #[error("parse_cidrs: invalid CIDR {segment:?}: {source}")]
    InvalidPrefix {
        /// The offending segment after splitting.
        segment: String,
        /// Error reported by the prefix parser.
        #[source]
        source: ipnet::AddrParseError,
    },

    /// Both CIDRs belong to the same address family.
    #[error("parse_cidrs({input:?}): both CIDRs have the same type ({family})")]
    DuplicateFamily {
        /// The complete input string.
        input: String,
        /// The family shared by both CIDRs.
        family: AddressFamily,
    },
}
