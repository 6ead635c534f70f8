//! Parsing of `"<cidr>"` / `"<cidr>, <cidr>"` strings into a [`CidrPair`].

use colored::Colorize;
use ipnet::IpNet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CidrPairError;
use crate::models::{CidrPair, Family};

/// Separator between the two CIDRs: a comma followed by any number of spaces.
pub const SEPARATOR_PATTERN: &str = ", *";

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(SEPARATOR_PATTERN).expect("Invalid Regex?");
}

fn split_cidrs(input: &str) -> Vec<&str> {
    SEPARATOR.split(input).collect()
}

fn parse_prefix(segment: &str) -> Result<IpNet, CidrPairError> {
    segment
        .parse::<IpNet>()
        .map_err(|source| CidrPairError::InvalidPrefix {
            segment: segment.to_string(),
            source,
        })
}

/// Parse one IPv4 and/or one IPv6 CIDR.
///
/// The CIDRs may come in either order; at most one per address family.
///
/// # Examples
/// ```
/// use cidr_pair::parse_cidrs;
/// let pair = parse_cidrs("fd00::/8, 10.0.0.0/16").unwrap();
/// assert!(pair.is_dual_stack());
/// assert_eq!(pair.to_string(), "10.0.0.0/16,fd00::/8");
/// ```
pub fn parse_cidrs(input: &str) -> Result<CidrPair, CidrPairError> {
    let cidrs = split_cidrs(input);
    log::trace!("parse_cidrs({:?}) split={:?}", input, cidrs);

    if cidrs.len() > 2 {
        return Err(CidrPairError::TooManyCidrs {
            input: input.to_string(),
        });
    }

    let mut pair = CidrPair::default();
    for segment in cidrs {
        let prefix = parse_prefix(segment)?;
        pair = match prefix {
            IpNet::V4(net) if pair.is4() => {
                return Err(CidrPairError::DuplicateFamily {
                    input: input.to_string(),
                    family: net.family(),
                })
            }
            IpNet::V6(net) if pair.is6() => {
                return Err(CidrPairError::DuplicateFamily {
                    input: input.to_string(),
                    family: net.family(),
                })
            }
            IpNet::V4(net) => CidrPair::from_parts(Some(net), pair.cidr6().copied()),
            IpNet::V6(net) => CidrPair::from_parts(pair.cidr4().copied(), Some(net)),
        };
    }

    log::debug!("parse_cidrs({:?}) -> {}", input, pair);
    Ok(pair)
}

/// Like [`parse_cidrs`] but panics on error.
///
/// Only for inputs known to be valid at compile time, e.g. built-in
/// defaults. Never call it with user supplied input.
pub fn must_parse_cidrs(input: &str) -> CidrPair {
    parse_cidrs(input).unwrap_or_else(|e| {
        log::error!("{failed} {e}", failed = "must_parse_cidrs failed:".on_red());
        panic!("{e}")
    })
}
