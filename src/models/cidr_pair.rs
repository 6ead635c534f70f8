//! The [`CidrPair`] value type.
//!
//! Holds at most one IPv4 and one IPv6 network prefix, as used for
//! single-stack and dual-stack network settings.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use super::family::AddressFamily;
use crate::error::CidrPairError;
use crate::parse::parse_cidrs;

/// An IPv4 and/or an IPv6 CIDR.
///
/// Built by [`parse_cidrs`]; a parsed pair always holds at least one prefix.
/// [`CidrPair::default`] is the empty pair.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CidrPair {
    v4: Option<Ipv4Net>,
    v6: Option<Ipv6Net>,
}

impl CidrPair {
    pub(crate) fn from_parts(v4: Option<Ipv4Net>, v6: Option<Ipv6Net>) -> CidrPair {
        CidrPair { v4, v6 }
    }

    /// Parse a pair from `"<cidr>"` or `"<cidr>, <cidr>"`.
    ///
    /// Same as [`parse_cidrs`].
    pub fn parse(input: &str) -> Result<CidrPair, CidrPairError> {
        parse_cidrs(input)
    }

    /// The IPv4 CIDR, if one was given.
    pub fn cidr4(&self) -> Option<&Ipv4Net> {
        self.v4.as_ref()
    }

    /// The IPv6 CIDR, if one was given.
    pub fn cidr6(&self) -> Option<&Ipv6Net> {
        self.v6.as_ref()
    }

    /// True if both an IPv4 and an IPv6 CIDR are present.
    pub fn is_dual_stack(&self) -> bool {
        self.is4() && self.is6()
    }

    pub fn is4(&self) -> bool {
        self.v4.is_some()
    }

    pub fn is6(&self) -> bool {
        self.v6.is_some()
    }

    /// Families present in the pair, IPv4 first.
    pub fn families(&self) -> Vec<AddressFamily> {
        let mut families = Vec::with_capacity(2);
        if self.is4() {
            families.push(AddressFamily::Ipv4);
        }
        if self.is6() {
            families.push(AddressFamily::Ipv6);
        }
        families
    }

    /// Present prefixes as [`IpNet`], IPv4 first.
    pub fn prefixes(&self) -> Vec<IpNet> {
        self.v4
            .map(IpNet::V4)
            .into_iter()
            .chain(self.v6.map(IpNet::V6))
            .collect()
    }
}

impl std::fmt::Display for CidrPair {
    /// Dual-stack renders as `"<v4>,<v6>"`; the empty pair renders as `""`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.v4, self.v6) {
            (Some(v4), Some(v6)) => write!(f, "{},{}", v4, v6),
            (Some(v4), None) => write!(f, "{}", v4),
            (None, Some(v6)) => write!(f, "{}", v6),
            (None, None) => Ok(()),
        }
    }
}

impl FromStr for CidrPair {
    type Err = CidrPairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidrs(s)
    }
}

impl Serialize for CidrPair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrPair {
    fn deserialize<D>(deserializer: D) -> Result<CidrPair, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_cidrs(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(s: &str) -> Ipv4Net {
        s.parse().unwrap()
    }

    fn v6(s: &str) -> Ipv6Net {
        s.parse().unwrap()
    }

    #[test]
    fn test_accessors_v4_only() {
        let pair = CidrPair::from_parts(Some(v4("10.0.0.0/16")), None);
        assert!(pair.is4());
        assert!(!pair.is6());
        assert!(!pair.is_dual_stack());
        assert_eq!(pair.cidr4(), Some(&v4("10.0.0.0/16")));
        assert_eq!(pair.cidr6(), None);
        assert_eq!(pair.families(), vec![AddressFamily::Ipv4]);
    }

    #[test]
    fn test_accessors_dual_stack() {
        let pair = CidrPair::from_parts(Some(v4("10.0.0.0/16")), Some(v6("fd00::/8")));
        assert!(pair.is_dual_stack());
        assert_eq!(
            pair.families(),
            vec![AddressFamily::Ipv4, AddressFamily::Ipv6]
        );
        assert_eq!(
            pair.prefixes(),
            vec![
                "10.0.0.0/16".parse::<IpNet>().unwrap(),
                "fd00::/8".parse::<IpNet>().unwrap()
            ]
        );
    }

    #[test]
    fn test_display() {
        let dual = CidrPair::from_parts(Some(v4("10.0.0.0/16")), Some(v6("fd00::/8")));
        assert_eq!(dual.to_string(), "10.0.0.0/16,fd00::/8");

        let only4 = CidrPair::from_parts(Some(v4("192.168.0.0/24")), None);
        assert_eq!(only4.to_string(), "192.168.0.0/24");

        let only6 = CidrPair::from_parts(None, Some(v6("2001:db8::/32")));
        assert_eq!(only6.to_string(), "2001:db8::/32");
    }

    #[test]
    fn test_empty_pair() {
        let empty = CidrPair::default();
        assert!(!empty.is4());
        assert!(!empty.is6());
        assert!(!empty.is_dual_stack());
        assert!(empty.families().is_empty());
        assert!(empty.prefixes().is_empty());
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_from_str() {
        let pair: CidrPair = "fd00::/8, 10.0.0.0/16".parse().unwrap();
        assert_eq!(pair.cidr4(), Some(&v4("10.0.0.0/16")));
        assert_eq!(pair.cidr6(), Some(&v6("fd00::/8")));
        assert_eq!(CidrPair::parse("fd00::/8, 10.0.0.0/16").unwrap(), pair);
    }

    #[test]
    fn test_serde_string() {
        let pair = CidrPair::from_parts(Some(v4("10.0.0.0/16")), Some(v6("fd00::/8")));
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"10.0.0.0/16,fd00::/8\"");

        let back: CidrPair = serde_json::from_str("\"fd00::/8, 10.0.0.0/16\"").unwrap();
        assert_eq!(back, pair);

        let err = serde_json::from_str::<CidrPair>("\"10.0.0.0/16, 10.1.0.0/16\"").unwrap_err();
        assert!(err.to_string().contains("same type (IPv4)"));
    }
}
