//! Topology identity.
//!
//! This file defines the `TopoId` value naming one participant in a
//! multi-domain topology: an isolation-domain number plus an entity
//! (autonomous-system) number, with the canonical string projections
//! used as map keys, service-name suffixes, and directory names.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Largest entity number representable (48 bits).
const MAX_AS: u64 = (1 << 48) - 1;

/// Errors that can occur when parsing a topology identity
#[derive(Debug, thiserror::Error)]
pub enum IdParseError {
    #[error("missing '-' separator in identity: {0}")]
    MissingSeparator(String),

    #[error("invalid isolation-domain number: {0}")]
    InvalidIsd(String),

    #[error("invalid entity number: {0}")]
    InvalidAs(String),
}

/// Identity of one topology participant: isolation domain plus entity.
///
/// Equality and hashing are structural over the two numbers. Ordering is
/// lexicographic over the canonical string form, so `1-10` sorts before
/// `1-2`; generated artifact ordering depends on this and it must not be
/// changed to numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopoId {
    isd: u16,
    asn: u64,
}

impl TopoId {
    /// Create an identity from raw numbers. The entity number must fit
    /// in 48 bits.
    pub fn new(isd: u16, asn: u64) -> Result<Self, IdParseError> {
        if asn > MAX_AS {
            return Err(IdParseError::InvalidAs(format!(
                "entity number {} exceeds 48 bits",
                asn
            )));
        }
        Ok(TopoId { isd, asn })
    }

    /// Isolation-domain number in decimal
    pub fn isd_str(&self) -> String {
        self.isd.to_string()
    }

    /// Entity number in its canonical encoding: decimal when it fits in
    /// 32 bits, otherwise three colon-separated hex groups of 16 bits
    /// (e.g. `ff00:0:110`).
    pub fn as_str(&self) -> String {
        if self.asn <= u32::MAX as u64 {
            return self.asn.to_string();
        }
        format!(
            "{:x}:{:x}:{:x}",
            (self.asn >> 32) & 0xffff,
            (self.asn >> 16) & 0xffff,
            self.asn & 0xffff
        )
    }

    /// Filesystem-safe entity encoding: colons replaced with underscores
    pub fn as_file_fmt(&self) -> String {
        self.as_str().replace(':', "_")
    }

    /// Isolation-domain label, e.g. `ISD1`
    pub fn isd_label(&self) -> String {
        format!("ISD{}", self.isd_str())
    }

    /// Entity label, e.g. `ASff00:0:110`
    pub fn as_label(&self) -> String {
        format!("AS{}", self.as_str())
    }

    /// Filesystem-safe entity label, e.g. `ASff00_0_110`
    pub fn as_file_label(&self) -> String {
        format!("AS{}", self.as_file_fmt())
    }

    /// Canonical compact key used to name services and directories,
    /// e.g. `1-ff00_0_110`
    pub fn file_fmt(&self) -> String {
        format!("{}-{}", self.isd_str(), self.as_file_fmt())
    }

    /// Per-entity output directory under `root`. Performs no filesystem
    /// access.
    pub fn base_dir(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(self.as_file_label())
    }
}

impl fmt::Display for TopoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.isd_str(), self.as_str())
    }
}

impl FromStr for TopoId {
    type Err = IdParseError;

    /// Parses the canonical `isd-entity` form, e.g. `1-ff00:0:110` or
    /// `2-64512`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (isd_part, as_part) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingSeparator(s.to_string()))?;
        let isd = isd_part
            .parse::<u16>()
            .map_err(|_| IdParseError::InvalidIsd(isd_part.to_string()))?;
        let asn = parse_as(as_part)?;
        Ok(TopoId { isd, asn })
    }
}

/// Parse an entity number: plain decimal (32-bit range) or three
/// colon-separated hex groups of at most 16 bits each.
fn parse_as(s: &str) -> Result<u64, IdParseError> {
    if !s.contains(':') {
        return s
            .parse::<u32>()
            .map(u64::from)
            .map_err(|_| IdParseError::InvalidAs(s.to_string()));
    }
    let groups: Vec<&str> = s.split(':').collect();
    if groups.len() != 3 {
        return Err(IdParseError::InvalidAs(s.to_string()));
    }
    let mut asn: u64 = 0;
    for group in groups {
        if group.is_empty() || group.len() > 4 {
            return Err(IdParseError::InvalidAs(s.to_string()));
        }
        let part = u64::from_str_radix(group, 16)
            .map_err(|_| IdParseError::InvalidAs(s.to_string()))?;
        asn = (asn << 16) | part;
    }
    Ok(asn)
}

impl Ord for TopoId {
    // Lexicographic over the string form, not numeric. Downstream file
    // and service ordering relies on this exact order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl PartialOrd for TopoId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TopoId {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_hex_entity() {
        let id = id("1-ff00:0:110");
        assert_eq!(id.isd_str(), "1");
        assert_eq!(id.as_str(), "ff00:0:110");
        assert_eq!(id.to_string(), "1-ff00:0:110");
    }

    #[test]
    fn test_parse_decimal_entity() {
        let id = id("2-64512");
        assert_eq!(id.as_str(), "64512");
        assert_eq!(id.to_string(), "2-64512");
    }

    #[test]
    fn test_parse_display_roundtrip() {
        for s in ["1-ff00:0:110", "42-ffaa:1:2", "1-0", "65535-4294967295"] {
            assert_eq!(id(s).to_string(), s);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("1".parse::<TopoId>().is_err());
        assert!("x-ff00:0:110".parse::<TopoId>().is_err());
        assert!("1-ff00:0".parse::<TopoId>().is_err());
        assert!("1-ff00:0:110:0".parse::<TopoId>().is_err());
        assert!("1-ff000:0:110".parse::<TopoId>().is_err());
        assert!("1-".parse::<TopoId>().is_err());
        // Decimal form is restricted to the 32-bit range
        assert!("1-4294967296".parse::<TopoId>().is_err());
    }

    #[test]
    fn test_file_fmt_and_labels() {
        let id = id("1-ff00:0:110");
        assert_eq!(id.file_fmt(), "1-ff00_0_110");
        assert_eq!(id.isd_label(), "ISD1");
        assert_eq!(id.as_label(), "ASff00:0:110");
        assert_eq!(id.as_file_label(), "ASff00_0_110");
    }

    #[test]
    fn test_base_dir() {
        let id = id("1-ff00:0:110");
        assert_eq!(id.base_dir("/out"), PathBuf::from("/out/ASff00_0_110"));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        // "1-10" sorts before "1-2": string order, not numeric
        let a = id("1-10");
        let b = id("1-2");
        assert!(a < b);

        let mut ids = vec![id("1-2"), id("1-10"), id("1-1")];
        ids.sort();
        let strs: Vec<String> = ids.iter().map(|i| i.to_string()).collect();
        assert_eq!(strs, vec!["1-1", "1-10", "1-2"]);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(id("1-ff00:0:110"), id("1-ff00:0:110"));
        assert_ne!(id("1-ff00:0:110"), id("2-ff00:0:110"));
        assert_ne!(id("1-ff00:0:110"), id("1-ff00:0:111"));
    }

    #[test]
    fn test_new_rejects_oversized_entity() {
        assert!(TopoId::new(1, 1 << 48).is_err());
        assert!(TopoId::new(1, (1 << 48) - 1).is_ok());
    }
}
