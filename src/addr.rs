//! Host:port codec.
//!
//! This file parses and renders `host:port` strings for config emission,
//! handling IPv6 bracket syntax. Every component that stores or transmits
//! an address goes through these functions so the bracketing rule is
//! applied in exactly one place.

use std::net::IpAddr;

/// Errors that can occur when encoding or decoding a host:port string
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AddrError {
    #[error("missing port in addr: {0}")]
    MissingPort(String),

    #[error("invalid IP address: {0}")]
    InvalidAddress(String),
}

/// Split `addr` into its host and port. The trailing `:port` is removed
/// first, then any enclosing IPv6 brackets are stripped from the host.
/// An address without an explicit port is a configuration error upstream
/// and is never defaulted.
pub fn split_host_port(addr: &str) -> Result<(String, u16), AddrError> {
    let (host, port) = addr
        .rsplit_once(':')
        .and_then(|(host, port)| port.parse::<u16>().ok().map(|port| (host, port)))
        .ok_or_else(|| AddrError::MissingPort(addr.to_string()))?;
    // A ':' left in the host means the input was a bare IPv6 literal
    // without a port (its last hextet is not a port), not a host:port
    // pair. Only a bracketed host may carry colons.
    if host.contains(':') && !(host.starts_with('[') && host.ends_with(']')) {
        return Err(AddrError::MissingPort(addr.to_string()));
    }
    let host = host.trim_matches(|c| c == '[' || c == ']');
    Ok((host.to_string(), port))
}

/// Join a host and port into a single string. The host is classified by
/// address-family parsing, never by the presence of `:` in the literal;
/// only IPv6 hosts are bracketed. The host text is preserved exactly as
/// given.
pub fn join_host_port(host: &str, port: u16) -> Result<String, AddrError> {
    let ip: IpAddr = host
        .parse()
        .map_err(|_| AddrError::InvalidAddress(host.to_string()))?;
    Ok(match ip {
        IpAddr::V4(_) => format!("{}:{}", host, port),
        IpAddr::V6(_) => format!("[{}]:{}", host, port),
    })
}

/// Render an already-typed IP with a port, same bracketing rule as
/// [`join_host_port`].
pub fn format_host_port(ip: IpAddr, port: u16) -> String {
    match ip {
        IpAddr::V4(v4) => format!("{}:{}", v4, port),
        IpAddr::V6(v6) => format!("[{}]:{}", v6, port),
    }
}

/// Replace the port of an existing `host:port` string, preserving the
/// host exactly. Most callers use this instead of the split/join pair.
pub fn replace_port(addr: &str, port: u16) -> Result<String, AddrError> {
    let (host, _) = split_host_port(addr)?;
    join_host_port(&host, port)
}
