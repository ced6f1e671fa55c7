//! Network directory model.
//!
//! This file defines the typed two-level map handed over by the topology
//! generator: network key -> network description -> program-name to IP
//! assignments. The directory is built once per generation run and is
//! read-only during resolution; iteration order is insertion order and
//! is part of the resolver contract.

use color_eyre::Result;
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::net::IpAddr;
use std::path::Path;

/// One declared network: its subnet CIDR and the logical programs that
/// were allocated an address inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDescription {
    /// Subnet CIDR, e.g. `172.20.0.0/24`
    pub subnet: String,
    /// Logical program name -> allocated IP, in allocation order
    #[serde(default)]
    pub assignments: IndexMap<String, IpAddr>,
}

impl NetworkDescription {
    pub fn new(subnet: impl Into<String>) -> Self {
        NetworkDescription {
            subnet: subnet.into(),
            assignments: IndexMap::new(),
        }
    }

    /// Record an address allocation for a program
    pub fn assign(&mut self, prog: impl Into<String>, ip: IpAddr) {
        self.assignments.insert(prog.into(), ip);
    }
}

/// The externally-built directory of all declared networks, keyed by the
/// network key chosen by the generator (element name or subnet label).
pub type NetworkDirectory = IndexMap<String, NetworkDescription>;

/// Load a network directory from a file produced by the topology
/// generator. JSON or YAML, selected by file extension.
pub fn load_networks(path: &Path) -> Result<NetworkDirectory> {
    info!("Loading network directory from: {:?}", path);

    let file = File::open(path)?;
    let networks: NetworkDirectory = if path.extension().map_or(false, |ext| ext == "json") {
        serde_json::from_reader(file)?
    } else {
        serde_yaml::from_reader(file)?
    };

    info!("Loaded {} network(s)", networks.len());
    Ok(networks)
}
