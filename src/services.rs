//! Service resolvers.
//!
//! This file maps logical service references to concrete transport
//! addresses by scanning the network directory, following the fixed
//! naming conventions of the deployment toolchain. Resolvers are pure
//! functions; a lookup that finds nothing returns an absent value so
//! partial topology generation stays possible.

use crate::addr::format_host_port;
use crate::id::TopoId;
use crate::net::NetworkDirectory;
use std::net::{IpAddr, Ipv4Addr};

/// Directory shared by all entities for end-host configuration
pub const COMMON_DIR: &str = "endhost";

/// Topology sections that declare addressable services
pub const SERVICE_NAMES: [&str; 4] = [
    "control_service",
    "discovery_service",
    "border_routers",
    "colibri_service",
];

pub const BR_CONFIG_NAME: &str = "br.toml";
pub const BS_CONFIG_NAME: &str = "bs.toml";
pub const CS_CONFIG_NAME: &str = "cs.toml";
pub const PS_CONFIG_NAME: &str = "ps.toml";
pub const CO_CONFIG_NAME: &str = "co.toml";
pub const SD_CONFIG_NAME: &str = "sd.toml";
pub const DISP_CONFIG_NAME: &str = "disp.toml";
pub const SIG_CONFIG_NAME: &str = "sig.toml";

/// API port of the per-entity control-plane resolver daemon
pub const SD_API_PORT: u16 = 30255;

/// Program name of the control-plane resolver daemon for an entity,
/// e.g. `sd1-ff00_0_110`
pub fn sciond_name(topo_id: &TopoId) -> String {
    format!("sd{}", topo_id.file_fmt())
}

/// Registered service name of the resolver daemon, e.g.
/// `scion_sd1-ff00_0_110`
pub fn sciond_svc_name(topo_id: &TopoId) -> String {
    format!("scion_{}", sciond_name(topo_id))
}

/// IP of the control-plane resolver daemon for `topo_id`, or `None` if
/// no network has allocated it an address yet. At most one match is
/// expected; if several networks declare the same program name the
/// first in directory order wins (accepted ambiguity, not a tie-break).
pub fn sciond_addr(topo_id: &TopoId, networks: &NetworkDirectory) -> Option<IpAddr> {
    let name = sciond_name(topo_id);
    for net_desc in networks.values() {
        for (prog, ip) in &net_desc.assignments {
            if *prog == name {
                return Some(*ip);
            }
        }
    }
    None
}

/// IPs of all colibri-service replicas for `topo_id`, in directory
/// order. Replica program names carry an index suffix, so matching is
/// done on the first two dash-separated tokens only. Multiple matches
/// are expected and valid.
pub fn colibri_addrs(topo_id: &TopoId, networks: &NetworkDirectory) -> Vec<IpAddr> {
    let name = format!("co{}", topo_id.file_fmt());
    let mut addrs = Vec::new();
    for net_desc in networks.values() {
        for (prog, ip) in &net_desc.assignments {
            let stem: Vec<&str> = prog.split('-').take(2).collect();
            if stem.join("-") == name {
                addrs.push(*ip);
            }
        }
    }
    addrs
}

/// Metrics-scrape address for a dispatcher process.
///
/// Outside container-networking mode dispatcher metrics are locally
/// reachable, so the loopback address with `port` is returned without
/// consulting the directory. In container mode the dispatcher instance
/// name is derived from `name` (per border-router instance, per
/// gateway, or the default dispatcher) and looked up across all
/// networks; `None` means no network declares that instance yet.
pub fn prom_addr_dispatcher(
    docker: bool,
    topo_id: &TopoId,
    networks: &NetworkDirectory,
    port: u16,
    name: &str,
) -> Option<String> {
    if !docker {
        return Some(format_host_port(IpAddr::V4(Ipv4Addr::LOCALHOST), port));
    }
    let target_name = if name.starts_with("disp_br") {
        let suffix = name.get(name.len().saturating_sub(2)..).unwrap_or("");
        format!("br{}{}", topo_id.file_fmt(), suffix)
    } else if name.starts_with("disp_sig") {
        format!("sig{}", topo_id.file_fmt())
    } else {
        format!("disp{}", topo_id.file_fmt())
    };
    for net_desc in networks.values() {
        if let Some(ip) = net_desc.assignments.get(&target_name) {
            return Some(format_host_port(*ip, port));
        }
    }
    None
}

/// Comma-joined subnets of all remote entities whose gateway the one in
/// `topo_id` is connected to. A directory entry counts as remote when
/// its key names a gateway element and does not belong to `topo_id`
/// itself. Directory order, no deduplication.
pub fn remote_nets(networks: &NetworkDirectory, topo_id: &TopoId) -> String {
    let own = topo_id.file_fmt();
    let mut rem_nets = Vec::new();
    for (key, net_desc) in networks {
        if key.contains("sig") && !key.contains(&own) {
            rem_nets.push(net_desc.subnet.clone());
        }
    }
    rem_nets.join(",")
}
