//! # Topogen - address resolution core for multi-domain topology generation
//!
//! This library resolves the identities, addresses, and ports of elements
//! in a multi-domain network topology (routers, control services,
//! dispatchers, gateways) and renders them into `host:port` strings and
//! per-element naming handles consumed by deployment tooling.
//!
//! ## Overview
//!
//! A topology generator allocates IPs for every logical program across a
//! set of declared subnets and hands the result over as a network
//! directory. This crate owns the other half of the contract: given an
//! entity identity and that directory, it locates the concrete transport
//! address of each service, following the naming conventions the rest of
//! the deployment toolchain matches on literally.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `id`: the `TopoId` identity value and its canonical string forms
//! - `addr`: the `host:port` codec with IPv6 bracket handling
//! - `net`: the typed network directory handed over by the generator
//! - `services`: resolvers mapping logical service names to addresses
//! - `config`: typed generation arguments shared by config emitters
//!
//! All resolution is synchronous and side-effect free: the directory is
//! built once, externally, and is read-only here. A lookup that finds
//! nothing returns an absent value rather than an error, so partial
//! topology generation stays possible.
//!
//! ## Example Usage
//!
//! ```rust
//! use topogen::id::TopoId;
//! use topogen::net::{NetworkDescription, NetworkDirectory};
//! use topogen::services::sciond_addr;
//!
//! let topo_id: TopoId = "1-ff00:0:110".parse()?;
//!
//! let mut net = NetworkDescription::new("172.20.0.0/24");
//! net.assign("sd1-ff00_0_110", "172.20.0.2".parse()?);
//! let mut networks = NetworkDirectory::new();
//! networks.insert("net0".to_string(), net);
//!
//! assert_eq!(sciond_addr(&topo_id, &networks), Some("172.20.0.2".parse()?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Codec and identity parsing failures are typed `thiserror` enums and
//! propagate unmodified to the caller. Resolver misses are `None`/empty,
//! never errors; callers decide whether absence is fatal in their
//! context. Orchestration-level functions return
//! `Result<T, color_eyre::eyre::Error>` like the rest of the toolchain.

pub mod addr;
pub mod config;
pub mod id;
pub mod net;
pub mod services;
