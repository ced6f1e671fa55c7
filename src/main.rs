use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use topogen::id::TopoId;
use topogen::net::load_networks;
use topogen::services::{
    colibri_addrs, prom_addr_dispatcher, remote_nets, sciond_addr, sciond_svc_name,
};

/// Resolve service addresses in a generated network topology
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network directory YAML produced by the topology generator
    #[arg(short, long)]
    networks: PathBuf,

    /// Identity to resolve for, e.g. 1-ff00:0:110
    #[arg(short, long)]
    ia: String,

    /// Resolve against container networking instead of the local host
    #[arg(long)]
    docker: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the control-plane resolver daemon address
    Sciond,
    /// Print all colibri replica addresses
    Colibri,
    /// Print the metrics-scrape address of a dispatcher process
    Dispatcher {
        /// Metrics port of the dispatcher
        #[arg(long)]
        port: u16,
        /// Process name the dispatcher instance is derived from
        #[arg(long)]
        name: String,
    },
    /// Print the remote gateway subnets, comma separated
    RemoteNets,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let topo_id: TopoId = args
        .ia
        .parse()
        .wrap_err_with(|| format!("Failed to parse identity '{}'", args.ia))?;
    info!("Resolving for {} ({})", topo_id, topo_id.file_fmt());

    let networks = load_networks(&args.networks)
        .wrap_err_with(|| format!("Failed to load networks from {:?}", args.networks))?;

    match args.command {
        Command::Sciond => match sciond_addr(&topo_id, &networks) {
            Some(ip) => println!("{}", ip),
            None => warn!("No address allocated for {}", sciond_svc_name(&topo_id)),
        },
        Command::Colibri => {
            let addrs = colibri_addrs(&topo_id, &networks);
            if addrs.is_empty() {
                warn!("No colibri replicas allocated for {}", topo_id);
            }
            for addr in addrs {
                println!("{}", addr);
            }
        }
        Command::Dispatcher { port, name } => {
            match prom_addr_dispatcher(args.docker, &topo_id, &networks, port, &name) {
                Some(addr) => println!("{}", addr),
                None => warn!("No dispatcher instance found for process '{}'", name),
            }
        }
        Command::RemoteNets => {
            println!("{}", remote_nets(&networks, &topo_id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from([
            "topogen",
            "--networks",
            "networks.yaml",
            "--ia",
            "1-ff00:0:110",
            "sciond",
        ]);

        assert_eq!(args.networks, PathBuf::from("networks.yaml"));
        assert_eq!(args.ia, "1-ff00:0:110");
        assert!(!args.docker);
        assert!(matches!(args.command, Command::Sciond));
    }

    #[test]
    fn test_dispatcher_args() {
        let args = Args::parse_from([
            "topogen",
            "--networks",
            "networks.yaml",
            "--ia",
            "1-ff00:0:110",
            "--docker",
            "dispatcher",
            "--port",
            "30441",
            "--name",
            "disp_sig1",
        ]);

        assert!(args.docker);
        match args.command {
            Command::Dispatcher { port, name } => {
                assert_eq!(port, 30441);
                assert_eq!(name, "disp_sig1");
            }
            _ => panic!("expected dispatcher subcommand"),
        }
    }
}
