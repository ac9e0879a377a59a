use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stl_types::DeviceType;

#[derive(Parser)]
#[command(
    name = "stl",
    about = "Sensor Telemetry Ledger — IoT event ingestion and deterministic ledger CRUD",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the ledger gateway
    Serve(ServeArgs),
    /// Run the per-device UDP listeners and the gateway forwarder
    Listen(ListenArgs),
    /// Emit simulated telemetry for one device type
    Simulate(SimulateArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Seed every contract's sample records on startup
    #[arg(long)]
    pub seed: bool,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListenArgs {
    /// Gateway ingestion endpoint (overrides the config file)
    #[arg(long)]
    pub gateway: Option<String>,
    /// Listen for a single device type instead of all five
    #[arg(long)]
    pub device: Option<DeviceType>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Device type to simulate
    pub device: DeviceType,
    /// Listener host to send to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,
    /// Listener port (defaults to the device type's port)
    #[arg(long)]
    pub port: Option<u16>,
    /// Milliseconds between events
    #[arg(long, default_value = "2000")]
    pub interval_ms: u64,
    /// Stop after this many events (default: run forever)
    #[arg(long)]
    pub count: Option<u64>,
}
