use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use stl_contract::ContractRegistry;
use stl_gateway::{GatewayConfig, GatewayServer};
use stl_ingest::{spawn_forwarder, DeviceListener, HttpForwarder, IngestConfig};
use stl_simulator::{DeviceSimulator, SimulatorConfig};
use stl_state::InMemoryWorldState;
use stl_types::DeviceProfile;

use crate::cli::{Cli, Command, ListenArgs, ServeArgs, SimulateArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Listen(args) => cmd_listen(args).await,
        Command::Simulate(args) => cmd_simulate(args).await,
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => GatewayConfig::load(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.seed {
        config.seed_on_start = true;
    }

    let registry = Arc::new(ContractRegistry::new(Arc::new(InMemoryWorldState::new())));
    let server = GatewayServer::new(config, registry);
    server.serve().await?;
    Ok(())
}

async fn cmd_listen(args: ListenArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => IngestConfig::load(path)?,
        None => IngestConfig::default(),
    };
    if let Some(gateway) = args.gateway {
        config.gateway_url = gateway;
    }

    let forward = Arc::new(HttpForwarder::from_config(&config));
    let handle = spawn_forwarder(forward, config.queue_capacity);

    let mut tasks = Vec::new();
    for listener_config in config.listener_configs() {
        if let Some(only) = args.device {
            if listener_config.device_type != only {
                continue;
            }
        }
        let listener = DeviceListener::bind(
            listener_config.device_type,
            listener_config.bind_addr,
            handle.clone(),
        )
        .await?;
        tasks.push(tokio::spawn(listener.run()));
    }
    info!(listeners = tasks.len(), gateway = %config.gateway_url, "ingestion running");

    for task in tasks {
        task.await??;
    }
    Ok(())
}

async fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let port = args
        .port
        .unwrap_or_else(|| DeviceProfile::of(args.device).default_port);
    let target = SocketAddr::new(args.host, port);

    let mut config = SimulatorConfig::new(args.device, target);
    config.interval = Duration::from_millis(args.interval_ms);
    config.count = args.count;

    let simulator = DeviceSimulator::start(config).await?;
    simulator.run().await?;
    Ok(())
}
