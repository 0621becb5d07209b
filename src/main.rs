//! merit-plan entry point: CLI wiring, configuration, and logging setup.

mod cli;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use merit_plan::config::ServiceConfig;
use merit_plan::dispatch::{PlanSummary, RequestPayload, plan_from_payload};
use merit_plan::io::export::export_csv;
use merit_plan::{logging, scenario};

use crate::cli::{Cli, Command, PlanArgs};

fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let config = match path {
        Some(path) => ServiceConfig::from_toml_file(path)?,
        None => ServiceConfig::default(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }
    Ok(config)
}

fn load_request(args: &PlanArgs) -> Result<RequestPayload> {
    // --request takes priority, then --preset, then the canonical request
    let payload = if let Some(ref path) = args.request {
        scenario::from_json_file(path)?
    } else if let Some(ref name) = args.preset {
        scenario::from_preset(name)?
    } else {
        scenario::canonical()
    };
    Ok(payload)
}

fn run_plan(config: &ServiceConfig, args: &PlanArgs) -> Result<()> {
    let payload = load_request(args)?;
    let plan = plan_from_payload(&payload, &config.dispatch).context("cannot compute plan")?;

    for entry in plan.entries() {
        println!("{}: {} MW", entry.name, entry.p);
    }
    println!("\n{}", PlanSummary::from_plan(&plan));

    if let Some(ref path) = args.plan_out {
        export_csv(&plan, path)
            .with_context(|| format!("failed to write CSV to \"{}\"", path.display()))?;
        info!(path = %path.display(), "plan written");
    }
    Ok(())
}

#[cfg(feature = "api")]
fn run_server(config: &ServiceConfig, args: &cli::ServeArgs) -> Result<()> {
    use std::net::{IpAddr, SocketAddr};
    use std::sync::Arc;

    use merit_plan::api::{AppState, serve};

    let host = args.host.as_deref().unwrap_or(&config.server.host);
    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("invalid bind address \"{host}\""))?;
    let addr = SocketAddr::new(ip, args.port.unwrap_or(config.server.port));

    let state = Arc::new(AppState {
        settings: config.dispatch.clone(),
    });
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(serve(state, addr))
        .with_context(|| format!("server on {addr} stopped"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.logging.filter)?;

    match cli.command {
        Command::Plan(ref args) => run_plan(&config, args),
        #[cfg(feature = "api")]
        Command::Serve(ref args) => run_server(&config, args),
    }
}
