//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Merit-order production planning for a power-generation fleet.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Service configuration file (TOML).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a production plan and print it.
    Plan(PlanArgs),

    /// Serve the REST API.
    #[cfg(feature = "api")]
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Dispatch request file (JSON).
    #[arg(long, conflicts_with = "preset")]
    pub request: Option<PathBuf>,

    /// Built-in request preset (canonical, calm, shortfall).
    #[arg(long)]
    pub preset: Option<String>,

    /// Export the plan to CSV.
    #[arg(long)]
    pub plan_out: Option<PathBuf>,
}

#[cfg(feature = "api")]
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address, overriding the configuration.
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overriding the configuration.
    #[arg(long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn supports_preset() {
        let cli = Cli::try_parse_from(["merit-plan", "plan", "--preset", "calm"])
            .expect("parse should succeed");
        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.preset.as_deref(), Some("calm"));
        assert!(args.request.is_none());
    }

    #[test]
    fn supports_request_and_export() {
        let cli = Cli::try_parse_from([
            "merit-plan",
            "--config",
            "merit-plan.toml",
            "plan",
            "--request",
            "payload.json",
            "--plan-out",
            "plan.csv",
        ])
        .expect("parse should succeed");
        assert_eq!(
            cli.config.as_deref().and_then(|p| p.to_str()),
            Some("merit-plan.toml")
        );
        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(
            args.request.as_deref().and_then(|p| p.to_str()),
            Some("payload.json")
        );
        assert_eq!(
            args.plan_out.as_deref().and_then(|p| p.to_str()),
            Some("plan.csv")
        );
    }

    #[test]
    fn request_and_preset_are_exclusive() {
        let result = Cli::try_parse_from([
            "merit-plan",
            "plan",
            "--request",
            "payload.json",
            "--preset",
            "canonical",
        ]);
        assert!(result.is_err());
    }

    #[cfg(feature = "api")]
    #[test]
    fn serve_accepts_port_override() {
        let cli = Cli::try_parse_from(["merit-plan", "serve", "--port", "9000"])
            .expect("parse should succeed");
        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(9000));
        assert!(args.host.is_none());
    }
}
