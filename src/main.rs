use anyhow::Result;
use clap::Parser;
use himachal_trip_planner::models::Config;
use himachal_trip_planner::web;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "himachal-trip-planner")]
#[command(about = "Serve the Himachal Pradesh trip planning form")]
struct CliArgs {
    /// Address to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides PORT).
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "himachal_trip_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting himachal-trip-planner");

    let args = CliArgs::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let missing = config.missing_secrets();
    if missing.is_empty() {
        info!("Environment variables loaded successfully");
    } else {
        warn!("Environment variables not found: {}", missing.join(", "));
    }

    if let Err(e) = web::run(&config).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
