use clap::Parser;
use convoy_build::{RealExecutor, docker, pipeline};
use convoy_core::ConvoyConfig;

#[derive(Parser)]
#[command(name = "convoy", about = "Bundle a locally built Consul with Envoy into one container image")]
#[command(version)]
struct Cli {
    /// Absolute path of the consul source checkout; takes precedence over
    /// the CONVOY_CONSUL_LOCATION env var
    #[arg(long, short = 'c')]
    consul_location: Option<String>,

    /// Envoy version to bundle (e.g. 1.26); defaults to the Dockerfile's own
    /// version when omitted
    #[arg(long, short = 'e')]
    envoy_version: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Fails before any side effect when no location is supplied.
    let config = ConvoyConfig::resolve(cli.consul_location, cli.envoy_version)?;

    let context_dir = pipeline::run(&RealExecutor, &config).await?;
    tracing::debug!(context = %context_dir.display(), "build context retained");

    println!(
        "successfully built convoy image, it is available as \"{}\"",
        docker::IMAGE_TAG
    );

    Ok(())
}
