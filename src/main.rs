//! nfunc - Run the locale-aware date, number and regex functions from a shell

use clap::Parser;
use nfunc::{cli::Cli, output::get_formatter};
use nfunc_core::{Reply, Result, ZoneConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins unless --verbose asks for informational output
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("nfunc=info,nfunc_core=info,nfunc_locale=info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nfunc=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let zone_config = ZoneConfig::from_cli(cli.timezone.as_deref(), cli.utc)?;
    info!("Using local zone: {}", zone_config.display_name());
    let zones = zone_config.into_zones();

    let reply = Reply::from(cli.command.execute(&zones));
    let rendered = get_formatter(cli.json).format_reply(&reply);

    if reply.is_ok() {
        println!("{rendered}");
        Ok(())
    } else {
        eprintln!("{rendered}");
        std::process::exit(1);
    }
}
