use anyhow::Result;
use clap::Parser;
use tracing::info;

use client::{build_client_app, load_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(&args.config)?;
    if let Some(scheme) = args.scheme {
        cfg = cfg.with_scheme(scheme);
    }
    info!(scheme = ?cfg.scheme, fixed_hz = cfg.fixed_hz, "starting flight client");

    let mut app = build_client_app(args, cfg);
    app.run();
    Ok(())
}
