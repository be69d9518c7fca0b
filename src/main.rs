//! iptoc - IP geolocation lookup
//!
//! This is the composition root that wires together all the components.

use iptoc::adapters::inbound::Cli;
use iptoc::adapters::outbound::MaxMindGeoProvider;
use iptoc::application::GeoLookupService;
use iptoc::config::load_config;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> anyhow::Result<ExitCode> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging; stdout is reserved for lookup results
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "databases city={} country={} asn={} locale={}",
        cfg.city_db_path,
        cfg.country_db_path,
        cfg.asn_db_path,
        cfg.locale
    );

    // ===== COMPOSITION ROOT =====

    let provider = MaxMindGeoProvider::new(
        &cfg.city_db_path,
        &cfg.country_db_path,
        &cfg.asn_db_path,
    )
    .with_locale(cfg.locale.clone());

    let cli = Cli::new(GeoLookupService::new(Arc::new(provider)));

    // Undecodable bytes become U+FFFD and then fail address validation.
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let outcome = cli.run(&args, &mut std::io::stdout(), &mut std::io::stderr())?;

    Ok(outcome.into())
}
