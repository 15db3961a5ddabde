use clap::Parser;
use portfolio_dashboard::app::server;
use portfolio_dashboard::utils::{logger, validation::Validate};
use portfolio_dashboard::{AppConfig, AppState, CounterBackend, PortfolioRecord, VisitorCounter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    if config.is_development() {
        logger::init_dev_logger(config.verbose);
    } else {
        logger::init_prod_logger();
    }

    tracing::info!("Starting Portfolio Dashboard...");

    if let Err(e) = config.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Decided once; the counter never re-probes the store.
    let backend = CounterBackend::connect(&config).await;
    if let CounterBackend::Unavailable { reason } = &backend {
        tracing::info!("Running in local development mode - visitor counter mocked ({})", reason);
    }

    let state = AppState::new(
        PortfolioRecord::builtin(),
        VisitorCounter::new(backend),
        &config,
    )?;

    tracing::info!("Port: {}", config.port);
    tracing::info!("Debug: {}", config.is_development());
    tracing::info!("AWS Region: {}", config.region);
    tracing::info!("AWS Ready: {}", state.aws_available());
    tracing::info!("Asset bucket: {}", config.bucket);

    server::serve(&config, state).await?;

    Ok(())
}
