use anyhow::Context;
use clap::Parser;
use ski_concierge::core::ConfigProvider;
use ski_concierge::utils::{logger, validation::Validate};
use ski_concierge::{
    CliConfig, ConciergeRepl, Coordinator, InMemorySessionStore, PlaceholderTextGenerator,
    StaticFareSource, TomlConfig,
};

fn load_settings(cli: &CliConfig) -> ski_concierge::Result<Box<dyn ConfigProvider>> {
    cli.validate()?;

    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(path)?;
            config.apply_overrides(cli.user_id.as_deref(), cli.tips);
            config.validate()?;
            Ok(Box::new(config))
        }
        None => Ok(Box::new(cli.clone())),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ski-concierge");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let fares = match settings.catalog() {
        Some(catalog) => StaticFareSource::with_catalog(catalog.to_vec()),
        None => StaticFareSource::new(),
    };

    // The session store lives for the whole process and is owned by the coordinator.
    let coordinator = Coordinator::new(InMemorySessionStore::new(), fares, PlaceholderTextGenerator)
        .with_tips(settings.tips_enabled());
    let mut repl = ConciergeRepl::new(coordinator, settings.user_id());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl.run(stdin.lock(), stdout.lock())
        .context("console session failed")?;

    Ok(())
}
