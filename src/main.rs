use anyhow::Context;
use clap::Parser;
use small_university::domain::ports::FloatGradeParser;
use small_university::utils::{logger, validation::Validate};
use small_university::{
    CliConfig, IoConsole, Menu, Settings, TomlConfig, University, UniversityFacade,
};

fn load_settings(config: &CliConfig) -> anyhow::Result<Settings> {
    let Some(path) = &config.config else {
        return Ok(Settings::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let toml_config = TomlConfig::from_file(path)
        .with_context(|| format!("failed to load config file '{}'", path.display()))?;
    toml_config
        .validate()
        .context("configuration validation failed")?;
    Ok(toml_config.settings())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting small-university");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    let registry =
        University::construct().context("failed to construct the university registry")?;
    let facade = UniversityFacade::with_parts(registry, FloatGradeParser, settings);
    let menu = Menu::with_default_observers(facade);

    let mut console = IoConsole::stdio();
    menu.run(&mut console).context("menu session failed")?;

    tracing::info!("Goodbye");
    Ok(())
}
