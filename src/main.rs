use badgewall::core::ConfigProvider;
use badgewall::utils::error::ErrorSeverity;
use badgewall::utils::{logger, validation::Validate};
use badgewall::{BadgeEngine, CliConfig, JsonpClient, LocalStorage, TomlConfig};
use clap::Parser;

async fn fetch_and_render<C>(config: C) -> badgewall::Result<String>
where
    C: ConfigProvider + Clone + 'static,
{
    let storage = LocalStorage::new(config.output_path().to_string());
    let source = JsonpClient::new(config.clone());
    let engine = BadgeEngine::new(source, storage, config);
    engine.run().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting badgewall");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // A config file replaces the individual flags entirely.
    let result = match &cli.config {
        Some(path) => match TomlConfig::from_file(path).and_then(|c| {
            c.validate()?;
            Ok(c)
        }) {
            Ok(config) => fetch_and_render(config).await,
            Err(e) => Err(e),
        },
        None => match cli.validate() {
            Ok(()) => fetch_and_render(cli.clone()).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Badge page rendered successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Badge page rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Badge rendering failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
