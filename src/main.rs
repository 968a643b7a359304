use cadastro::config::cli::{CliConfig, Command};
use cadastro::utils::{logger, validation::Validate};
use cadastro::{tax_id, AppConfig, InvoiceAnalyzer, OpenAiCompletion};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting cadastro CLI");

    match cli.command {
        Command::Validate { identifier } => match tax_id::normalize_and_validate(&identifier) {
            Ok(id) => {
                println!("✅ {} válido: {}", id.kind(), id.digits());
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Command::Analyze { text, file } => {
            let config = AppConfig::load(cli.config.as_deref())?;
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)?,
                (None, None) => {
                    eprintln!("❌ Provide the invoice text or --file");
                    std::process::exit(1);
                }
            };

            let completion = OpenAiCompletion::from_config(&config.completion)?;
            let analyzer = InvoiceAnalyzer::new(completion);

            let analysis = analyzer.analyze(&text).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    Ok(())
}
