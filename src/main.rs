use anyhow::{Context, Result};
use folio::config::Config;
use folio::generator::DescriptionService;
use folio::logger::{self, LogBuffer};
use folio::ui;

const USAGE: &str = "\
Folio - architectural portfolio gallery for the terminal

USAGE:
    folio [OPTIONS]

OPTIONS:
    --generate-config [PATH]    Write the default configuration file and exit
    -h, --help                  Print this help and exit

The description generator reads its API key from the environment variable
named by generator.api_key_env (default: API_KEY).";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => path.into(),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Some(other) => {
            eprintln!("❌ Unknown argument: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
        None => {}
    }

    let config = Config::load().context("Failed to load configuration")?;

    let log_buffer = LogBuffer::new();
    logger::init(&config.logging, log_buffer.clone()).context("Failed to initialize logging")?;
    log::info!("Folio starting");

    let generator = DescriptionService::from_config(&config.generator);

    ui::run_app(&config, generator, log_buffer).await?;

    log::info!("Folio exiting");
    Ok(())
}
