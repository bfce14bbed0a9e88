use clap::Parser;
use explorer::ProviderKind;
use explorer::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "explorer", about = "Search and browse public web APIs from the terminal")]
struct Args {
    /// Data provider to browse (overrides config and EXPLORER_PROVIDER)
    #[arg(short, long, value_enum)]
    provider: Option<ProviderKind>,

    /// Query to run at startup instead of the provider's default
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to explorer.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("explorer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config, args.provider, args.query.as_deref());

    log::info!(
        "Explorer starting up with provider: {:?} ({})",
        resolved.provider,
        resolved.adapter.base_url
    );

    explorer::tui::run(resolved)
}
