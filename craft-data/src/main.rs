use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use craft_data::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xivapi::XivApiClient;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Directory the `app/data` tree is written under
    #[clap(short, long, value_parser, default_value = ".")]
    root: PathBuf,
    #[clap(long, value_parser, default_value = XivApiClient::XIVAPI_BASE_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();
    let config = Config::new(args.api_url, args.root);
    info!("writing crafting data under {}", config.output_root.display());
    craft_data::run(&config).await?;
    Ok(())
}
