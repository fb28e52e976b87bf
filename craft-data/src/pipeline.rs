use std::path::PathBuf;

use tracing::info;
use xivapi::XivApiClient;

use crate::buff::extract_buffs;
use crate::fetcher::fetch_recipes;
use crate::persist::{save_buffs, save_recipes};
use crate::{Config, Error};

/// Fetches every recipe page and writes one file per class job
pub async fn run_recipes(client: &XivApiClient, config: &Config) -> Result<Vec<PathBuf>, Error> {
    let book = fetch_recipes(client, config).await?;
    info!(
        "{} recipes across {} class jobs",
        book.recipe_count(),
        book.class_jobs().count()
    );
    save_recipes(&config.recipe_dir(), book).await
}

/// One search and one file per configured buff type
pub async fn run_buffs(client: &XivApiClient, config: &Config) -> Result<Vec<PathBuf>, Error> {
    let mut written = vec![];
    for buff_type in &config.buff_types {
        let buffs = extract_buffs(client, buff_type).await?;
        written.push(save_buffs(&config.buff_dir(), buff_type, buffs).await?);
    }
    Ok(written)
}

/// Runs the recipe pipeline then the buff pipeline. The buff search is held
/// back until the recipe batches finish so it can't push a batch over the
/// rate limit.
pub async fn run(config: &Config) -> Result<(), Error> {
    let client = config.client()?;
    let recipe_files = run_recipes(&client, config).await?;
    let buff_files = run_buffs(&client, config).await?;
    info!(
        "done: {} recipe files, {} buff files",
        recipe_files.len(),
        buff_files.len()
    );
    Ok(())
}
