use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::buff::{sort_buffs, NormalizedBuff};
use crate::recipe::RecipeBook;
use crate::Error;

/// Writes `value` as two space indented json. Going through `serde_json::Value`
/// sorts every object's keys, which keeps the output diffable between runs.
/// This relies on serde_json's `preserve_order` feature staying disabled for
/// the whole dependency graph, otherwise `Value` keeps insertion order.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let value = serde_json::to_value(value)?;
    let bytes = serde_json::to_vec_pretty(&value)?;
    tokio::fs::write(path, bytes).await?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Writes `<dir>/<class job>.json` for every class job in the book
pub async fn save_recipes(dir: &Path, book: RecipeBook) -> Result<Vec<PathBuf>, Error> {
    tokio::fs::create_dir_all(dir).await?;
    let mut written = vec![];
    for (class_job, recipes) in book.into_sorted() {
        let path = dir.join(format!("{class_job}.json"));
        write_json(&path, &recipes).await?;
        written.push(path);
    }
    Ok(written)
}

/// Writes `<dir>/<buff type>.json`, sorted by id with NQ before HQ
pub async fn save_buffs(
    dir: &Path,
    buff_type: &str,
    mut buffs: Vec<NormalizedBuff>,
) -> Result<PathBuf, Error> {
    tokio::fs::create_dir_all(dir).await?;
    sort_buffs(&mut buffs);
    let path = dir.join(format!("{buff_type}.json"));
    write_json(&path, &buffs).await?;
    Ok(path)
}
