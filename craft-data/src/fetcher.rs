use itertools::Itertools;
use tracing::{info, instrument, warn};
use xivapi::{QueryOutcome, RecipePage, XivApiClient};

use crate::recipe::{normalize_rows, NormalizedRecipe, RecipeBook};
use crate::{Config, Error};

/// Fetches and normalizes a single page. A rate limited page yields nothing.
#[instrument(skip(client))]
async fn fetch_page(
    client: &XivApiClient,
    page: u32,
) -> Result<Vec<(String, NormalizedRecipe)>, Error> {
    match client.query_rate_limited(&RecipePage { page }).await? {
        QueryOutcome::Data(data) => Ok(normalize_rows(data.results)),
        QueryOutcome::RateLimited => {
            warn!("Too many requests sent to XIVAPI! page {page} dropped");
            Ok(vec![])
        }
    }
}

/// Walks every recipe page, `config.batch_size` pages at a time. Each batch is
/// awaited in full before the next one is sent, keeping us under the rate limit.
pub async fn fetch_recipes(client: &XivApiClient, config: &Config) -> Result<RecipeBook, Error> {
    let page_total = client.recipe_page_total().await?;
    info!("{page_total} recipe pages to fetch");
    let batches: Vec<Vec<u32>> = (1..=page_total)
        .chunks(config.batch_size.max(1))
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect();
    let mut book = RecipeBook::default();
    for batch in batches {
        let pages =
            futures::future::join_all(batch.iter().map(|page| fetch_page(client, *page))).await;
        // merge only once the whole batch is back
        for page in pages {
            book.extend(page?);
        }
        info!(
            "fetched pages up to {}, {} recipes so far",
            batch.last().copied().unwrap_or_default(),
            book.recipe_count()
        );
    }
    Ok(book)
}
