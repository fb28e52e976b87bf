use std::path::PathBuf;

use xivapi::XivApiClient;

use crate::Error;

/// Everything a run needs to know, built once in `main` and handed to each stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// `app/data/...` is created beneath this directory
    pub output_root: PathBuf,
    /// Max number of recipe pages in flight at once
    pub batch_size: usize,
    /// Each buff type gets its own search and its own file
    pub buff_types: Vec<String>,
    pub user_agent: String,
}

impl Config {
    /// XIVAPI rejects clients that go over 20 requests per second
    pub const RATE_LIMIT: usize = 20;

    pub fn new(api_url: impl ToString, output_root: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api_url.to_string(),
            output_root: output_root.into(),
            batch_size: Self::RATE_LIMIT,
            buff_types: vec!["Medicine".to_string(), "Meal".to_string()],
            user_agent: format!("craft-data/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn recipe_dir(&self) -> PathBuf {
        self.output_root.join("app").join("data").join("recipedb")
    }

    pub fn buff_dir(&self) -> PathBuf {
        self.output_root.join("app").join("data").join("buffs")
    }

    pub fn client(&self) -> Result<XivApiClient, Error> {
        Ok(XivApiClient::new(&self.api_url, &self.user_agent)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(XivApiClient::XIVAPI_BASE_URL, ".")
    }
}
