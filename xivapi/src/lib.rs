pub mod models;
pub mod search;

use crate::search::{SearchRequest, SearchResults};
use log::debug;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Columns requested for every recipe page. Anything not listed here is left
/// out of the response by XIVAPI.
pub const RECIPE_COLUMNS: &[&str] = &[
    "ID",
    "Name_en",
    "Name_de",
    "Name_fr",
    "Name_ja",
    "ClassJob.NameEnglish",
    "DurabilityFactor",
    "QualityFactor",
    "DifficultyFactor",
    "RequiredControl",
    "RequiredCraftsmanship",
    "RecipeLevelTable",
];

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct Pagination {
    pub page: u32,
    pub page_next: Option<u32>,
    pub page_prev: Option<u32>,
    pub page_total: u32,
    pub results: u32,
    pub results_per_page: u32,
    pub results_total: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct PaginatedResults<T> {
    pub pagination: Pagination,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

pub trait XivDataQuery {
    type Data: DeserializeOwned;

    fn get_path(&self) -> String;
}

/// The bare `/Recipe` listing. Only the pagination envelope is of interest.
pub struct RecipeIndex;

impl XivDataQuery for RecipeIndex {
    type Data = PaginatedResults<Value>;

    fn get_path(&self) -> String {
        "/Recipe".to_string()
    }
}

/// One page of recipes. Rows are left as raw json so that a single malformed
/// row doesn't fail the whole page.
pub struct RecipePage {
    pub page: u32,
}

impl XivDataQuery for RecipePage {
    type Data = PaginatedResults<Value>;

    fn get_path(&self) -> String {
        format!(
            "/Recipe?page={}&columns={}",
            self.page,
            RECIPE_COLUMNS.join(",")
        )
    }
}

/// XIVAPI answers with a 429 once more than 20 requests per second arrive
/// from one client.
#[derive(Debug)]
pub enum QueryOutcome<T> {
    Data(T),
    RateLimited,
}

#[derive(Clone, Debug)]
pub struct XivApiClient {
    client: Client,
    base_url: String,
}

impl XivApiClient {
    pub const XIVAPI_BASE_URL: &'static str = "https://xivapi.com";

    pub fn new(base_url: impl ToString, user_agent: impl ToString) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .build()?;
        let base_url = base_url.to_string().trim_end_matches('/').to_string();
        // validate early rather than on the first request
        Url::parse(&base_url)?;
        Ok(XivApiClient { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Performs the query, treating every non-success status as an error
    pub async fn query<T: XivDataQuery>(&self, query: &T) -> Result<T::Data, Error> {
        let url = self.url(&query.get_path())?;
        debug!("performing query {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Same as [`XivApiClient::query`] except a 429 is reported as
    /// [`QueryOutcome::RateLimited`] instead of an error.
    pub async fn query_rate_limited<T: XivDataQuery>(
        &self,
        query: &T,
    ) -> Result<QueryOutcome<T::Data>, Error> {
        let url = self.url(&query.get_path())?;
        debug!("performing query {}", url);
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Ok(QueryOutcome::RateLimited);
        }
        let response = response.error_for_status()?;
        Ok(QueryOutcome::Data(response.json().await?))
    }

    pub async fn search<T: DeserializeOwned>(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResults<T>, Error> {
        let url = self.url("/search")?;
        debug!("searching {} {}", url, serde_json::to_string(request)?);
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn recipe_page_total(&self) -> Result<u32, Error> {
        Ok(self.query(&RecipeIndex).await?.pagination.page_total)
    }
}

#[cfg(test)]
mod test {
    use crate::search::{BoolQuery, Match, SearchRequest};
    use crate::{QueryOutcome, RecipePage, XivApiClient, XivDataQuery};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn envelope(page: u32, results: Value) -> Value {
        json!({
            "Pagination": {
                "Page": page,
                "PageNext": null,
                "PagePrev": null,
                "PageTotal": 7,
                "Results": 0,
                "ResultsPerPage": 100,
                "ResultsTotal": 0
            },
            "Results": results
        })
    }

    async fn recipe(Query(params): Query<HashMap<String, String>>) -> Response {
        match params.get("page").map(String::as_str) {
            None => Json(envelope(1, json!([]))).into_response(),
            Some("4") => StatusCode::TOO_MANY_REQUESTS.into_response(),
            Some("5") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            Some(page) => {
                let columns = params.get("columns").cloned().unwrap_or_default();
                Json(envelope(page.parse().unwrap(), json!([{ "Columns": columns }])))
                    .into_response()
            }
        }
    }

    async fn search(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({ "Results": [{ "ID": body["body"]["size"] }] }))
    }

    async fn serve() -> String {
        let app = Router::new()
            .route("/Recipe", get(recipe))
            .route("/search", post(search));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/")
    }

    #[test]
    fn recipe_page_path() {
        let path = RecipePage { page: 12 }.get_path();
        assert!(path.starts_with("/Recipe?page=12&columns=ID,Name_en,"));
        assert!(path.ends_with(",RequiredCraftsmanship,RecipeLevelTable"));
    }

    #[test]
    fn bad_base_url() {
        assert!(XivApiClient::new("not a url", "test").is_err());
    }

    #[tokio::test]
    async fn page_total() {
        let client = XivApiClient::new(serve().await, "test").unwrap();
        assert_eq!(client.recipe_page_total().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn rate_limited_page() {
        let client = XivApiClient::new(serve().await, "test").unwrap();
        let QueryOutcome::Data(page) = client
            .query_rate_limited(&RecipePage { page: 3 })
            .await
            .unwrap()
        else {
            panic!("page 3 should not be rate limited");
        };
        assert_eq!(page.pagination.page, 3);
        assert_eq!(
            page.results[0]["Columns"],
            crate::RECIPE_COLUMNS.join(",").as_str()
        );
        let limited = client
            .query_rate_limited(&RecipePage { page: 4 })
            .await
            .unwrap();
        assert!(matches!(limited, QueryOutcome::RateLimited));
        assert!(client
            .query_rate_limited(&RecipePage { page: 5 })
            .await
            .is_err());
        // the strict variant doesn't special case a 429
        assert!(client.query(&RecipePage { page: 4 }).await.is_err());
    }

    #[tokio::test]
    async fn search_posts_body() {
        let client = XivApiClient::new(serve().await, "test").unwrap();
        let request = SearchRequest::new(
            "item",
            &["ID"],
            BoolQuery {
                should: vec![Match::new("Bonuses.CP.Relative", "true")],
                must_not: vec![],
            },
            42,
        );
        let results = client.search::<Value>(&request).await.unwrap();
        assert_eq!(results.results, vec![json!({ "ID": 42 })]);
    }
}
