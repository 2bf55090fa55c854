use std::future::Future;

use gameboxd_catalog::types::Game;
use reqwest::Url;
use tokio::time::Duration;

use crate::error::FetchError;
use crate::types::Feed;

pub const DEFAULT_BASE_URL: &str = "https://arshhhyyy.pythonanywhere.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the remote game catalog.
///
/// Each call is a single request with no retries.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Client for the public catalog.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one of the home-page feeds.
    pub async fn feed(&self, feed: Feed) -> Result<Vec<Game>, FetchError> {
        self.get_games(feed_url(&self.base_url, feed)?).await
    }

    /// Search the catalog by name. A blank query returns no results without
    /// making a request.
    pub async fn search(&self, query: &str) -> Result<Vec<Game>, FetchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.get_games(search_url(&self.base_url, query)?).await
    }

    /// Resolve a search query to a single game.
    ///
    /// With `id`, the result with that canonical id is chosen; otherwise the
    /// first result is.
    pub async fn find_game(&self, query: &str, id: Option<i64>) -> Result<Game, FetchError> {
        let games = self.search(query).await?;
        let found = match id {
            Some(id) => games.into_iter().find(|g| g.id == id),
            None => games.into_iter().next(),
        };
        found.ok_or_else(|| FetchError::NotFound {
            query: match id {
                Some(id) => format!("{query} (id {id})"),
                None => query.to_string(),
            },
        })
    }

    async fn get_games(&self, url: Url) -> Result<Vec<Game>, FetchError> {
        log::debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(FetchError::ServerError {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        parse_games(&text)
    }
}

/// Run a fetch, turning any failure into an empty result.
///
/// The failure is logged as a warning and otherwise dropped.
pub async fn fetch_or_empty<F>(what: &str, fetch: F) -> Vec<Game>
where
    F: Future<Output = Result<Vec<Game>, FetchError>>,
{
    match fetch.await {
        Ok(games) => games,
        Err(e) => {
            log::warn!("Could not load {}: {}", what, e);
            Vec::new()
        }
    }
}

/// URL for a feed under `base_url`.
pub fn feed_url(base_url: &str, feed: Feed) -> Result<Url, FetchError> {
    let url = format!("{}{}", base_url, feed.path());
    let parsed = match feed.filters() {
        Some(filters) => Url::parse_with_params(&url, &[("filters", filters)]),
        None => Url::parse(&url),
    };
    parsed.map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))
}

/// URL for a name search under `base_url`. The query is percent-encoded.
pub fn search_url(base_url: &str, query: &str) -> Result<Url, FetchError> {
    let url = format!("{}/games/getgames", base_url);
    Url::parse_with_params(&url, &[("search", query.trim())])
        .map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))
}

/// Decode a catalog response: a JSON array of games.
///
/// Elements that are not valid games are skipped with a warning instead of
/// failing the whole list.
pub fn parse_games(text: &str) -> Result<Vec<Game>, FetchError> {
    let items: Vec<serde_json::Value> = serde_json::from_str(text)?;
    let total = items.len();
    let games: Vec<Game> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Game>(item) {
            Ok(game) => Some(game),
            Err(e) => {
                log::warn!("Skipping malformed game in catalog response: {}", e);
                None
            }
        })
        .collect();
    if games.len() < total {
        log::debug!("Decoded {} of {} games", games.len(), total);
    }
    Ok(games)
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
