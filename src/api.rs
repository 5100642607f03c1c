use std::fmt;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

/// Default TMDB API base URL.
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Base URL for poster images (w500 rendition).
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// The one user-facing message for any failed list fetch. Root causes go to
/// the debug log instead.
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch movies. Please check your API key and try again.";

/// Raised before any network call when no API token is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingToken;

impl fmt::Display for MissingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TMDB API token is not configured")
    }
}

impl std::error::Error for MissingToken {}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub popularity: f64,
}

impl Movie {
    /// Full poster URL, if the provider supplied a poster path.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }
}

#[derive(Debug, Deserialize)]
struct MovieListResponse {
    // An absent result list is an empty list, never an error
    #[serde(default)]
    results: Vec<Movie>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub release_dates: Option<ReleaseDates>,
    #[serde(default)]
    pub credits: Option<Credits>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReleaseDates {
    #[serde(default)]
    pub results: Vec<RegionalRelease>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionalRelease {
    /// ISO 3166-1 country code, e.g. "US"
    #[serde(rename = "iso_3166_1")]
    pub region: String,
    #[serde(default)]
    pub release_dates: Vec<ReleaseDateEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReleaseDateEntry {
    #[serde(default)]
    pub certification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Clone)]
pub struct TmdbClient {
    base_url: String,
    api_token: Option<String>,
    client: Client,
}

impl TmdbClient {
    pub fn new(api_token: Option<String>) -> Self {
        Self::with_base_url(TMDB_BASE_URL.to_string(), api_token)
    }

    pub fn with_base_url(base_url: String, api_token: Option<String>) -> Self {
        Self {
            base_url,
            api_token,
            client: Client::new(),
        }
    }

    /// Endpoint for a list fetch: search when a query is present, otherwise
    /// discover sorted by descending popularity.
    pub fn list_url(&self, query: &str) -> String {
        if query.is_empty() {
            self.discover_url()
        } else {
            self.search_url(query)
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/movie?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    pub fn discover_url(&self) -> String {
        format!("{}/discover/movie?sort_by=popularity.desc", self.base_url)
    }

    pub fn details_url(&self, movie_id: u64) -> String {
        format!(
            "{}/movie/{}?append_to_response=release_dates,credits",
            self.base_url, movie_id
        )
    }

    /// Build an authenticated GET. Every call site goes through here so the
    /// credential scheme (bearer token) is injected in exactly one place.
    /// Fails before any network I/O when no token is configured.
    fn authorized_get(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        let token = self
            .api_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(MissingToken)?;

        Ok(self
            .client
            .get(url)
            .header("accept", "application/json")
            .bearer_auth(token))
    }

    /// Fetch the movie list for `query` (empty means "show popular titles").
    pub async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>> {
        let url = self.list_url(query);
        let response = self
            .authorized_get(&url)?
            .send()
            .await
            .context("Failed to fetch movies")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Movie list request returned {}", status);
        }

        let data: MovieListResponse = response
            .json()
            .await
            .context("Failed to parse movie list")?;

        Ok(data.results)
    }

    /// Fetch extended detail (certification, tagline, credits) for one movie.
    pub async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        let url = self.details_url(movie_id);
        let response = self
            .authorized_get(&url)?
            .send()
            .await
            .context("Failed to fetch movie details")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Movie details request returned {}", status);
        }

        let details: MovieDetails = response
            .json()
            .await
            .context("Failed to parse movie details")?;

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TmdbClient {
        TmdbClient::new(Some("test-token".to_string()))
    }

    #[test]
    fn test_empty_query_targets_discover() {
        let url = client().list_url("");
        assert!(url.contains("/discover/movie"));
        assert!(url.contains("sort_by=popularity.desc"));
    }

    #[test]
    fn test_nonempty_query_targets_search() {
        let url = client().list_url("dune");
        assert!(url.contains("/search/movie"));
        assert!(url.ends_with("query=dune"));
    }

    #[test]
    fn test_search_query_is_url_encoded() {
        let url = client().search_url("dune part two");
        assert!(url.ends_with("query=dune%20part%20two"));
    }

    #[test]
    fn test_details_url_expands_subresources() {
        let url = client().details_url(693134);
        assert!(url.contains("/movie/693134"));
        assert!(url.contains("append_to_response=release_dates,credits"));
    }

    #[test]
    fn test_poster_url_from_path() {
        let movie = Movie {
            poster_path: Some("/abc123.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc123.jpg")
        );

        let bare = Movie::default();
        assert!(bare.poster_url().is_none());
    }

    #[test]
    fn test_absent_result_list_parses_as_empty() {
        let data: MovieListResponse = serde_json::from_str("{}").unwrap();
        assert!(data.results.is_empty());
    }
}
