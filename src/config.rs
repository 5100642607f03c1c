use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TMDB bearer token. May be absent: startup still succeeds, but every
    /// fetch fails fast with a configuration error instead of an opaque
    /// network error. `TMDB_API_TOKEN` in the environment is the fallback.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Viewer region for certification lookup (ISO 3166-1)
    #[serde(default = "default_region")]
    pub region: String,

    /// Certification shown when the detail response has none for the region
    #[serde(default = "default_certification")]
    pub default_certification: String,

    /// Delay before a changed search query triggers a fetch
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_true")]
    pub poster_preview_enabled: bool,

    /// Terminal graphics protocol: auto, iterm2, kitty, sixel, halfblocks
    #[serde(default = "default_poster_protocol")]
    pub poster_protocol: String,

    /// Search-analytics sink. Absent means trending is disabled entirely.
    #[serde(default)]
    pub trending: Option<TrendingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub collection_id: String,
    #[serde(default = "default_trending_limit")]
    pub limit: usize,
}

fn default_region() -> String {
    "US".to_string()
}

fn default_certification() -> String {
    "PG-13".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_trending_limit() -> usize {
    5
}

fn default_true() -> bool {
    true
}

fn default_poster_protocol() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            region: default_region(),
            default_certification: default_certification(),
            debounce_ms: default_debounce_ms(),
            poster_preview_enabled: default_true(),
            poster_protocol: default_poster_protocol(),
            trending: None,
        }
    }
}
