use std::collections::{HashSet, VecDeque};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use flicktui::api::{Movie, MovieDetails, TmdbClient};
use flicktui::trending::{TrendingClient, TrendingMovie};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !crate::DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(crate::utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Priority level for API requests, ordered so that greater means sooner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,  // Analytics traffic (trending reads, search recording)
    High, // User-visible fetches (movie list, modal details)
}

/// Unique identifier for tracking in-flight requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Movies { seq: u64 },
    Details { movie_id: u64, seq: u64 },
    Trending,
    Record { term: String },
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch the movie list: search results for a query, or the popular
    /// titles feed when the query is empty
    FetchMovies { query: String, seq: u64 },

    /// Fetch extended details for the modal
    FetchMovieDetails { movie_id: u64, seq: u64 },

    /// Read the top trending records from the analytics sink
    FetchTrending { limit: usize },

    /// Record a successful search in the analytics sink. Fire-and-forget:
    /// there is no response variant for it, so no UI state can depend on
    /// whether it succeeded.
    RecordSearch { term: String, top_result: Movie },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchMovies { .. } => Priority::High,
            ApiRequest::FetchMovieDetails { .. } => Priority::High,
            ApiRequest::FetchTrending { .. } => Priority::Low,
            ApiRequest::RecordSearch { .. } => Priority::Low,
        }
    }

    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::FetchMovies { seq, .. } => RequestKey::Movies { seq: *seq },
            ApiRequest::FetchMovieDetails { movie_id, seq } => RequestKey::Details {
                movie_id: *movie_id,
                seq: *seq,
            },
            ApiRequest::FetchTrending { .. } => RequestKey::Trending,
            ApiRequest::RecordSearch { term, .. } => RequestKey::Record { term: term.clone() },
        }
    }
}

/// API response types. Every fetch carries back the sequence tag it was
/// issued with so handlers can discard stale results.
#[derive(Debug)]
pub enum ApiResponse {
    MoviesResult {
        query: String,
        seq: u64,
        movies: Result<Vec<Movie>, anyhow::Error>,
    },

    MovieDetailsResult {
        movie_id: u64,
        seq: u64,
        details: Result<MovieDetails, anyhow::Error>,
    },

    TrendingResult {
        movies: Result<Vec<TrendingMovie>, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    tmdb: TmdbClient,
    trending: Option<TrendingClient>,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        tmdb: TmdbClient,
        trending: Option<TrendingClient>,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            tmdb,
            trending,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 10, // Limit concurrent API calls
        }
    }

    /// Add a request to the queue
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();

        // Insert based on priority (high priority at front)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    async fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        let tmdb = self.tmdb.clone();
        let trending = self.trending.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();
        let completion_key = key.clone();

        tokio::spawn(async move {
            if let Some(response) = Self::execute_request(&tmdb, trending.as_ref(), request).await {
                let _ = response_tx.send(response);
            }

            // Notify service that this request is complete
            let _ = completion_tx.send(InternalMessage::Completed(completion_key));
        });
    }

    /// Execute an API request. Returns `None` for requests that produce no
    /// response at all (analytics writes, or sink reads with no sink
    /// configured).
    async fn execute_request(
        tmdb: &TmdbClient,
        trending: Option<&TrendingClient>,
        request: ApiRequest,
    ) -> Option<ApiResponse> {
        match request {
            ApiRequest::FetchMovies { query, seq } => {
                let movies = tmdb.fetch_movies(&query).await;

                Some(ApiResponse::MoviesResult { query, seq, movies })
            }

            ApiRequest::FetchMovieDetails { movie_id, seq } => {
                let details = tmdb.movie_details(movie_id).await;

                Some(ApiResponse::MovieDetailsResult {
                    movie_id,
                    seq,
                    details,
                })
            }

            ApiRequest::FetchTrending { limit } => {
                let Some(client) = trending else {
                    log_debug("DEBUG [API Service]: Trending sink not configured, skipping fetch");
                    return None;
                };
                let movies = client.get_trending(limit).await;

                Some(ApiResponse::TrendingResult { movies })
            }

            ApiRequest::RecordSearch { term, top_result } => {
                let Some(client) = trending else {
                    return None;
                };
                // Failures are logged and swallowed; search analytics must
                // never surface in the UI
                if let Err(e) = client.record_search(&term, &top_result).await {
                    log_debug(&format!(
                        "DEBUG [API Service]: Failed to record search '{}': {:#}",
                        term, e
                    ));
                }
                None
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    tmdb: TmdbClient,
    trending: Option<TrendingClient>,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(tmdb, trending, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next().await;
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
