//! API Response Handler
//!
//! Applies responses from the background service to the model. Every list
//! and detail response carries the sequence tag it was issued with; the
//! model rejects tags that are no longer current, so a slow response for an
//! old query can never overwrite a newer one.

use flicktui::api::FETCH_ERROR_MESSAGE;
use flicktui::logic::errors::describe_error;
use flicktui::trending::search_record;

use crate::services::api::{ApiRequest, ApiResponse};
use crate::App;

/// Handle an API response from the background service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::MoviesResult { query, seq, movies } => match movies {
            Ok(movies) => {
                // Capture what the analytics decision needs before the list
                // is moved into the model
                let result_count = movies.len();
                let top_result = movies.first().cloned();

                let applied = app.model.catalog.apply_list_result(seq, Ok(movies));
                if !applied {
                    crate::log_debug(&format!(
                        "DEBUG [MoviesResult]: Discarding stale result for query='{}' seq={}",
                        query, seq
                    ));
                }

                // Record the search only once its result was actually shown.
                // The worker has no response variant for this, so nothing
                // downstream can wait on it.
                if let Some((term, top_result)) =
                    search_record(&query, applied, result_count, top_result)
                {
                    let _ = app
                        .api_tx
                        .send(ApiRequest::RecordSearch { term, top_result });
                }
            }
            Err(error) => {
                crate::log_debug(&format!(
                    "DEBUG [MoviesResult]: Fetch failed for query='{}' seq={} {}",
                    query,
                    seq,
                    describe_error(&error)
                ));

                // One generic user-facing message regardless of root cause
                if !app
                    .model
                    .catalog
                    .apply_list_result(seq, Err(FETCH_ERROR_MESSAGE.to_string()))
                {
                    crate::log_debug(&format!(
                        "DEBUG [MoviesResult]: Discarding stale error for query='{}' seq={}",
                        query, seq
                    ));
                }
            }
        },

        ApiResponse::MovieDetailsResult {
            movie_id,
            seq,
            details,
        } => {
            let details = match details {
                Ok(details) => Some(details),
                Err(error) => {
                    crate::log_debug(&format!(
                        "DEBUG [MovieDetailsResult]: Fetch failed for movie={} {}",
                        movie_id,
                        describe_error(&error)
                    ));
                    // The modal falls back to the base list data
                    None
                }
            };

            if !app.model.ui.apply_detail_result(seq, movie_id, details) {
                crate::log_debug(&format!(
                    "DEBUG [MovieDetailsResult]: Discarding stale details for movie={} seq={}",
                    movie_id, seq
                ));
            }
        }

        ApiResponse::TrendingResult { movies } => match movies {
            Ok(movies) => {
                app.model.catalog.set_trending(movies);
            }
            Err(error) => {
                // Trending is decorative; failures leave the strip as-is
                crate::log_debug(&format!(
                    "DEBUG [TrendingResult]: Fetch failed {}",
                    describe_error(&error)
                ));
            }
        },
    }
}
