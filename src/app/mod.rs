//! App methods for kicking off background work
//!
//! These methods tag each fetch with a sequence number from the model and
//! hand the request to the background worker. The tag comes back on the
//! response, which is how stale results get discarded.

pub mod poster;

use flicktui::api::Movie;

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Start a list fetch for `query` (empty means the popular titles feed)
    pub fn fetch_movies(&mut self, query: &str) {
        let seq = self.model.catalog.begin_list_fetch(query);
        let _ = self.api_tx.send(ApiRequest::FetchMovies {
            query: query.to_string(),
            seq,
        });
    }

    /// Refresh the trending strip from the analytics sink
    pub fn fetch_trending(&mut self) {
        let _ = self.api_tx.send(ApiRequest::FetchTrending {
            limit: self.trending_limit,
        });
    }

    /// Open the detail modal and start its background fetches
    pub fn open_modal(&mut self, movie: Movie, poster_url: Option<String>) {
        let movie_id = movie.id;
        let seq = self.model.ui.open_modal(movie, poster_url.clone());
        let _ = self
            .api_tx
            .send(ApiRequest::FetchMovieDetails { movie_id, seq });

        if let Some(url) = poster_url {
            self.load_poster(movie_id, url);
        }
    }

    pub fn close_modal(&mut self) {
        self.model.ui.close_modal();
    }
}
