//! Movie list and trending strip state, including the fetch lifecycle.

use crate::api::Movie;
use crate::trending::TrendingMovie;

#[derive(Clone, Debug, Default)]
pub struct CatalogModel {
    /// Current movie list. Replaced wholesale by an applied fetch; kept as-is
    /// when a fetch fails.
    pub movies: Vec<Movie>,

    /// Trending strip records. Empty when the sink is unconfigured or failed.
    pub trending: Vec<TrendingMovie>,

    /// True while a list fetch is in flight
    pub loading: bool,

    /// Generic user-facing message for a failed list fetch
    pub error_message: Option<String>,

    /// Selection in the results list
    pub selected: Option<usize>,

    /// Selection in the trending strip
    pub trending_selected: Option<usize>,

    /// Query of the most recently issued list fetch
    pub current_query: String,

    /// Sequence number of the most recently issued list fetch. Responses
    /// tagged with any other sequence are stale and discarded.
    latest_list_seq: u64,
}

impl CatalogModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest_list_seq(&self) -> u64 {
        self.latest_list_seq
    }

    /// Start a new list fetch: bump the sequence, enter loading, clear the
    /// previous error. Returns the tag the response must carry back.
    pub fn begin_list_fetch(&mut self, query: &str) -> u64 {
        self.latest_list_seq += 1;
        self.loading = true;
        self.error_message = None;
        self.current_query = query.to_string();
        self.latest_list_seq
    }

    /// Apply a completed list fetch. Returns false when the response is
    /// stale (a newer fetch was issued since), in which case nothing changes
    /// and the loading flag stays owned by the newer fetch.
    ///
    /// On failure the previous list is retained; only the error message and
    /// loading flag change.
    pub fn apply_list_result(&mut self, seq: u64, result: Result<Vec<Movie>, String>) -> bool {
        if seq != self.latest_list_seq {
            return false;
        }

        self.loading = false;
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.error_message = None;
                self.selected = if self.movies.is_empty() {
                    None
                } else {
                    // Clamp a stale selection instead of resetting it
                    Some(
                        self.selected
                            .unwrap_or(0)
                            .min(self.movies.len() - 1),
                    )
                };
            }
            Err(message) => {
                self.error_message = Some(message);
            }
        }
        true
    }

    pub fn set_trending(&mut self, trending: Vec<TrendingMovie>) {
        self.trending = trending;
        self.trending_selected = if self.trending.is_empty() {
            None
        } else {
            Some(
                self.trending_selected
                    .unwrap_or(0)
                    .min(self.trending.len() - 1),
            )
        };
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected.and_then(|idx| self.movies.get(idx))
    }

    pub fn selected_trending(&self) -> Option<&TrendingMovie> {
        self.trending_selected
            .and_then(|idx| self.trending.get(idx))
    }

    pub fn select_next(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(idx) => (idx + 1).min(self.movies.len() - 1),
            None => 0,
        };
        self.selected = Some(next);
    }

    pub fn select_previous(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        let prev = match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(prev);
    }

    pub fn select_next_trending(&mut self) {
        if self.trending.is_empty() {
            return;
        }
        let next = match self.trending_selected {
            Some(idx) => (idx + 1).min(self.trending.len() - 1),
            None => 0,
        };
        self.trending_selected = Some(next);
    }

    pub fn select_previous_trending(&mut self) {
        if self.trending.is_empty() {
            return;
        }
        let prev = match self.trending_selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        };
        self.trending_selected = Some(prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_fetch_sets_loading_and_clears_error() {
        let mut catalog = CatalogModel::new();
        catalog.error_message = Some("old error".to_string());

        let seq = catalog.begin_list_fetch("dune");
        assert!(catalog.loading);
        assert!(catalog.error_message.is_none());
        assert_eq!(catalog.current_query, "dune");
        assert_eq!(seq, catalog.latest_list_seq());
    }

    #[test]
    fn test_apply_success_replaces_list() {
        let mut catalog = CatalogModel::new();
        let seq = catalog.begin_list_fetch("dune");

        let applied = catalog.apply_list_result(seq, Ok(vec![movie(1, "Dune")]));
        assert!(applied);
        assert!(!catalog.loading);
        assert_eq!(catalog.movies.len(), 1);
        assert_eq!(catalog.selected, Some(0));
    }

    #[test]
    fn test_apply_failure_keeps_previous_list() {
        let mut catalog = CatalogModel::new();
        let seq = catalog.begin_list_fetch("");
        catalog.apply_list_result(seq, Ok(vec![movie(1, "Dune"), movie(2, "Tenet")]));

        let seq = catalog.begin_list_fetch("batman");
        let applied = catalog.apply_list_result(seq, Err("fetch failed".to_string()));
        assert!(applied);
        assert!(!catalog.loading);
        assert_eq!(catalog.error_message.as_deref(), Some("fetch failed"));
        // Previous list is left at its previous value, not cleared
        assert_eq!(catalog.movies.len(), 2);
    }

    #[test]
    fn test_selection_clamped_on_shorter_list() {
        let mut catalog = CatalogModel::new();
        let seq = catalog.begin_list_fetch("");
        catalog.apply_list_result(
            seq,
            Ok(vec![movie(1, "A"), movie(2, "B"), movie(3, "C")]),
        );
        catalog.selected = Some(2);

        let seq = catalog.begin_list_fetch("a");
        catalog.apply_list_result(seq, Ok(vec![movie(1, "A")]));
        assert_eq!(catalog.selected, Some(0));

        let seq = catalog.begin_list_fetch("zzz");
        catalog.apply_list_result(seq, Ok(vec![]));
        assert_eq!(catalog.selected, None);
    }

    #[test]
    fn test_selection_navigation() {
        let mut catalog = CatalogModel::new();
        let seq = catalog.begin_list_fetch("");
        catalog.apply_list_result(seq, Ok(vec![movie(1, "A"), movie(2, "B")]));

        catalog.select_next();
        assert_eq!(catalog.selected_movie().unwrap().id, 2);
        catalog.select_next(); // Clamped at the end
        assert_eq!(catalog.selected_movie().unwrap().id, 2);
        catalog.select_previous();
        assert_eq!(catalog.selected_movie().unwrap().id, 1);
    }
}
