//! UI state: pane focus and the detail modal.

use crate::api::{Movie, MovieDetails};
use crate::trending::TrendingMovie;

/// Which pane receives list-navigation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Results,
    Trending,
}

/// Detail fetch lifecycle for the open modal.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    /// Fetch finished. `None` means it failed; the view falls back to the
    /// base data carried over from the list item.
    Loaded(Option<MovieDetails>),
}

#[derive(Clone, Debug)]
pub struct ModalModel {
    /// Base data from the list item or trending record
    pub movie: Movie,
    pub poster_url: Option<String>,
    pub detail: DetailState,
    pub scroll_offset: u16,
    /// Tag the detail response must carry to be applied
    request_seq: u64,
}

impl ModalModel {
    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    /// Detail data, once loaded successfully.
    pub fn details(&self) -> Option<&MovieDetails> {
        match &self.detail {
            DetailState::Loaded(details) => details.as_ref(),
            DetailState::Loading => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Open modal, if any. The modal owns the selected movie, so "modal open
    /// implies a selection exists" holds by construction and closing clears
    /// both together.
    pub modal: Option<ModalModel>,

    pub focus: Focus,
    pub should_quit: bool,
    pub config_path: Option<String>,

    /// Monotonically increasing across modal opens, for discarding detail
    /// responses that belong to a superseded modal
    detail_seq: u64,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            modal: None,
            focus: Focus::Results,
            should_quit: false,
            config_path: None,
            detail_seq: 0,
        }
    }

    /// Open the modal for `movie` and start a new detail fetch sequence.
    /// Re-opening for a different movie resets the state machine to loading.
    /// Returns the tag the detail response must carry back.
    pub fn open_modal(&mut self, movie: Movie, poster_url: Option<String>) -> u64 {
        self.detail_seq += 1;
        self.modal = Some(ModalModel {
            movie,
            poster_url,
            detail: DetailState::Loading,
            scroll_offset: 0,
            request_seq: self.detail_seq,
        });
        self.detail_seq
    }

    /// Close the modal, releasing the input lock on the background panes and
    /// clearing the selected movie in one step.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Apply a completed detail fetch. Returns false when the response is
    /// stale: the modal was closed, re-opened for another movie, or a newer
    /// fetch sequence was issued.
    ///
    /// Both success and failure move the modal to `Loaded`; failure carries
    /// `None` and the view falls back to base data.
    pub fn apply_detail_result(
        &mut self,
        seq: u64,
        movie_id: u64,
        details: Option<MovieDetails>,
    ) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };
        if modal.request_seq != seq || modal.movie.id != movie_id {
            return false;
        }
        modal.detail = DetailState::Loaded(details);
        true
    }

    /// Base movie record for a trending strip entry, enough to open the
    /// modal and let the detail fetch fill in the rest.
    pub fn movie_from_trending(record: &TrendingMovie) -> Movie {
        Movie {
            id: record.movie_id,
            title: record.title.clone(),
            ..Default::default()
        }
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("movie-{}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_modal_starts_loading() {
        let mut ui = UiModel::new();
        let seq = ui.open_modal(movie(7), None);

        let modal = ui.modal.as_ref().unwrap();
        assert_eq!(modal.movie.id, 7);
        assert_eq!(modal.detail, DetailState::Loading);
        assert_eq!(modal.request_seq(), seq);
    }

    #[test]
    fn test_close_clears_selection_and_modal_together() {
        let mut ui = UiModel::new();
        ui.open_modal(movie(7), None);
        ui.close_modal();
        assert!(ui.modal.is_none());
    }

    #[test]
    fn test_detail_failure_still_reaches_loaded() {
        let mut ui = UiModel::new();
        let seq = ui.open_modal(movie(7), None);

        assert!(ui.apply_detail_result(seq, 7, None));
        let modal = ui.modal.as_ref().unwrap();
        assert_eq!(modal.detail, DetailState::Loaded(None));
        assert!(modal.details().is_none());
    }

    #[test]
    fn test_stale_detail_discarded_after_reopen() {
        let mut ui = UiModel::new();
        let first_seq = ui.open_modal(movie(7), None);
        let second_seq = ui.open_modal(movie(8), None);

        // The superseded fetch resolves late
        assert!(!ui.apply_detail_result(first_seq, 7, Some(MovieDetails::default())));
        let modal = ui.modal.as_ref().unwrap();
        assert_eq!(modal.movie.id, 8);
        assert_eq!(modal.detail, DetailState::Loading);

        assert!(ui.apply_detail_result(second_seq, 8, Some(MovieDetails::default())));
    }

    #[test]
    fn test_detail_after_close_discarded() {
        let mut ui = UiModel::new();
        let seq = ui.open_modal(movie(7), None);
        ui.close_modal();
        assert!(!ui.apply_detail_result(seq, 7, Some(MovieDetails::default())));
        assert!(ui.modal.is_none());
    }
}
