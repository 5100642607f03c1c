//! Test for the detail modal lifecycle
//!
//! The modal owns the selected movie, so opening, closing, and re-opening
//! must keep the detail state machine consistent: a detail response only
//! applies when the modal is still open for the same movie and the same
//! fetch sequence.

use flicktui::api::{Movie, MovieDetails};
use flicktui::model::{DetailState, UiModel};
use flicktui::trending::TrendingMovie;

fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_open_apply_close_roundtrip() {
    let mut ui = UiModel::new();

    let seq = ui.open_modal(movie(693134, "Dune: Part Two"), None);
    assert_eq!(ui.modal.as_ref().unwrap().detail, DetailState::Loading);

    assert!(ui.apply_detail_result(seq, 693134, Some(MovieDetails::default())));
    assert!(matches!(
        ui.modal.as_ref().unwrap().detail,
        DetailState::Loaded(Some(_))
    ));

    ui.close_modal();
    assert!(ui.modal.is_none());
}

#[test]
fn test_failed_details_fall_back_to_base_data() {
    let mut ui = UiModel::new();
    let seq = ui.open_modal(movie(693134, "Dune: Part Two"), None);

    assert!(ui.apply_detail_result(seq, 693134, None));

    let modal = ui.modal.as_ref().unwrap();
    assert_eq!(modal.detail, DetailState::Loaded(None));
    // Base data is still there for the view to fall back to
    assert_eq!(modal.movie.title, "Dune: Part Two");
}

#[test]
fn test_reopen_for_other_movie_discards_first_fetch() {
    let mut ui = UiModel::new();

    let first_seq = ui.open_modal(movie(1, "Dune"), None);
    let second_seq = ui.open_modal(movie(2, "Tenet"), None);

    assert!(!ui.apply_detail_result(first_seq, 1, Some(MovieDetails::default())));
    assert_eq!(ui.modal.as_ref().unwrap().detail, DetailState::Loading);

    assert!(ui.apply_detail_result(second_seq, 2, Some(MovieDetails::default())));
}

#[test]
fn test_response_after_close_is_discarded() {
    let mut ui = UiModel::new();
    let seq = ui.open_modal(movie(1, "Dune"), None);
    ui.close_modal();

    assert!(!ui.apply_detail_result(seq, 1, Some(MovieDetails::default())));
    assert!(ui.modal.is_none());
}

#[test]
fn test_reopen_resets_scroll_and_poster() {
    let mut ui = UiModel::new();

    ui.open_modal(movie(1, "Dune"), Some("https://example.com/a.jpg".to_string()));
    ui.modal.as_mut().unwrap().scroll_offset = 12;

    ui.open_modal(movie(2, "Tenet"), None);
    let modal = ui.modal.as_ref().unwrap();
    assert_eq!(modal.scroll_offset, 0);
    assert!(modal.poster_url.is_none());
}

#[test]
fn test_trending_record_opens_with_base_fields() {
    let record = TrendingMovie {
        movie_id: 693134,
        title: "Dune: Part Two".to_string(),
        search_term: "dune".to_string(),
        count: 42,
        ..Default::default()
    };

    let movie = UiModel::movie_from_trending(&record);
    assert_eq!(movie.id, 693134);
    assert_eq!(movie.title, "Dune: Part Two");
    // Everything else arrives with the detail fetch
    assert!(movie.overview.is_empty());
}
