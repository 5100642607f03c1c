//! Movie Detail Modal UI
//!
//! Renders the centered overlay for the selected movie: poster pane on the
//! left, scrollable details on the right. While details are still loading
//! the overlay shows a placeholder; a failed detail fetch falls back to the
//! base data carried over from the list.

use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use flicktui::logic::certification::certification;
use flicktui::logic::formatting::{
    director, format_popularity, format_runtime, release_year, top_billed,
};
use flicktui::model::{DetailState, ModalModel};

use crate::PosterState;

use super::layout::modal_area;

pub fn render_modal(
    f: &mut Frame,
    terminal_size: Rect,
    modal: &mut ModalModel,
    poster_states: &mut HashMap<u64, PosterState>,
    region: &str,
    default_certification: &str,
) {
    let area = modal_area(terminal_size);

    // Clear whatever the overlay covers
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", modal.movie.title))
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if modal.detail == DetailState::Loading {
        let loading = Paragraph::new("Loading details...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(loading, inner);
        return;
    }

    // Poster pane only when a poster exists for this movie
    let (poster_pane, details_pane) = if modal.poster_url.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
            .split(inner);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, inner)
    };

    if let Some(pane) = poster_pane {
        render_poster(f, pane, modal.movie.id, poster_states);
    }

    render_details(f, details_pane, modal, region, default_certification);
}

fn render_poster(
    f: &mut Frame,
    area: Rect,
    movie_id: u64,
    poster_states: &mut HashMap<u64, PosterState>,
) {
    match poster_states.get_mut(&movie_id) {
        Some(PosterState::Ready(protocol)) => {
            f.render_stateful_widget(StatefulImage::default(), area, protocol);
        }
        Some(PosterState::Loading) => {
            let text = Paragraph::new("Loading poster...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(text, area);
        }
        _ => {
            let text = Paragraph::new("No poster")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(text, area);
        }
    }
}

fn render_details(
    f: &mut Frame,
    area: Rect,
    modal: &ModalModel,
    region: &str,
    default_certification: &str,
) {
    let movie = &modal.movie;
    let details = modal.details();

    let label = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::new();

    // Summary line: year, certification, runtime
    let mut summary: Vec<Span> = Vec::new();
    summary.push(Span::raw(
        release_year(&movie.release_date).unwrap_or("----").to_string(),
    ));
    summary.push(Span::raw("  "));
    summary.push(Span::styled(
        certification(details, region, default_certification),
        Style::default().fg(Color::Yellow),
    ));
    if let Some(runtime) = details.and_then(|d| d.runtime) {
        summary.push(Span::raw("  "));
        summary.push(Span::raw(format_runtime(runtime)));
    }
    lines.push(Line::from(summary));
    lines.push(Line::raw(""));

    if let Some(tagline) = details.and_then(|d| d.tagline.as_deref()) {
        if !tagline.is_empty() {
            lines.push(Line::from(Span::styled(
                tagline.to_uppercase(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::raw(""));
        }
    }

    if let Some(details) = details {
        if !details.genres.is_empty() {
            let genres: Vec<String> =
                details.genres.iter().map(|g| g.name.clone()).collect();
            lines.push(Line::from(vec![
                Span::styled("Genres: ", label),
                Span::raw(genres.join(", ")),
            ]));
            lines.push(Line::raw(""));
        }
    }

    if !movie.overview.is_empty() {
        lines.push(Line::from(Span::styled("Overview", label)));
        lines.push(Line::raw(movie.overview.clone()));
        lines.push(Line::raw(""));
    }

    if !movie.release_date.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Release Date: ", label),
            Span::raw(movie.release_date.clone()),
        ]));
    }
    if !movie.original_language.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Language: ", label),
            Span::raw(movie.original_language.to_uppercase()),
        ]));
    }
    if movie.popularity > 0.0 {
        lines.push(Line::from(vec![
            Span::styled("Popularity: ", label),
            Span::raw(format_popularity(movie.popularity)),
        ]));
    }

    if let Some(credits) = details.and_then(|d| d.credits.as_ref()) {
        lines.push(Line::raw(""));
        if let Some(name) = director(credits) {
            lines.push(Line::from(vec![
                Span::styled("Director: ", label),
                Span::raw(name.to_string()),
            ]));
        }
        let cast = top_billed(credits, 5);
        if !cast.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Cast: ", label),
                Span::raw(cast.join(", ")),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll_offset, 0));
    f.render_widget(paragraph, area);
}
