//! Results List UI
//!
//! Renders the main movie list: search results, or the popular titles feed
//! when the search box is empty. A failed fetch shows its message above the
//! previous list instead of blanking it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use flicktui::logic::formatting::{ellipsize, format_popularity, release_year};
use flicktui::model::CatalogModel;

pub fn render_movie_list(f: &mut Frame, area: Rect, catalog: &CatalogModel, focused: bool) {
    let title = if catalog.loading {
        " Movies (loading...) ".to_string()
    } else if catalog.current_query.is_empty() {
        format!(" Popular ({}) ", catalog.movies.len())
    } else {
        format!(" Results ({}) ", catalog.movies.len())
    };

    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // A fetch error takes one line at the top; the stale list stays visible
    let list_area = if let Some(message) = &catalog.error_message {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let error_line = Paragraph::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )));
        f.render_widget(error_line, chunks[0]);

        chunks[1]
    } else {
        inner
    };

    if catalog.movies.is_empty() {
        let text = if catalog.loading {
            "Loading..."
        } else {
            "No movies found"
        };
        let placeholder = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, list_area);
        return;
    }

    // Reserve space for year, language, and popularity columns
    let title_width = (list_area.width as usize).saturating_sub(24).max(10);

    let items: Vec<ListItem> = catalog
        .movies
        .iter()
        .map(|movie| {
            let year = release_year(&movie.release_date).unwrap_or("----");
            let line = Line::from(vec![
                Span::raw(format!(
                    "{:<width$}",
                    ellipsize(&movie.title, title_width),
                    width = title_width
                )),
                Span::styled(
                    format!("  {}  ", year),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}  ", movie.original_language.to_uppercase()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format_popularity(movie.popularity),
                    Style::default().fg(Color::Yellow),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    // Create temporary ListState for rendering
    let mut state = ListState::default();
    state.select(catalog.selected);
    f.render_stateful_widget(list, list_area, &mut state);
}
