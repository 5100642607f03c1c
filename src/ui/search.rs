//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query as typed
/// - `active`: Whether input is actively receiving keystrokes (no modal open)
/// - `match_count`: Number of results currently shown
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: Option<usize>,
) {
    let title = match match_count {
        Some(count) if !query.is_empty() => {
            format!(" Search ({} matches) - Esc to clear ", count)
        }
        _ => " Search ".to_string(),
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw(query.to_string()),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(vec![Span::styled(
            query.to_string(),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line])
        .block(block)
        .style(Style::default());

    f.render_widget(paragraph, area);
}
