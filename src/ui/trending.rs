//! Trending Strip UI
//!
//! Renders the horizontal strip of top searched titles from the analytics
//! sink. The strip is hidden entirely when there are no records.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use flicktui::model::CatalogModel;

pub fn render_trending(f: &mut Frame, area: Rect, catalog: &CatalogModel, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Trending Searches ")
        .style(Style::default().fg(border_color));

    let mut spans: Vec<Span> = Vec::new();
    for (idx, record) in catalog.trending.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }

        let selected = focused && catalog.trending_selected == Some(idx);
        let style = if selected {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(
            format!("{}", idx + 1),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(record.title.clone(), style));
        spans.push(Span::styled(
            format!(" x{}", record.count),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(paragraph, area);
}
