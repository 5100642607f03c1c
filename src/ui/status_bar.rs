//! Status Bar UI
//!
//! Renders the bottom key-hint line. Hints change while the modal is open,
//! matching the reduced key set it accepts.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, modal_open: bool, trending_focusable: bool) {
    let hints = if modal_open {
        "Up/Down scroll | Esc/q close".to_string()
    } else {
        let mut parts = vec![
            "Type to search",
            "Up/Down select",
            "Enter details",
        ];
        if trending_focusable {
            parts.push("Tab trending");
        }
        parts.push("Esc clear/quit");
        parts.join(" | ")
    };

    let paragraph =
        Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
