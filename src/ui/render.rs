use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use flicktui::model::Focus;

use crate::App;

use super::{layout, modal, movie_list, search, status_bar, trending};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let has_trending = !app.model.catalog.trending.is_empty();
    let layout_info = layout::calculate_layout(size, has_trending);
    let modal_open = app.model.modal_open();

    // Header line
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "flicktui",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  find movies you'll enjoy",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    f.render_widget(header, layout_info.header_area);

    // Search input. Inactive while the modal is open: keystrokes go to the
    // overlay, so the cursor disappears from the box.
    search::render_search_input(
        f,
        layout_info.search_area,
        app.model.search.query(),
        !modal_open,
        Some(app.model.catalog.movies.len()),
    );

    if let Some(area) = layout_info.trending_area {
        trending::render_trending(
            f,
            area,
            &app.model.catalog,
            !modal_open && app.model.ui.focus == Focus::Trending,
        );
    }

    movie_list::render_movie_list(
        f,
        layout_info.results_area,
        &app.model.catalog,
        !modal_open && app.model.ui.focus == Focus::Results,
    );

    status_bar::render_status_bar(f, layout_info.status_area, modal_open, has_trending);

    // Modal overlay renders last so it sits on top of everything
    if let Some(m) = app.model.ui.modal.as_mut() {
        modal::render_modal(
            f,
            size,
            m,
            &mut app.poster_states,
            &app.region,
            &app.default_certification,
        );
    }
}
