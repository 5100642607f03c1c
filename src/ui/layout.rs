use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// App title line
    pub header_area: Rect,
    /// Search input area
    pub search_area: Rect,
    /// Trending strip area, present only when there are records to show
    pub trending_area: Option<Rect>,
    /// Main results list area
    pub results_area: Rect,
    /// Bottom key-hint bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, has_trending: bool) -> LayoutInfo {
    let trending_height = if has_trending { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header line
            Constraint::Length(3),               // Search input (bordered)
            Constraint::Length(trending_height), // Trending strip (bordered, when present)
            Constraint::Min(3),                  // Results list
            Constraint::Length(1),               // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: main_chunks[0],
        search_area: main_chunks[1],
        trending_area: if has_trending {
            Some(main_chunks[2])
        } else {
            None
        },
        results_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}

/// Centered area for the detail modal, roughly 80% of the screen with a
/// width cap so it stays readable on wide terminals.
pub fn modal_area(terminal_size: Rect) -> Rect {
    let width = (terminal_size.width.saturating_mul(4) / 5).min(90).max(20);
    let height = (terminal_size.height.saturating_mul(4) / 5).max(10);

    let x = terminal_size.x + (terminal_size.width.saturating_sub(width)) / 2;
    let y = terminal_size.y + (terminal_size.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width: width.min(terminal_size.width),
        height: height.min(terminal_size.height),
    }
}
