// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, search, trending, results, status)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders search input box with query and match count
// - trending: Renders the horizontal trending searches strip
// - movie_list: Renders the main results list
// - modal: Renders the movie detail overlay with poster
// - status_bar: Renders bottom key-hint bar

pub mod layout;
pub mod modal;
pub mod movie_list;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod trending;

// Re-export main render function for convenience
pub use render::render;
