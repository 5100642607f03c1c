//! Pure application model - Elm Architecture
//!
//! Cloneable state with no I/O, organized into focused sub-models:
//!
//! - **CatalogModel**: movie list, trending strip, fetch lifecycle
//! - **SearchModel**: raw and debounced query text
//! - **UiModel**: focus, modal overlay, quit flag
//!
//! All network effects live in the background worker; handlers apply tagged
//! responses to the model, which is where stale ones get discarded.

pub mod catalog;
pub mod search;
pub mod ui;

use std::time::Duration;

pub use catalog::CatalogModel;
pub use search::SearchModel;
pub use ui::{DetailState, Focus, ModalModel, UiModel};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub catalog: CatalogModel,
    pub search: SearchModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            catalog: CatalogModel::new(),
            search: SearchModel::new(debounce_delay),
            ui: UiModel::new(),
        }
    }

    pub fn modal_open(&self) -> bool {
        self.ui.modal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(Duration::from_millis(500));
        assert!(model.catalog.movies.is_empty());
        assert!(model.catalog.trending.is_empty());
        assert!(!model.catalog.loading);
        assert!(!model.modal_open());
        assert_eq!(model.ui.focus, Focus::Results);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(Duration::from_millis(500));
        let _cloned = model.clone();
    }
}
