//! Search query state: raw text plus its debounced propagation.

use std::time::Duration;

use crate::logic::debounce::Debouncer;

#[derive(Clone, Debug)]
pub struct SearchModel {
    pub debouncer: Debouncer,
}

impl SearchModel {
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_delay),
        }
    }

    /// Raw query as typed, for rendering the input box.
    pub fn query(&self) -> &str {
        self.debouncer.raw()
    }

    pub fn is_empty(&self) -> bool {
        self.debouncer.raw().is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        let mut value = self.debouncer.raw().to_string();
        value.push(c);
        self.debouncer.input(value);
    }

    pub fn pop_char(&mut self) {
        let mut value = self.debouncer.raw().to_string();
        if value.pop().is_some() {
            self.debouncer.input(value);
        }
    }

    pub fn clear(&mut self) {
        self.debouncer.input(String::new());
    }
}
