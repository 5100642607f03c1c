//! Core library for the movie discovery TUI: API clients, configuration,
//! pure logic, and the application model. The binary adds the terminal
//! frontend, handlers, and the background request worker on top.

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod trending;
