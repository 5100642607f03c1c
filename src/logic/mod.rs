//! Pure business logic, separated from I/O and rendering.
//!
//! Everything here is side-effect free and unit tested in place:
//! - debounce: delayed propagation of the search query
//! - certification: regional certification lookup with fallback
//! - errors: error classification and root-cause formatting
//! - formatting: display helpers (year, runtime, truncation, credits)

pub mod certification;
pub mod debounce;
pub mod errors;
pub mod formatting;
