//! Report renderers for label scan results.
//!
//! - [`terminal`] — colored severity meters, overall score, and verdict line;
//!   respects `--quiet`.
//! - [`json`] — machine-readable report preserving catalog scan order.

pub mod json;
pub mod terminal;
