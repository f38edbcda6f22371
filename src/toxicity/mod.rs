//! Hazardous-ingredient knowledge base and risk classification.
//!
//! - [`catalog`] — the ordered list of ingredient signatures the detector
//!   scans against.
//! - [`severity`] — canonical label → hazard score (0..=10) lookups.
//! - [`verdict`] — reduces an average score to a [`RiskVerdict`](crate::models::RiskVerdict).

pub mod catalog;
pub mod severity;
pub mod verdict;
