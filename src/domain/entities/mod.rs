//! Core domain entities.
//!
//! - [`LinkRecord`] - A slug mapped to a primary and fallback destination

pub mod link;

pub use link::LinkRecord;
