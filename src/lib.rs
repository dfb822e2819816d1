//! Personal League of Legends match-history tracker.
//!
//! [`analysis`] is the statistics and recommendation engine. The rest are
//! the collaborators around it: record storage, the champion catalog,
//! configuration and terminal output.

pub mod analysis;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod store;
