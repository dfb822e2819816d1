//! Champion catalog from Riot's Data Dragon CDN. Only the CLI uses it; the
//! statistics engine works on whatever names the records carry.

pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod models;
