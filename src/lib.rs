//! Lfmtrack - look up tracks by name on Last.fm
//!
//! This library queries the Last.fm `track.search` endpoint and hands back
//! the best match as a plain [`clients::Track`] record.

/// Client modules for interacting with the Last.fm API
pub mod clients;
/// Environment based configuration
pub mod config;
