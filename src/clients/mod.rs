/// Data entities returned to callers
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Last.fm API client
pub mod lastfm;

pub use entities::Track;
pub use errors::{Error, Result};
pub use lastfm::{LastFmClient, LastFmConfig};
