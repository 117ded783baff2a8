use log::{debug, error, info};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::clients::{
    entities::Track,
    errors::{Error, Result},
};

/// Last.fm method name of the track search endpoint
pub const TRACK_SEARCH_METHOD: &str = "track.search";

#[derive(Deserialize, Debug)]
struct LastFMAPITrack {
    url: String,
    name: String,
    artist: String,
}

#[derive(Deserialize, Debug)]
struct Tracks {
    track: Vec<LastFMAPITrack>,
}
#[derive(Deserialize, Debug)]
struct TrackMatches {
    trackmatches: Tracks,
}

#[derive(Deserialize, Debug)]
struct TrackSearchResponse {
    results: TrackMatches,
}

impl From<LastFMAPITrack> for Track {
    fn from(t: LastFMAPITrack) -> Track {
        Track {
            name: t.name,
            artist: t.artist,
            url: t.url,
        }
    }
}

/// Connection settings for the Last.fm API. Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastFmConfig {
    /// API key sent as `api_key` on every request
    pub api_key: String,
    /// Base endpoint, e.g. `https://ws.audioscrobbler.com/2.0/`
    pub base_url: String,
    /// Response format sent as `format`, normally `json`
    pub format: String,
}

/// Thin async client for the Last.fm track search
pub struct LastFmClient {
    config: LastFmConfig,
    base_url: Url,
    http: reqwest::Client,
}

impl LastFmClient {
    /// Build a client. The base URL is validated here, not per request.
    pub fn new(config: LastFmConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(LastFmClient {
            config,
            base_url,
            http,
        })
    }

    /// Request URL for `method`: base URL plus `method`, `api_key`, `format`
    /// and every extra pair in `params`, all query-encoded.
    #[must_use]
    pub fn build_url(&self, method: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("method", method)
                .append_pair("api_key", &self.config.api_key)
                .append_pair("format", &self.config.format);
            for (name, value) in params {
                query.append_pair(name, value);
            }
        }
        url
    }

    /// Search Last.fm for `track_name` and return the first match.
    ///
    /// Other matches are discarded: Last.fm ranks them and gives no way to
    /// tell two legitimate candidates apart.
    pub async fn search_track(&self, track_name: &str) -> Result<Track> {
        let url = self.build_url(TRACK_SEARCH_METHOD, &[("track", track_name)]);
        debug!("Constructed URL: {}", masked(&url));

        match self.fetch_first_match(url).await {
            Ok(track) => {
                info!("Found track: '{}' by '{}'", track.name, track.artist);
                Ok(track)
            }
            Err(e) => {
                error!("Error while searching for track: {e}");
                Err(e)
            }
        }
    }

    async fn fetch_first_match(&self, url: Url) -> Result<Track> {
        // error_for_status keeps error bodies from ever reaching the parser
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_track_search(&body)
    }
}

/// Map a raw `track.search` body to its first match.
pub fn parse_track_search(body: &str) -> Result<Track> {
    let value: Value = serde_json::from_str(body)?;

    // Last.fm reports some failures with a 200 and an error envelope
    if let Some(code) = value.get("error") {
        return Err(Error::Api {
            code: code.as_i64().unwrap_or_default(),
            message: value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }

    let response: TrackSearchResponse = serde_json::from_value(value)?;
    response
        .results
        .trackmatches
        .track
        .into_iter()
        .next()
        .map(Track::from)
        .ok_or_else(|| Error::UnexpectedResponse("track search returned no matches".into()))
}

// Copy of the URL safe to log, API key masked
fn masked(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "api_key" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked
}
