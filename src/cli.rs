use clap::{Parser, Subcommand};
use lfmtrack::clients::{LastFmClient, Result};
use lfmtrack::config::ConfigBuilder;
use log::info;

#[derive(Parser)]
#[command(name = "lfmtrack")]
#[command(version, about = "Look up tracks by name on Last.fm", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the best Last.fm match for a track name
    Search {
        /// Track name to search for
        track: String,
        /// Print the track as JSON
        #[arg(long)]
        json: bool,
        /// Last.fm API key, defaults to LASTFM_API_KEY
        #[arg(long)]
        api_key: Option<String>,
        /// API base URL, defaults to LASTFM_API_URL or the public endpoint
        #[arg(long)]
        api_url: Option<String>,
        /// Response format, defaults to LASTFM_API_FORMAT or json
        #[arg(long)]
        format: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            track,
            json,
            api_key,
            api_url,
            format,
        } => {
            let mut builder = ConfigBuilder::new();
            if let Some(k) = api_key {
                builder = builder.api_key(k);
            }
            if let Some(u) = api_url {
                builder = builder.base_url(u);
            }
            if let Some(f) = format {
                builder = builder.format(f);
            }
            search_track(builder, &track, json).await?;
        }
    }
    Ok(())
}

async fn search_track(builder: ConfigBuilder, track: &str, json: bool) -> Result<()> {
    info!("Building config ...");
    let client = LastFmClient::new(builder.build()?)?;
    let found = client.search_track(track).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        println!("{found}");
    }
    Ok(())
}
