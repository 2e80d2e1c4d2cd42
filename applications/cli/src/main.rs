/// Tonearm - local album player core
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tonearm_catalog::AlbumCatalog;
use tonearm_cli::{AppConfig, Session};
use tonearm_core::{MetadataKey, MetadataRecord, TonearmError};
use tonearm_metadata::MetadataExtractor;
use tonearm_playback::{PlaybackMode, PlaylistEvent, TrackHistory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tonearm")]
#[command(about = "Album catalog, metadata extraction and playlist engine", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TONEARM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an album and build its playlist
    Open {
        /// Album URL: file:// directory, descriptor path or network URL
        url: String,

        /// Playback mode (sequential, loop, random)
        #[arg(short, long)]
        mode: Option<PlaybackMode>,

        /// Number of track endings to simulate
        #[arg(short, long, default_value_t = 0)]
        steps: usize,
    },
    /// List loaded albums, most recent first
    Albums,
    /// List played tracks, most recent first
    Tracks,
    /// Print the metadata of one media file
    Probe {
        /// file:// URL or path
        locator: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonearm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    config.validate()?;

    match cli.command {
        Commands::Open { url, mode, steps } => {
            open_album(config, &url, mode, steps)?;
        }
        Commands::Albums => {
            list_albums(&config);
        }
        Commands::Tracks => {
            list_tracks(&config);
        }
        Commands::Probe { locator } => {
            probe(&config, &locator)?;
        }
    }

    Ok(())
}

fn open_album(
    mut config: AppConfig,
    url: &str,
    mode: Option<PlaybackMode>,
    steps: usize,
) -> anyhow::Result<()> {
    if let Some(mode) = mode {
        config.playback.mode = mode;
    }

    let mut session = Session::open(&config);
    let len = session.open_album(url)?;

    if let Some(album) = session.catalog().current_album() {
        println!("{} ({} tracks)", album.name, len);
        if !album.description.is_empty() {
            println!("{}", album.description);
        }
    }

    {
        let playlist = session.playlist();
        let current = playlist.current_index();
        for (index, record) in playlist.records().enumerate() {
            let marker = if Some(index) == current { ">" } else { " " };
            println!("{} {:>3}. {}", marker, index + 1, describe(record));
        }
    }

    if steps == 0 {
        return Ok(());
    }

    session.playlist_mut().subscribe(|event| {
        if let PlaylistEvent::CurrentChanged { url } = event {
            println!("now playing: {}", url);
        }
    });

    println!("mode: {}", config.playback.mode);
    for _ in 0..steps {
        session.playlist_mut().end_of_media();
    }

    Ok(())
}

fn list_albums(config: &AppConfig) {
    let catalog = AlbumCatalog::open(config.catalog_config());
    if catalog.is_empty() {
        println!("No albums loaded yet");
        return;
    }

    for entry in catalog.sorted_history() {
        println!(
            "{}  {} ({} tracks)  {}",
            entry.last_loaded.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
            entry.descriptor.name,
            entry.descriptor.tracks.len(),
            entry.descriptor.uid
        );
    }
}

fn list_tracks(config: &AppConfig) {
    let history = TrackHistory::open(config.playlist_config().history_path);
    if history.is_empty() {
        println!("No tracks played yet");
        return;
    }

    for entry in history.entries() {
        println!(
            "{}  {}",
            entry.last_played.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
            describe(&entry.record)
        );
    }
}

fn probe(config: &AppConfig, locator: &str) -> anyhow::Result<()> {
    let extractor = MetadataExtractor::new(config.extractor_config());
    let record = extractor
        .try_extract(locator)
        .map_err(TonearmError::from)?;

    for (name, value) in record.iter() {
        let is_image = name == MetadataKey::CoverArtImage.as_str()
            || name == MetadataKey::ThumbnailImage.as_str();
        match value.as_str() {
            Some(text) if is_image => println!("{:<20} <{} bytes base64>", name, text.len()),
            Some(text) => println!("{:<20} {}", name, text),
            None => println!("{:<20} {}", name, value),
        }
    }

    Ok(())
}

/// "Author - Title [m:ss]" for one record
fn describe(record: &MetadataRecord) -> String {
    let title = record.title().or(record.url()).unwrap_or("?");
    let author = record.author().unwrap_or("Unknown");
    match record.duration_ms() {
        Some(ms) => format!("{} - {} [{}:{:02}]", author, title, ms / 60_000, ms / 1000 % 60),
        None => format!("{} - {}", author, title),
    }
}
