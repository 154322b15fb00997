use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{debug, info};

mod catalog;
mod config;
mod error;
mod models;
mod playlist;
mod source;


use crate::catalog::{Catalog, CatalogBuilder, CatalogOptions};
use crate::config::load_config;
use crate::models::{AgeClass, Intensity};
use crate::playlist::{PlaylistGenerator, SessionTemplate};

#[derive(Parser)]
#[command(name = "playlist-maker")]
#[command(about = "Prints an ordered song list for ZiCardio and MaziCardio classes")]
#[command(version)]
struct Args {
    /// Path to the song sheet CSV (overrides SONGS_CSV)
    #[arg(short = 'f', long = "file")]
    songs_csv: Option<PathBuf>,

    /// Path to a session template JSON file (overrides SESSION_TEMPLATE)
    #[arg(short = 't', long = "template")]
    template: Option<PathBuf>,

    /// ZiCardio class - leave out b-girl songs
    #[arg(long = "zi")]
    zi: bool,

    /// Enable debug mode - list the whole catalog before the playlist
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Seed the random picks, for repeatable output while debugging
    #[arg(long = "seed")]
    seed: Option<u64>,
}

/// One catalog listing line: `<age>- <intensity>- <title>`
fn format_catalog_line(age: AgeClass, intensity: Intensity, title: &str) -> String {
    format!("{:7}- {:2}- {}", age, intensity.key(), title)
}

fn print_catalog(catalog: &Catalog) {
    for (age, intensity, title) in catalog.entries() {
        println!("{}", format_catalog_line(age, intensity, title));
    }
}

fn main() -> Result<()> {
    // stdout carries the playlist, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playlist_maker=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config();
    debug!("Loaded config: {config:?}");

    let songs_csv = args.songs_csv.unwrap_or(config.songs_csv);
    let template = match args.template.or(config.session_template) {
        Some(path) => SessionTemplate::load_from_file(&path)
            .with_context(|| format!("Failed to load session template '{}'", path.display()))?,
        None => SessionTemplate::default(),
    };
    info!(
        "Using session template '{}' with {} slots",
        template.name,
        template.len()
    );

    let records = source::load_song_records(&songs_csv)
        .with_context(|| format!("Failed to read song sheet '{}'", songs_csv.display()))?;

    let options = if args.zi {
        CatalogOptions::zicardio()
    } else {
        CatalogOptions::default()
    };
    let today = Local::now().date_naive();
    let catalog = CatalogBuilder::new(options, today)
        .build(records)
        .context("Failed to build song catalog")?;

    if args.debug {
        print_catalog(&catalog);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = PlaylistGenerator::new(template);
    let playlist = generator
        .generate_playlist(&catalog, &mut rng)
        .context("Failed to assemble playlist")?;

    for title in playlist.titles() {
        println!("{title}");
    }

    Ok(())
}
