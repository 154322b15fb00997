use std::path::PathBuf;

/// Where the sheet lives when nothing else says otherwise
pub const DEFAULT_SONGS_CSV: &str = "../Downloads/mazi_song - songs.csv";

/// Configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub songs_csv: PathBuf,
    pub session_template: Option<PathBuf>,
}

impl Config {
    /// Build a config from raw variable values, falling back to defaults
    pub fn from_values(songs_csv: Option<String>, session_template: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Config {
            songs_csv: non_blank(songs_csv)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SONGS_CSV)),
            session_template: non_blank(session_template).map(PathBuf::from),
        }
    }
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Config {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config::from_values(
        std::env::var("SONGS_CSV").ok(),
        std::env::var("SESSION_TEMPLATE").ok(),
    )
}
