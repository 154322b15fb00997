use crate::models::{AgeClass, Intensity};

/// A song drawn from the catalog, remembering which bucket it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSong {
    pub title: String,
    pub intensity: Intensity,
    pub age: AgeClass,
}

/// Represents a generated playlist
#[derive(Debug)]
pub struct Playlist {
    pub name: String,
    pub songs: Vec<PlaylistSong>,
}

impl Playlist {
    /// Song titles in slot order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.songs.iter().map(|s| s.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of songs drawn from each age class
    pub fn age_mix(&self) -> (usize, usize, usize) {
        let count = |age| self.songs.iter().filter(|s| s.age == age).count();
        (
            count(AgeClass::New),
            count(AgeClass::Recent),
            count(AgeClass::Old),
        )
    }
}
