use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{AgeClass, Intensity};

use super::PlaylistSong;

/// Extra old song for variety: `uniform{0,1,2} % 2`, so 1 a third of the time
pub fn throwback_bonus<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..=2usize) % 2
}

/// Per-intensity song selection
pub struct SongSampler;

impl SongSampler {
    /// Draw up to `count` songs from one bucket, uniformly and without replacement.
    /// Short buckets yield as many songs as they have.
    pub fn choose_songs_for_age<R: Rng + ?Sized>(
        catalog: &Catalog,
        age: AgeClass,
        intensity: Intensity,
        count: usize,
        rng: &mut R,
    ) -> Vec<PlaylistSong> {
        if count == 0 {
            return Vec::new();
        }

        let bucket = catalog.bucket(age, intensity);
        let amount = count.min(bucket.len());
        bucket
            .choose_multiple(rng, amount)
            .map(|title| PlaylistSong {
                title: title.clone(),
                intensity,
                age,
            })
            .collect()
    }

    /// Pick `count` songs of one intensity.
    ///
    /// New songs are used first and always sit at the end of the returned list,
    /// so popping from the end hands them out before anything older. Recent and
    /// old songs fill the rest, shuffled together; a throwback bonus sometimes
    /// asks for one more old song, in which case the front of the list is dropped.
    pub fn songs_for_intensity<R: Rng + ?Sized>(
        catalog: &Catalog,
        intensity: Intensity,
        count: usize,
        rng: &mut R,
    ) -> Vec<PlaylistSong> {
        let new_songs = Self::choose_songs_for_age(catalog, AgeClass::New, intensity, count, rng);
        let mut remaining = count - new_songs.len();

        let mut older_songs: Vec<PlaylistSong> = Vec::new();
        for age in [AgeClass::Recent, AgeClass::Old] {
            remaining = remaining.saturating_sub(older_songs.len());

            if age == AgeClass::Old {
                let bonus = throwback_bonus(rng);
                if bonus > 0 {
                    debug!("Adding a throwback {intensity} song");
                }
                remaining += bonus;
            }

            older_songs.extend(Self::choose_songs_for_age(
                catalog, age, intensity, remaining, rng,
            ));
        }

        older_songs.shuffle(rng);

        let mut songs = older_songs;
        songs.extend(new_songs);
        if songs.len() > count {
            songs.drain(..songs.len() - count);
        }

        debug!(
            "Picked {} of {} {intensity} songs",
            songs.len(),
            count
        );
        songs
    }
}
