use std::collections::BTreeMap;

use rand::Rng;
use tracing::info;

use super::sampler::SongSampler;
use super::{Playlist, PlaylistSong, SessionTemplate};
use crate::catalog::Catalog;
use crate::error::{PlaylistError, Result};
use crate::models::Intensity;

/// Main playlist generator
pub struct PlaylistGenerator {
    template: SessionTemplate,
}

impl PlaylistGenerator {
    pub fn new(template: SessionTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &SessionTemplate {
        &self.template
    }

    /// Sample every intensity the template asks for
    pub fn pick_songs<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> BTreeMap<Intensity, Vec<PlaylistSong>> {
        self.template
            .tally()
            .into_iter()
            .map(|(intensity, count)| {
                let songs = SongSampler::songs_for_intensity(catalog, intensity, count, rng);
                (intensity, songs)
            })
            .collect()
    }

    /// Generate a playlist following the template slot by slot.
    /// Each slot takes the last picked song of its intensity, so new songs go first.
    pub fn generate_playlist<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<Playlist> {
        let mut picks = self.pick_songs(catalog, rng);

        let songs = self
            .template
            .slots()
            .iter()
            .enumerate()
            .map(|(slot, &intensity)| {
                picks
                    .get_mut(&intensity)
                    .and_then(Vec::pop)
                    .ok_or(PlaylistError::ExhaustedBucket {
                        intensity,
                        slot: slot + 1,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let playlist = Playlist {
            name: self.template.name.clone(),
            songs,
        };

        let (new, recent, old) = playlist.age_mix();
        info!(
            "Generated '{}' with {} songs ({new} new, {recent} recent, {old} old)",
            playlist.name,
            playlist.len()
        );
        Ok(playlist)
    }
}
