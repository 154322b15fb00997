#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::catalog::Catalog;
    use crate::error::PlaylistError;
    use crate::models::{AgeClass, Intensity};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn create_test_catalog(buckets: &[(AgeClass, Intensity, &[&str])]) -> Catalog {
        let mut catalog = Catalog::new();
        for (age, intensity, titles) in buckets {
            for title in titles.iter() {
                catalog.push(*age, *intensity, title.to_string());
            }
        }
        catalog
    }

    /// Enough songs in every bucket to fill the default class several times over
    fn create_full_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for age in AgeClass::ALL {
            for intensity in Intensity::ALL {
                let per_bucket = if age == AgeClass::New { 1 } else { 6 };
                for i in 0..per_bucket {
                    catalog.push(age, intensity, format!("{age} {intensity} {i}"));
                }
            }
        }
        catalog
    }

    fn low_template(len: usize) -> SessionTemplate {
        SessionTemplate::new("Test", vec![Intensity::Low; len]).unwrap()
    }

    fn example_catalog() -> Catalog {
        create_test_catalog(&[
            (AgeClass::New, Intensity::Low, &["A"]),
            (AgeClass::Recent, Intensity::Low, &["B", "C"]),
            (AgeClass::Old, Intensity::Low, &["D"]),
        ])
    }

    #[test]
    fn test_single_slot_always_takes_the_new_song() {
        let generator = PlaylistGenerator::new(low_template(1));
        let catalog = example_catalog();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let playlist = generator.generate_playlist(&catalog, &mut rng).unwrap();
            assert_eq!(playlist.titles().collect::<Vec<_>>(), vec!["A"]);
        }
    }

    #[test]
    fn test_two_slots_take_new_song_first() {
        let generator = PlaylistGenerator::new(low_template(2));
        let catalog = example_catalog();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let playlist = generator.generate_playlist(&catalog, &mut rng).unwrap();
            let titles: Vec<_> = playlist.titles().collect();

            assert_eq!(titles.len(), 2);
            assert_eq!(titles[0], "A");
            assert!(["B", "C", "D"].contains(&titles[1]));
        }
    }

    #[test]
    fn test_default_template_fills_every_slot() {
        let generator = PlaylistGenerator::new(SessionTemplate::default());
        let catalog = create_full_catalog();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let playlist = generator.generate_playlist(&catalog, &mut rng).unwrap();

            assert_eq!(playlist.len(), generator.template().len());
            for (song, slot) in playlist.songs.iter().zip(generator.template().slots()) {
                assert_eq!(song.intensity, *slot);
            }
        }
    }

    #[test]
    fn test_new_songs_come_before_older_songs_of_same_intensity() {
        let generator = PlaylistGenerator::new(SessionTemplate::default());
        let catalog = create_full_catalog();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let playlist = generator.generate_playlist(&catalog, &mut rng).unwrap();

            for intensity in Intensity::ALL {
                let ages: Vec<_> = playlist
                    .songs
                    .iter()
                    .filter(|s| s.intensity == intensity)
                    .map(|s| s.age)
                    .collect();
                // the single new song per intensity is always handed out first
                assert_eq!(ages.first(), Some(&AgeClass::New));
                assert!(ages[1..].iter().all(|a| *a != AgeClass::New));
            }
        }
    }

    #[test]
    fn test_no_duplicate_titles() {
        let generator = PlaylistGenerator::new(SessionTemplate::default());
        let catalog = create_full_catalog();
        let mut rng = StdRng::seed_from_u64(11);

        let playlist = generator.generate_playlist(&catalog, &mut rng).unwrap();
        let mut titles: Vec<_> = playlist.titles().collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), playlist.len());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = PlaylistGenerator::new(SessionTemplate::default());
        let catalog = create_full_catalog();

        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generator.generate_playlist(&catalog, &mut rng).unwrap().songs
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_pick_songs_matches_tally() {
        let generator = PlaylistGenerator::new(SessionTemplate::default());
        let catalog = create_full_catalog();
        let mut rng = StdRng::seed_from_u64(1);

        let picks = generator.pick_songs(&catalog, &mut rng);
        for (intensity, count) in generator.template().tally() {
            assert_eq!(picks[&intensity].len(), count);
        }
    }

    #[test]
    fn test_exhausted_bucket_is_reported() {
        let generator = PlaylistGenerator::new(low_template(5));
        let catalog = example_catalog();
        let mut rng = StdRng::seed_from_u64(0);

        let err = generator.generate_playlist(&catalog, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            PlaylistError::ExhaustedBucket {
                intensity: Intensity::Low,
                slot: 5
            }
        ));
    }

    #[test]
    fn test_missing_intensity_fails_on_first_slot() {
        let template = SessionTemplate::new("Hyper Only", vec![Intensity::Hyper]).unwrap();
        let generator = PlaylistGenerator::new(template);
        let mut rng = StdRng::seed_from_u64(0);

        let err = generator
            .generate_playlist(&example_catalog(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, PlaylistError::ExhaustedBucket { slot: 1, .. }));
    }
}
