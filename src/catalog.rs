use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

use crate::error::{PlaylistError, Result};
use crate::models::{AgeClass, Intensity, SongRecord, non_empty};

/// A song counts as new for this many days after its debut
pub const NEW_SONG_DAYS: i64 = 13;

/// Songs bucketed by age class, then by intensity.
/// Every intensity exists under every age class, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    buckets: BTreeMap<AgeClass, BTreeMap<Intensity, Vec<String>>>,
}

impl Default for Catalog {
    fn default() -> Self {
        let buckets = AgeClass::ALL
            .into_iter()
            .map(|age| {
                let by_intensity = Intensity::ALL
                    .into_iter()
                    .map(|intensity| (intensity, Vec::new()))
                    .collect();
                (age, by_intensity)
            })
            .collect();
        Self { buckets }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles for one (age, intensity) pair, in file order
    pub fn bucket(&self, age: AgeClass, intensity: Intensity) -> &[String] {
        self.buckets
            .get(&age)
            .and_then(|m| m.get(&intensity))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn push(&mut self, age: AgeClass, intensity: Intensity, title: String) {
        self.buckets
            .entry(age)
            .or_default()
            .entry(intensity)
            .or_default()
            .push(title);
    }

    pub fn count_for_age(&self, age: AgeClass) -> usize {
        self.buckets
            .get(&age)
            .map(|m| m.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        AgeClass::ALL.into_iter().map(|a| self.count_for_age(a)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat view in age order, then intensity order, then file order
    pub fn entries(&self) -> impl Iterator<Item = (AgeClass, Intensity, &str)> + '_ {
        self.buckets.iter().flat_map(|(&age, by_intensity)| {
            by_intensity.iter().flat_map(move |(&intensity, titles)| {
                titles.iter().map(move |t| (age, intensity, t.as_str()))
            })
        })
    }
}

/// Options that change which rows make it into the catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Skip rows whose type column contains this text (case-insensitive)
    pub excluded_type: Option<String>,
}

impl CatalogOptions {
    /// Options for a ZiCardio class, which leaves out b-girl songs
    pub fn zicardio() -> Self {
        Self {
            excluded_type: Some("bgirl".to_string()),
        }
    }
}

/// Parse a sheet date in `M/D/YYYY` form (zero padding optional)
pub fn parse_sheet_date(text: &str) -> Result<NaiveDate> {
    let invalid = || PlaylistError::DateParse {
        text: text.to_string(),
    };

    let parts: Vec<&str> = text.trim().split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    let year: i32 = year.trim().parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Builds a [`Catalog`] from raw sheet rows relative to a fixed "today"
pub struct CatalogBuilder {
    options: CatalogOptions,
    today: NaiveDate,
}

impl CatalogBuilder {
    pub fn new(options: CatalogOptions, today: NaiveDate) -> Self {
        Self { options, today }
    }

    /// Classify a song by its debut and recency dates.
    /// A missing debut date means the song is not new.
    pub fn classify(&self, debut: Option<NaiveDate>, recent_until: NaiveDate) -> AgeClass {
        let is_new = debut.is_some_and(|d| d + Duration::days(NEW_SONG_DAYS) > self.today);
        if is_new {
            AgeClass::New
        } else if recent_until > self.today {
            AgeClass::Recent
        } else {
            AgeClass::Old
        }
    }

    /// Build the catalog. Any malformed row aborts the whole build.
    pub fn build<I>(&self, records: I) -> Result<Catalog>
    where
        I: IntoIterator<Item = SongRecord>,
    {
        let mut catalog = Catalog::new();
        let mut skipped = 0usize;

        for (index, record) in records.into_iter().enumerate() {
            let row = index + 1;

            if let Some(excluded) = &self.options.excluded_type {
                if record.type_matches(excluded) {
                    debug!("Row {row}: skipping excluded type {:?}", record.song_type);
                    skipped += 1;
                    continue;
                }
            }

            let Some(label) = record.ready_intensity() else {
                debug!("Row {row}: skipping song that isn't ready ({:?})", record.title);
                skipped += 1;
                continue;
            };

            let intensity: Intensity = label.parse().map_err(|_| PlaylistError::InvalidIntensity {
                label: label.to_string(),
                row,
            })?;

            let debut = non_empty(&record.debut).map(parse_sheet_date).transpose()?;
            let recent_until = non_empty(&record.recent_until)
                .ok_or(PlaylistError::MissingField {
                    field: "6 month",
                    row,
                })
                .and_then(parse_sheet_date)?;
            let title = non_empty(&record.title)
                .ok_or(PlaylistError::MissingField { field: "Song", row })?
                .to_string();

            let age = self.classify(debut, recent_until);
            catalog.push(age, intensity, title);
        }

        info!(
            "Catalog built: {} new, {} recent, {} old ({} rows skipped)",
            catalog.count_for_age(AgeClass::New),
            catalog.count_for_age(AgeClass::Recent),
            catalog.count_for_age(AgeClass::Old),
            skipped
        );

        Ok(catalog)
    }
}
