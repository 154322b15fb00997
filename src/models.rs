use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the song sheet, mapped by header name.
/// Every column is optional at this stage; the catalog builder decides
/// which absences are skips and which are errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongRecord {
    #[serde(rename = "Song", default)]
    pub title: Option<String>,
    #[serde(rename = "Intense", default)]
    pub intensity: Option<String>,
    #[serde(rename = "Debut", default)]
    pub debut: Option<String>,
    #[serde(rename = "6 month", default)]
    pub recent_until: Option<String>,
    #[serde(rename = "Type", default)]
    pub song_type: Option<String>,
}

impl SongRecord {
    /// Intensity label, or `None` when the song isn't ready to be played
    /// (blank cell or a label starting with `~`)
    pub fn ready_intensity(&self) -> Option<&str> {
        non_empty(&self.intensity).filter(|label| !label.starts_with('~'))
    }

    /// Check whether the type column contains `pattern`, ignoring case
    pub fn type_matches(&self, pattern: &str) -> bool {
        non_empty(&self.song_type)
            .is_some_and(|t| t.to_lowercase().contains(&pattern.to_lowercase()))
    }
}

/// Treat blank cells the same as missing ones
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Workout intensity tiers, ordered from warm-up to hyper
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Intensity {
    #[serde(rename = "0", alias = "warm_up")]
    WarmUp,
    #[serde(rename = "1", alias = "low")]
    Low,
    #[serde(rename = "2", alias = "mid")]
    Mid,
    #[serde(rename = "3", alias = "high")]
    High,
    #[serde(rename = "4", alias = "hyper")]
    Hyper,
}

impl Intensity {
    pub const ALL: [Intensity; 5] = [
        Intensity::WarmUp,
        Intensity::Low,
        Intensity::Mid,
        Intensity::High,
        Intensity::Hyper,
    ];

    /// Short code used in the song sheet
    pub fn key(self) -> &'static str {
        match self {
            Intensity::WarmUp => "0",
            Intensity::Low => "1",
            Intensity::Mid => "2",
            Intensity::High => "3",
            Intensity::Hyper => "4",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Intensity::WarmUp => "warm_up",
            Intensity::Low => "low",
            Intensity::Mid => "mid",
            Intensity::High => "high",
            Intensity::Hyper => "hyper",
        }
    }
}

impl FromStr for Intensity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Intensity::ALL
            .into_iter()
            .find(|i| i.key() == s)
            .ok_or(())
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// How fresh a song is relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeClass {
    New,
    Recent,
    Old,
}

impl AgeClass {
    pub const ALL: [AgeClass; 3] = [AgeClass::New, AgeClass::Recent, AgeClass::Old];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeClass::New => "new",
            AgeClass::Recent => "recent",
            AgeClass::Old => "old",
        }
    }
}

impl fmt::Display for AgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so `{:7}` width specifiers work in the catalog listing
        f.pad(self.as_str())
    }
}
