use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{PlaylistError, Result};
use crate::models::Intensity;

use Intensity::{High, Hyper, Low, Mid, WarmUp};

/// A regular block: low, mid, high
pub const REGULAR_SET: [Intensity; 3] = [Low, Mid, High];
/// A hyper block swaps the high song for a hyper one
pub const HYPER_SET: [Intensity; 3] = [Low, Mid, Hyper];

/// The ordered intensity slots making up one class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTemplate {
    #[serde(default = "default_name")]
    pub name: String,
    slots: Vec<Intensity>,
}

/// Accepted JSON layouts for a template file
#[derive(Deserialize)]
#[serde(untagged)]
enum TemplateFile {
    Slots(Vec<Intensity>),
    Named(SessionTemplate),
}

fn default_name() -> String {
    "Custom".to_string()
}

impl Default for SessionTemplate {
    /// Warm-up, two regular blocks, a hyper block, two more regular blocks
    fn default() -> Self {
        let mut slots = vec![WarmUp];
        slots.extend(REGULAR_SET);
        slots.extend(REGULAR_SET);
        slots.extend(HYPER_SET);
        slots.extend(REGULAR_SET);
        slots.extend(REGULAR_SET);
        Self {
            name: "ZiCardio".to_string(),
            slots,
        }
    }
}

impl SessionTemplate {
    pub fn new(name: impl Into<String>, slots: Vec<Intensity>) -> Result<Self> {
        if slots.is_empty() {
            return Err(PlaylistError::Template(
                "a session needs at least one slot".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            slots,
        })
    }

    /// Parse a template from JSON: either a bare array of intensities
    /// or an object with `name` and `slots`
    pub fn from_json(content: &str) -> Result<Self> {
        match serde_json::from_str::<TemplateFile>(content)? {
            TemplateFile::Slots(slots) => Self::new(default_name(), slots),
            TemplateFile::Named(template) => Self::new(template.name, template.slots),
        }
    }

    /// Load a template from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PlaylistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn slots(&self) -> &[Intensity] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// How many songs of each intensity the session needs
    pub fn tally(&self) -> BTreeMap<Intensity, usize> {
        let mut counts = BTreeMap::new();
        for &intensity in &self.slots {
            *counts.entry(intensity).or_insert(0) += 1;
        }
        counts
    }
}
