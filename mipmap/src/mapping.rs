use crate::Density;
use serde::{Deserialize, Serialize};

/// One `size -> density` row of a [`SizeMapping`].
///
/// Parses from `SIZE=DENSITY`, e.g. `196=xxxhdpi`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct MappingEntry {
    pub size: u32,
    pub density: Density,
}

impl std::str::FromStr for MappingEntry {
    type Err = anyhow::Error;

    fn from_str(entry: &str) -> anyhow::Result<Self> {
        let (size, density) = entry
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected SIZE=DENSITY, got {}", entry))?;
        Ok(Self {
            size: size.trim().parse()?,
            density: density.trim().parse()?,
        })
    }
}

/// Ordered table from a source size to the density folder it belongs in.
///
/// Several sizes may route to the same density. Order matters to the
/// substring strategies and to the order the generator writes in.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "Vec<MappingEntry>", into = "Vec<MappingEntry>")]
pub struct SizeMapping {
    entries: Vec<(u32, Density)>,
}

impl SizeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard launcher sizes, one per density.
    pub fn canonical() -> Self {
        Density::ALL.iter().map(|d| (d.size(), *d)).collect()
    }

    /// The table of the substring-era scripts, where xxxhdpi icons were
    /// named `196`.
    pub fn legacy() -> Self {
        [
            (48, Density::Mdpi),
            (72, Density::Hdpi),
            (96, Density::Xhdpi),
            (144, Density::Xxhdpi),
            (196, Density::Xxxhdpi),
        ]
        .into_iter()
        .collect()
    }

    /// [`Self::legacy`] followed by the canonical `192`.
    pub fn lenient() -> Self {
        let mut mapping = Self::legacy();
        mapping.insert(192, Density::Xxxhdpi);
        mapping
    }

    /// Binds `size` to `density`. An existing key keeps its position.
    pub fn insert(&mut self, size: u32, density: Density) {
        match self.entries.iter_mut().find(|(key, _)| *key == size) {
            Some(entry) => entry.1 = density,
            None => self.entries.push((size, density)),
        }
    }

    pub fn get(&self, size: u32) -> Option<Density> {
        self.entries
            .iter()
            .find(|(key, _)| *key == size)
            .map(|(_, density)| *density)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Density)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, Density)> for SizeMapping {
    fn from_iter<I: IntoIterator<Item = (u32, Density)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (size, density) in iter {
            mapping.insert(size, density);
        }
        mapping
    }
}

impl FromIterator<MappingEntry> for SizeMapping {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        iter.into_iter().map(|e| (e.size, e.density)).collect()
    }
}

impl From<Vec<MappingEntry>> for SizeMapping {
    fn from(entries: Vec<MappingEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<SizeMapping> for Vec<MappingEntry> {
    fn from(mapping: SizeMapping) -> Self {
        mapping
            .iter()
            .map(|(size, density)| MappingEntry { size, density })
            .collect()
    }
}
