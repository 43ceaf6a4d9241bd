use std::collections::HashSet;

use thiserror::Error;

use crate::config::CatalogSettings;

/// A single playable song record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration_secs: u32,
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("the catalog must contain at least one track")]
    Empty,
    #[error("duplicate track id {0:?}")]
    DuplicateId(String),
    #[error("track {0:?} has a zero duration")]
    ZeroDuration(String),
}

/// An ordered, non-empty list of tracks with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Validate `tracks` and build a catalog from them.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(tracks.len());
        for t in &tracks {
            if !seen.insert(t.id.as_str()) {
                return Err(CatalogError::DuplicateId(t.id.clone()));
            }
            if t.duration_secs == 0 {
                return Err(CatalogError::ZeroDuration(t.id.clone()));
            }
        }

        Ok(Self { tracks })
    }

    /// Build the catalog from settings; an empty track list selects the sample.
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        if settings.tracks.is_empty() {
            return Ok(Self::sample());
        }

        let tracks = settings
            .tracks
            .iter()
            .map(|t| Track {
                id: t.id.trim().to_string(),
                title: t.title.clone(),
                artist: t.artist.clone(),
                duration_secs: t.duration_secs,
                cover_url: t
                    .cover_url
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            })
            .collect();
        Self::new(tracks)
    }

    pub(super) fn from_validated(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false: a catalog holds at least one track.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Index of the track with `id`, by linear scan.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Track> {
        self.position(id).map(|i| &self.tracks[i])
    }
}
