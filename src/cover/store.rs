use std::collections::HashMap;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::CoverSettings;

use super::fetch::{ART_COLS, ART_ROWS, ArtPixels, CoverError, spawn_cover_fetch};

/// Load state of a single cover URL.
#[derive(Debug)]
pub enum CoverSlot {
    Loading,
    Ready(ArtPixels),
    Failed,
}

type Pending = (String, Receiver<Result<ArtPixels, CoverError>>);

/// Per-run cache of cover downloads, keyed by URL.
pub struct CoverStore {
    enabled: bool,
    timeout: Duration,
    slots: HashMap<String, CoverSlot>,
    pending: Vec<Pending>,
}

impl CoverStore {
    pub fn new(settings: &CoverSettings) -> Self {
        Self {
            enabled: settings.enabled,
            timeout: Duration::from_millis(settings.timeout_ms),
            slots: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Start fetching `url` unless it is already known. No-op when disabled.
    pub fn request(&mut self, url: &str) {
        if !self.enabled || self.slots.contains_key(url) {
            return;
        }
        debug!(url, "fetching cover");
        let rx = spawn_cover_fetch(url.to_string(), self.timeout, ART_COLS, ART_ROWS);
        self.track(url, rx);
    }

    pub(super) fn track(&mut self, url: &str, rx: Receiver<Result<ArtPixels, CoverError>>) {
        self.slots.insert(url.to_string(), CoverSlot::Loading);
        self.pending.push((url.to_string(), rx));
    }

    /// Collect finished downloads. Returns true when any slot changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        let slots = &mut self.slots;

        self.pending.retain(|(url, rx)| {
            let slot = match rx.try_recv() {
                Err(TryRecvError::Empty) => return true,
                Ok(Ok(pixels)) => CoverSlot::Ready(pixels),
                Ok(Err(e)) => {
                    warn!(url = %url, error = %e, "cover unavailable, using placeholder");
                    CoverSlot::Failed
                }
                Err(TryRecvError::Disconnected) => {
                    warn!(url = %url, "cover fetch ended without a result");
                    CoverSlot::Failed
                }
            };
            slots.insert(url.clone(), slot);
            changed = true;
            false
        });

        changed
    }

    pub fn get(&self, url: &str) -> Option<&CoverSlot> {
        self.slots.get(url)
    }

    /// Pixels for `url` if they finished loading.
    pub fn pixels(&self, url: &str) -> Option<&ArtPixels> {
        match self.slots.get(url) {
            Some(CoverSlot::Ready(pixels)) => Some(pixels),
            _ => None,
        }
    }
}
