//! Learning track list, persisted as JSON.

use std::rc::Rc;

use log::{info, warn};

use crate::config::TRACKS_KEY;
use crate::error::AppResult;
use crate::models::{default_tracks, Track};
use crate::platform::{Interaction, KeyValueStore};

pub const NEW_TRACK_PROMPT: &str = "Nome da trilha:";
pub const EMPTY_LIST_MESSAGE: &str = "Nenhuma trilha criada ainda.";

pub struct TrackListController {
    store: Rc<dyn KeyValueStore>,
    tracks: Vec<Track>,
}

impl TrackListController {
    /// Deserialize persisted tracks; absent or malformed data yields the default seed
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        let tracks = match store.get(TRACKS_KEY) {
            None => default_tracks(),
            Some(raw) => match serde_json::from_str::<Vec<Track>>(&raw) {
                Ok(tracks) => tracks,
                Err(e) => {
                    warn!("[TRACKS] Discarding malformed persisted tracks: {}", e);
                    default_tracks()
                }
            },
        };
        Self { store, tracks }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Ask for a name and append it
    pub fn create(&mut self, interaction: &dyn Interaction) -> Option<&Track> {
        let answer = interaction.prompt(NEW_TRACK_PROMPT);
        self.create_named(answer.as_deref())
    }

    /// Append a track at 0%. Blank or cancelled input is a no-op.
    pub fn create_named(&mut self, name: Option<&str>) -> Option<&Track> {
        let name = name.map(str::trim).filter(|n| !n.is_empty())?;
        self.tracks.push(Track::new(name));
        info!("[TRACKS] Created track {:?} ({} total)", name, self.tracks.len());
        if let Err(e) = self.persist() {
            warn!("[TRACKS] Failed to persist tracks: {}", e);
        }
        self.tracks.last()
    }

    fn persist(&self) -> AppResult<()> {
        let json = serde_json::to_string(&self.tracks)?;
        self.store.set(TRACKS_KEY, &json)
    }
}
