//! The single save slot.
//!
//! A save holds the current scene id and the full player character. Writing
//! always overwrites the slot; reading an empty slot is not an error.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ev_combat::Character;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// What a save slot holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Id of the scene the player was reading.
    pub scene: String,
    /// The player character, including current hp/mp and cooldowns.
    pub player: Character,
}

impl Snapshot {
    /// Capture a scene id and player.
    pub fn new(scene: impl Into<String>, player: Character) -> Self {
        Self {
            scene: scene.into(),
            player,
        }
    }

    /// Clamp values a hand-edited save could have pushed out of range.
    pub fn normalized(mut self) -> Self {
        self.player.normalize();
        self
    }
}

/// Storage for the save slot.
pub trait SaveStore: fmt::Debug {
    /// Write the slot, replacing whatever it held.
    fn save(&mut self, snapshot: &Snapshot) -> GameResult<()>;

    /// Read the slot. `Ok(None)` when nothing has been saved.
    fn load(&self) -> GameResult<Option<Snapshot>>;

    /// Whether the slot currently holds a save.
    fn has_save(&self) -> bool;
}

/// Keeps the slot as a JSON document at `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store for `slot` inside `dir`. The directory is created on first save.
    ///
    /// The slot is a bare file stem: names with path separators or `..` are
    /// rejected so the file always lands inside `dir`.
    pub fn new(dir: impl AsRef<Path>, slot: &str) -> GameResult<Self> {
        check_slot(slot)?;
        Ok(Self {
            path: dir.as_ref().join(format!("{slot}.json")),
        })
    }

    /// Full path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn check_slot(slot: &str) -> GameResult<()> {
    let escapes = slot.is_empty()
        || slot.contains("..")
        || slot.contains(['/', '\\'])
        || Path::new(slot).is_absolute();
    if escapes {
        return Err(GameError::Save(format!("invalid save slot '{slot}'")));
    }
    Ok(())
}

impl SaveStore for JsonFileStore {
    fn save(&mut self, snapshot: &Snapshot) -> GameResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)?;
        tracing::info!(path = %self.path.display(), scene = %snapshot.scene, "game saved");
        Ok(())
    }

    fn load(&self) -> GameResult<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&json)?;
        tracing::info!(path = %self.path.display(), scene = %snapshot.scene, "game loaded");
        Ok(Some(snapshot.normalized()))
    }

    fn has_save(&self) -> bool {
        self.path.is_file()
    }
}

/// Keeps the slot in memory as serialized JSON, so a session without a save
/// directory still exercises the same encoding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON held by the slot, if any.
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SaveStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> GameResult<()> {
        self.slot = Some(serde_json::to_string(snapshot)?);
        tracing::info!(scene = %snapshot.scene, "game saved in memory");
        Ok(())
    }

    fn load(&self) -> GameResult<Option<Snapshot>> {
        let Some(json) = &self.slot else {
            return Ok(None);
        };
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Some(snapshot.normalized()))
    }

    fn has_save(&self) -> bool {
        self.slot.is_some()
    }
}
