//! Session controller
//!
//! Orchestrates new-game, movement, and save/load/export/import against the
//! state store. Rendering, persistence, and clipboard access stay behind
//! injected collaborator traits; each operation returns its side effects as
//! data (`Effects`) so any frontend can apply them.

use std::collections::HashMap;

use crate::board::{Board, Hex};
use crate::error::{ClipboardError, StorageError};
use crate::movement::{attempt_move, MoveOutcome};
use crate::state::{PlayerState, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

/// Storage key for the persistent save slot
pub const SAVE_KEY: &str = "barovia.save";

/// Key-value persistence collaborator (browser storage, files, memory)
///
/// Every method may fail (storage disabled, io fault); failures are reported,
/// never thrown past the session.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Outbound text collaborator; read-back is not required
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory storage for the server session and tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Clipboard that retains the last written text
#[derive(Clone, Debug, Default)]
pub struct BufferClipboard {
    pub last: Option<String>,
}

impl Clipboard for BufferClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.last = Some(text.to_string());
        Ok(())
    }
}

/// Cells the renderer should highlight after an operation
///
/// Exactly the current cell and its in-bounds neighbors; everything else is
/// unhighlighted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderUpdate {
    pub here: Hex,
    pub adjacent: Vec<Hex>,
}

/// Side effects of one session operation, described as data
#[derive(Clone, Debug, Default)]
pub struct Effects {
    /// Clear the event log before appending (new game only)
    pub clear_log: bool,
    /// Human-readable event lines, in order
    pub log: Vec<String>,
    /// Present whenever the highlight set may have moved
    pub render: Option<RenderUpdate>,
}

/// Orchestrates game operations and describes their side effects
///
/// Owns the player state exclusively; no operation overlaps another, and
/// every failure path leaves the state exactly as it was.
pub struct Session<S: Storage, C: Clipboard> {
    board: Board,
    state: PlayerState,
    storage: S,
    clipboard: C,
}

impl<S: Storage, C: Clipboard> Session<S, C> {
    /// Start a session: fresh state plus the opening log lines
    ///
    /// A missing seed label falls back to `"barovia"`. If storage already
    /// holds a save, a notice is appended so the player knows to load it.
    pub fn start(board: Board, seed: Option<&str>, storage: S, clipboard: C) -> (Self, Effects) {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let session = Self {
            board,
            state: PlayerState::reset(&board, seed),
            storage,
            clipboard,
        };
        let mut effects = session.opening_effects();
        match session.storage.get(SAVE_KEY) {
            Ok(Some(_)) => effects
                .log
                .push("A save is available. Load to restore.".to_string()),
            Ok(None) => {}
            Err(err) => tracing::debug!("startup save probe failed: {err}"),
        }
        (session, effects)
    }

    /// Reset to a fresh game and drop any stored save
    ///
    /// The seed label survives the reset; only a new session changes it.
    pub fn new_game(&mut self) -> Effects {
        self.state = PlayerState::reset(&self.board, &self.state.seed);
        if let Err(err) = self.storage.remove(SAVE_KEY) {
            tracing::debug!("failed to drop stored save: {err}");
        }
        self.opening_effects()
    }

    /// Request a single-step move to `target`
    pub fn try_move(&mut self, target: Hex) -> Effects {
        let outcome = attempt_move(self.state.here, target, self.state.turn, &self.board);
        let mut effects = Effects::default();
        match outcome {
            MoveOutcome::Accepted { to, turn } => {
                self.state.here = to;
                self.state.turn = turn;
                effects.render = Some(self.render_update());
                effects.log.push(format!(
                    "Step {}: You move to ({}, {}). The pines whisper.",
                    turn, to.q, to.r
                ));
                self.autosave(&mut effects);
            }
            MoveOutcome::RejectedOutOfBounds => {
                effects
                    .log
                    .push("Beyond the board's edge lies only mist.".to_string());
            }
            MoveOutcome::RejectedSameTile => {
                effects.log.push("You are already standing there.".to_string());
            }
            MoveOutcome::RejectedNotAdjacent => {
                effects.log.push(
                    "The thicket bars your way. Too far to stride in one breath.".to_string(),
                );
            }
        }
        effects
    }

    /// Persist the current state to the save slot
    pub fn save(&mut self) -> Effects {
        let mut effects = Effects::default();
        match self.storage.set(SAVE_KEY, &self.state.to_json()) {
            Ok(()) => effects.log.push("Game saved.".to_string()),
            Err(err) => {
                tracing::debug!("save failed: {err}");
                effects
                    .log
                    .push("Save failed (storage unavailable).".to_string());
            }
        }
        effects
    }

    /// Restore state from the save slot
    pub fn load(&mut self) -> Effects {
        let mut effects = Effects::default();
        let raw = match self.storage.get(SAVE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!("load failed: {err}");
                effects
                    .log
                    .push("Load failed (storage unavailable).".to_string());
                return effects;
            }
        };
        let Some(raw) = raw else {
            effects.log.push("No save found.".to_string());
            return effects;
        };
        match PlayerState::from_json(&raw) {
            Ok(state) => {
                self.state = state;
                effects.render = Some(self.render_update());
                effects.log.push(format!(
                    "Loaded: ({}, {}), HP {}, Turn {}.",
                    self.state.here.q, self.state.here.r, self.state.hp, self.state.turn
                ));
            }
            Err(_) => effects.log.push("Save is corrupted.".to_string()),
        }
        effects
    }

    /// Serialize the state and hand it to the clipboard collaborator
    pub fn export_text(&mut self) -> Effects {
        let mut effects = Effects::default();
        let raw = self.state.to_json();
        match self.clipboard.write(&raw) {
            Ok(()) => effects.log.push("Save copied to clipboard.".to_string()),
            Err(err) => {
                tracing::debug!("export failed: {err}");
                effects.log.push("Clipboard unavailable.".to_string());
            }
        }
        effects
    }

    /// Restore state from pasted save text
    pub fn import_text(&mut self, raw: &str) -> Effects {
        let mut effects = Effects::default();
        match PlayerState::from_json(raw) {
            Ok(state) => {
                self.state = state;
                self.autosave(&mut effects);
                effects.render = Some(self.render_update());
                effects.log.push(format!(
                    "Imported: ({}, {}), HP {}, Turn {}.",
                    self.state.here.q, self.state.here.r, self.state.hp, self.state.turn
                ));
            }
            Err(_) => effects.log.push("Invalid save.".to_string()),
        }
        effects
    }

    /// Current player state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Highlight set for the current position
    pub fn render_update(&self) -> RenderUpdate {
        RenderUpdate {
            here: self.state.here,
            adjacent: self
                .state
                .here
                .neighbors()
                .into_iter()
                .filter(|n| self.board.contains(*n))
                .collect(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    fn opening_effects(&self) -> Effects {
        Effects {
            clear_log: true,
            log: vec![
                "You wake beneath sullen boughs. Barovia watches.".to_string(),
                "Choose a highlighted hex to move.".to_string(),
            ],
            render: Some(self.render_update()),
        }
    }

    /// Persist after a state change without a success log line
    fn autosave(&mut self, effects: &mut Effects) {
        if let Err(err) = self.storage.set(SAVE_KEY, &self.state.to_json()) {
            tracing::debug!("autosave failed: {err}");
            effects
                .log
                .push("Save failed (storage unavailable).".to_string());
        }
    }
}
