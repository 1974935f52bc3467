//! Server state management
//!
//! One shared session over in-memory storage, plus the event log the frontend
//! polls. Route handlers apply an operation, fold its effects into the log,
//! and serve the resulting view.

use std::sync::RwLock;

use barovia_core::{Board, BufferClipboard, Effects, MemoryStorage, Session};

/// Server-wide shared state
pub struct ServerState {
    pub session: RwLock<Session<MemoryStorage, BufferClipboard>>,
    pub log: RwLock<Vec<String>>,
}

impl ServerState {
    pub fn new() -> Self {
        let (session, effects) = Session::start(
            Board::default(),
            None,
            MemoryStorage::default(),
            BufferClipboard::default(),
        );
        let state = Self {
            session: RwLock::new(session),
            log: RwLock::new(Vec::new()),
        };
        state.absorb(&effects);
        state
    }

    /// Fold one operation's effects into the retained log
    pub fn absorb(&self, effects: &Effects) {
        let mut log = self.log.write().unwrap();
        if effects.clear_log {
            log.clear();
        }
        log.extend(effects.log.iter().cloned());
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barovia_core::Hex;

    #[test]
    fn test_new_state_carries_opening_log() {
        let state = ServerState::new();
        let log = state.log.read().unwrap();
        assert_eq!(log.len(), 2);
        assert!(log[0].contains("You wake"));
    }

    #[test]
    fn test_absorb_appends_and_clears() {
        let state = ServerState::new();

        let effects = state.session.write().unwrap().try_move(Hex::new(6, 4));
        state.absorb(&effects);
        assert_eq!(state.log.read().unwrap().len(), 3);

        let effects = state.session.write().unwrap().new_game();
        state.absorb(&effects);
        let log = state.log.read().unwrap();
        assert_eq!(log.len(), 2);
        assert!(log[0].contains("You wake"));
    }
}
