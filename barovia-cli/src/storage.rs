//! File-backed storage for terminal play
//!
//! One file per key under the save directory. A missing file reads as no
//! value; every io fault surfaces as `StorageError::Unavailable`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use barovia_core::{Storage, StorageError};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // the directory may not exist on first save
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::Unavailable(err.to_string()))?;
        fs::write(self.path_for(key), value)
            .map_err(|err| StorageError::Unavailable(err.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barovia_core::{Board, BufferClipboard, Hex, Session, SAVE_KEY};

    #[test]
    fn test_get_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set("slot", "payload").unwrap();
        assert_eq!(storage.get("slot").unwrap(), Some("payload".to_string()));
    }

    #[test]
    fn test_set_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));
        storage.set("slot", "payload").unwrap();
        assert_eq!(storage.get("slot").unwrap(), Some("payload".to_string()));
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert!(storage.remove("nothing").is_ok());
    }

    #[test]
    fn test_remove_drops_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set("slot", "payload").unwrap();
        storage.remove("slot").unwrap();
        assert_eq!(storage.get("slot").unwrap(), None);
    }

    #[test]
    fn test_moves_persist_across_sessions() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = FileStorage::new(dir.path());
            let (mut session, _) =
                Session::start(Board::default(), None, storage, BufferClipboard::default());
            session.try_move(Hex::new(6, 4));
            session.try_move(Hex::new(6, 3));
        }

        // a second session over the same directory sees the autosaved slot
        let storage = FileStorage::new(dir.path());
        let (mut session, effects) =
            Session::start(Board::default(), None, storage, BufferClipboard::default());
        assert!(effects
            .log
            .iter()
            .any(|line| line.contains("save is available")));

        session.load();
        assert_eq!(session.state().here, Hex::new(6, 3));
        assert_eq!(session.state().turn, 2);
    }

    #[test]
    fn test_save_file_holds_the_wire_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let (mut session, _) = Session::start(
            Board::default(),
            Some("mists"),
            storage,
            BufferClipboard::default(),
        );

        session.try_move(Hex::new(6, 4));

        let raw = fs::read_to_string(dir.path().join(SAVE_KEY)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["q"], 6);
        assert_eq!(json["r"], 4);
        assert_eq!(json["hp"], 10);
        assert_eq!(json["turn"], 1);
        assert_eq!(json["seed"], "mists");
    }

    #[test]
    fn test_new_game_deletes_the_save_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let (mut session, _) =
            Session::start(Board::default(), None, storage, BufferClipboard::default());

        session.try_move(Hex::new(6, 4));
        assert!(dir.path().join(SAVE_KEY).exists());

        session.new_game();
        assert!(!dir.path().join(SAVE_KEY).exists());
    }

    #[test]
    fn test_corrupt_save_file_is_rejected_intact() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SAVE_KEY), "not json").unwrap();

        let storage = FileStorage::new(dir.path());
        let (mut session, _) =
            Session::start(Board::default(), None, storage, BufferClipboard::default());
        let before = session.state().clone();

        let effects = session.load();
        assert_eq!(effects.log, vec!["Save is corrupted.".to_string()]);
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_export_import_between_directories() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        let exported = {
            let storage = FileStorage::new(first.path());
            let (mut session, _) =
                Session::start(Board::default(), None, storage, BufferClipboard::default());
            session.try_move(Hex::new(5, 5));
            session.export_text();
            session.clipboard().last.clone().unwrap()
        };

        let storage = FileStorage::new(second.path());
        let (mut session, _) =
            Session::start(Board::default(), None, storage, BufferClipboard::default());
        session.import_text(&exported);

        assert_eq!(session.state().here, Hex::new(5, 5));
        assert_eq!(session.state().turn, 1);
        // import autosaves into the new directory
        assert!(second.path().join(SAVE_KEY).exists());
    }
}
