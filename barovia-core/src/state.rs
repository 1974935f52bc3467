//! Player state and the JSON save record

use crate::board::{Board, Hex};
use crate::error::RecordError;
use serde::{Deserialize, Serialize};

/// Hit points granted on a fresh game
pub const FULL_HP: i32 = 10;

/// Session label used when none is supplied
pub const DEFAULT_SEED: &str = "barovia";

/// Mutable per-session player state
///
/// Owned exclusively by the session controller: position and turn change on
/// accepted moves, everything changes on reset or load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub here: Hex,
    pub hp: i32,
    pub turn: u32,
    pub seed: String,
}

impl PlayerState {
    /// Fresh state: full hit points, board center, turn zero
    pub fn reset(board: &Board, seed: &str) -> Self {
        Self {
            here: board.center(),
            hp: FULL_HP,
            turn: 0,
            seed: seed.to_string(),
        }
    }

    /// Project into the flat wire record
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            q: self.here.q,
            r: self.here.r,
            hp: self.hp,
            turn: self.turn,
            seed: self.seed.clone(),
        }
    }

    /// Serialize to the save wire format
    pub fn to_json(&self) -> String {
        // a flat struct of integers and one string cannot fail to encode
        serde_json::to_string(&self.to_record()).expect("save record encodes")
    }

    /// Parse and validate raw save text
    ///
    /// The whole record is rejected on any missing or mismatched field; no
    /// partial restore. Integer fields are type-checked only (`turn` must be
    /// non-negative, `hp` may be any integer) and extra keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, RecordError> {
        let record: SaveRecord = serde_json::from_str(raw).map_err(|err| {
            if err.classify() == serde_json::error::Category::Data {
                RecordError::InvalidRecord
            } else {
                RecordError::Malformed
            }
        })?;
        Ok(record.into_state())
    }
}

/// Flat snapshot written to storage and the clipboard
///
/// Wire format: a JSON object with exactly these five keys. There is no
/// version field; any format change is a breaking change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub q: i32,
    pub r: i32,
    pub hp: i32,
    pub turn: u32,
    pub seed: String,
}

impl SaveRecord {
    /// Rebuild a full player state from the snapshot
    pub fn into_state(self) -> PlayerState {
        PlayerState {
            here: Hex::new(self.q, self.r),
            hp: self.hp,
            turn: self.turn,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_defaults() {
        let state = PlayerState::reset(&Board::default(), DEFAULT_SEED);
        assert_eq!(state.here, Hex::new(5, 4));
        assert_eq!(state.hp, 10);
        assert_eq!(state.turn, 0);
        assert_eq!(state.seed, "barovia");
    }

    #[test]
    fn test_round_trip() {
        let state = PlayerState {
            here: Hex::new(3, 2),
            hp: 7,
            turn: 5,
            seed: "x".to_string(),
        };
        let restored = PlayerState::from_json(&state.to_json()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_valid_record() {
        let state =
            PlayerState::from_json(r#"{"q":3,"r":2,"hp":7,"turn":5,"seed":"x"}"#).unwrap();
        assert_eq!(state.here, Hex::new(3, 2));
        assert_eq!(state.hp, 7);
        assert_eq!(state.turn, 5);
        assert_eq!(state.seed, "x");
    }

    #[test]
    fn test_mismatched_type_rejected() {
        let err =
            PlayerState::from_json(r#"{"q":3,"r":2,"hp":"7","turn":5,"seed":"x"}"#).unwrap_err();
        assert_eq!(err, RecordError::InvalidRecord);
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = PlayerState::from_json(r#"{"q":3,"r":2,"hp":7,"turn":5}"#).unwrap_err();
        assert_eq!(err, RecordError::InvalidRecord);
    }

    #[test]
    fn test_negative_turn_rejected() {
        let err =
            PlayerState::from_json(r#"{"q":3,"r":2,"hp":7,"turn":-1,"seed":"x"}"#).unwrap_err();
        assert_eq!(err, RecordError::InvalidRecord);
    }

    #[test]
    fn test_negative_hp_accepted() {
        let state =
            PlayerState::from_json(r#"{"q":3,"r":2,"hp":-4,"turn":5,"seed":"x"}"#).unwrap();
        assert_eq!(state.hp, -4);
    }

    #[test]
    fn test_extra_key_tolerated() {
        let state =
            PlayerState::from_json(r#"{"q":3,"r":2,"hp":7,"turn":5,"seed":"x","note":"hi"}"#)
                .unwrap();
        assert_eq!(state.hp, 7);
    }

    #[test]
    fn test_malformed_json() {
        let err = PlayerState::from_json("not json").unwrap_err();
        assert_eq!(err, RecordError::Malformed);
    }
}
