//! Board description and lane resolution.
//!
//! A board description lists the hybrids read out by one back-end board and,
//! per hybrid, which chip listens on which physical lane. It is stored as
//! TOML and loaded once per run.

use crate::parser::WordTransform;
use crate::tables::ChipFamily;
use crate::types::{BoardType, ChipIdentity, EventType, ReadoutLayout};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Highest lane number the frame header can carry.
pub const MAX_LANE: u8 = 0xF;

/// Errors that can occur while loading a board description.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse board description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize board description: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid board description: {0}")]
    Invalid(String),
}

/// One chip on a hybrid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipDescription {
    /// Logical chip id
    pub id: u8,
    /// Physical lane the chip's data arrives on
    pub lane: u8,
}

/// One hybrid (module) and its chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridDescription {
    pub id: u8,
    #[serde(default)]
    pub chips: Vec<ChipDescription>,
}

/// Static description of one back-end board's readout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDescription {
    pub board_type: BoardType,
    #[serde(default)]
    pub event_type: EventType,
    /// Register map of the chips, if the board carries pixel chips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip_family: Option<ChipFamily>,
    pub layout: ReadoutLayout,
    #[serde(default)]
    pub hybrids: Vec<HybridDescription>,
}

impl BoardDescription {
    /// Parses and validates a TOML board description.
    pub fn from_toml_str(s: &str) -> Result<Self, BoardError> {
        let board: BoardDescription = toml::from_str(s)?;
        board.validate()?;
        Ok(board)
    }

    /// Loads and validates a board description file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BoardError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String, BoardError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the description to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BoardError> {
        fs::write(path.as_ref(), self.to_toml_string()?)?;
        Ok(())
    }

    /// Checks the layout and the hybrid/lane assignments.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.layout.channel_words == 0 {
            return Err(BoardError::Invalid(
                "layout.channel_words must be at least 1".to_string(),
            ));
        }
        if self.layout.frame_header_words == 0 {
            return Err(BoardError::Invalid(
                "layout.frame_header_words must be at least 1".to_string(),
            ));
        }

        let mut hybrid_ids = HashSet::new();
        for hybrid in &self.hybrids {
            if !hybrid_ids.insert(hybrid.id) {
                return Err(BoardError::Invalid(format!(
                    "hybrid {} listed twice",
                    hybrid.id
                )));
            }

            let mut lanes = HashSet::new();
            for chip in &hybrid.chips {
                if chip.lane > MAX_LANE {
                    return Err(BoardError::Invalid(format!(
                        "hybrid {} chip {}: lane {} exceeds {}",
                        hybrid.id, chip.id, chip.lane, MAX_LANE
                    )));
                }
                if !lanes.insert(chip.lane) {
                    return Err(BoardError::Invalid(format!(
                        "hybrid {}: lane {} assigned to more than one chip",
                        hybrid.id, chip.lane
                    )));
                }
            }
        }

        if self.event_type == EventType::Fixed && self.chip_count() == 0 {
            return Err(BoardError::Invalid(
                "fixed-size framing needs at least one chip".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of chips across all hybrids.
    pub fn chip_count(&self) -> usize {
        self.hybrids.iter().map(|h| h.chips.len()).sum()
    }

    /// Words per event under fixed-size framing.
    pub fn event_size_words(&self) -> usize {
        self.layout.event_size_words(self.chip_count())
    }

    /// Word transform of this board's firmware.
    pub fn transform(&self) -> WordTransform {
        WordTransform::for_board(self.board_type)
    }

    /// Hybrid with the given id.
    pub fn hybrid(&self, id: u8) -> Option<&HybridDescription> {
        self.hybrids.iter().find(|h| h.id == id)
    }

    /// Lane resolver over this board's hybrids.
    pub fn resolver(&self) -> LaneResolver<'_> {
        LaneResolver::new(&self.hybrids)
    }
}

/// Maps a (hybrid, lane) pair to the logical chip listening on it.
#[derive(Debug, Clone, Copy)]
pub struct LaneResolver<'a> {
    hybrids: &'a [HybridDescription],
}

impl<'a> LaneResolver<'a> {
    pub fn new(hybrids: &'a [HybridDescription]) -> Self {
        Self { hybrids }
    }

    /// First chip on `hybrid_id` whose lane matches, or `Unresolved`.
    pub fn resolve(&self, hybrid_id: u8, lane: u8) -> ChipIdentity {
        self.hybrids
            .iter()
            .filter(|h| h.id == hybrid_id)
            .flat_map(|h| h.chips.iter())
            .find(|c| c.lane == lane)
            .map_or(ChipIdentity::Unresolved, |c| ChipIdentity::Resolved(c.id))
    }
}
