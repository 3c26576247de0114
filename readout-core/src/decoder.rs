//! Stateful frame decoder.
//!
//! This module slices the raw word stream of one acquisition into per-trigger
//! blocks, under either fixed-size or zero-suppressed framing, applying the
//! board's word transform to channel data as each word is buffered.

use crate::board::{BoardDescription, BoardError};
use crate::parser::{self, WordTransform};
use crate::types::{EventType, RawEventBlock, ReadoutLayout};
use byteorder::{ByteOrder, LittleEndian};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors that can occur during frame decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "misaligned data at word {offset}: chunk declares {declared} words, {remaining} remain"
    )]
    MisalignedData {
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    #[error("invalid readout layout: {0}")]
    InvalidLayout(String),

    #[error("raw data length {0} bytes is not a whole number of 32-bit words")]
    TrailingBytes(usize),

    #[error("invalid board description: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Result of one decode pass.
///
/// A misaligned chunk stops the pass; blocks emitted before it stay valid and
/// are returned alongside the error.
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    /// Blocks in trigger order
    pub blocks: Vec<RawEventBlock>,
    /// Terminal error, if the pass stopped early
    pub error: Option<DecodeError>,
}

impl DecodeOutcome {
    /// Returns true if the pass ran to completion.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a plain result, dropping partial blocks on error.
    pub fn into_result(self) -> Result<Vec<RawEventBlock>, DecodeError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.blocks),
        }
    }
}

/// Stateful frame decoder.
///
/// Holds the buffer of the block being filled. One decoder serves one pass at
/// a time; each call to [`decode`](Self::decode) starts from a clean state.
#[derive(Debug)]
pub struct FrameDecoder {
    layout: ReadoutLayout,
    event_type: EventType,
    transform: WordTransform,
    // Fixed-size framing only
    event_size_words: usize,

    buffer: Vec<u32>,
}

impl FrameDecoder {
    /// Creates a decoder for events carrying `chips_per_event` chip regions.
    pub fn new(
        layout: ReadoutLayout,
        event_type: EventType,
        transform: WordTransform,
        chips_per_event: usize,
    ) -> Result<Self, DecodeError> {
        if layout.channel_words == 0 {
            return Err(DecodeError::InvalidLayout(
                "channel_words must be at least 1".to_string(),
            ));
        }
        let event_size_words = layout.event_size_words(chips_per_event);
        if event_type == EventType::Fixed && chips_per_event == 0 {
            return Err(DecodeError::InvalidLayout(
                "fixed-size framing needs at least one chip per event".to_string(),
            ));
        }

        Ok(Self {
            layout,
            event_type,
            transform,
            event_size_words,
            buffer: Vec::with_capacity(event_size_words),
        })
    }

    /// Creates a decoder from a board description, validating it first.
    pub fn from_board(board: &BoardDescription) -> Result<Self, DecodeError> {
        board.validate()?;
        Self::new(
            board.layout,
            board.event_type,
            board.transform(),
            board.chip_count(),
        )
    }

    /// Words per event under fixed-size framing.
    pub fn event_size_words(&self) -> usize {
        self.event_size_words
    }

    /// Framing discipline used by this decoder.
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Clears pass-local state.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Decodes the words of one acquisition into at most `trigger_count` blocks.
    pub fn decode(&mut self, words: &[u32], trigger_count: usize) -> DecodeOutcome {
        self.reset();
        if trigger_count == 0 || words.is_empty() {
            return DecodeOutcome::default();
        }

        match self.event_type {
            EventType::Fixed => self.decode_fixed(words, trigger_count),
            EventType::ZeroSuppressed => self.decode_zero_suppressed(words, trigger_count),
        }
    }

    /// Fixed-size framing: every `event_size_words` words form one block.
    fn decode_fixed(&mut self, words: &[u32], trigger_count: usize) -> DecodeOutcome {
        let mut outcome = DecodeOutcome::default();

        let expected = trigger_count.saturating_mul(self.event_size_words);
        if words.len() != expected {
            warn!(
                words = words.len(),
                expected,
                event_size = self.event_size_words,
                "stream length does not match trigger count"
            );
        }

        let region_start = self.layout.header_words;
        let mut consumed = 0;
        for &word in words {
            consumed += 1;
            // Offset inside the event being filled
            let offset = self.buffer.len();
            let word = match self.layout.role(offset, region_start) {
                Some(role) => self.transform.apply(word, role),
                None => word,
            };
            self.buffer.push(word);

            if self.buffer.len() == self.event_size_words {
                self.emit(&mut outcome);
                if outcome.blocks.len() >= trigger_count {
                    break;
                }
            }
        }

        let residual = self.buffer.len() + (words.len() - consumed);
        if residual > 0 {
            debug!(residual, "discarding words past the last full event");
        }
        self.buffer.clear();
        outcome
    }

    /// Zero-suppressed framing: each chunk starts with its body size.
    fn decode_zero_suppressed(&mut self, words: &[u32], trigger_count: usize) -> DecodeOutcome {
        let mut outcome = DecodeOutcome::default();
        let mut cursor = 0;

        while cursor < words.len() && outcome.blocks.len() < trigger_count {
            let declared = parser::chunk_size(words[cursor]);
            let remaining = words.len() - cursor - 1;
            if declared > remaining {
                error!(
                    offset = cursor,
                    declared,
                    remaining,
                    decoded = outcome.blocks.len(),
                    "misaligned data, stopping decode pass"
                );
                outcome.error = Some(DecodeError::MisalignedData {
                    offset: cursor,
                    declared,
                    remaining,
                });
                self.buffer.clear();
                return outcome;
            }
            cursor += 1;

            for (offset, &word) in words[cursor..cursor + declared].iter().enumerate() {
                let word = match self.layout.role(offset, 0) {
                    Some(role) => self.transform.apply(word, role),
                    None => word,
                };
                self.buffer.push(word);
            }
            cursor += declared;
            self.emit(&mut outcome);
        }

        if cursor < words.len() {
            debug!(
                residual = words.len() - cursor,
                "discarding words past the last expected trigger"
            );
        }
        outcome
    }

    fn emit(&mut self, outcome: &mut DecodeOutcome) {
        let trigger = outcome.blocks.len();
        let words = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.event_size_words));
        debug!(trigger, words = words.len(), "emitting event block");
        outcome.blocks.push(RawEventBlock::new(trigger, words));
    }

    /// Decodes a file of little-endian 32-bit words.
    pub fn decode_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        trigger_count: usize,
    ) -> Result<DecodeOutcome, DecodeError> {
        let words = read_words(path)?;
        Ok(self.decode(&words, trigger_count))
    }
}

/// Reads a file of little-endian 32-bit words.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, DecodeError> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() % 4 != 0 {
        return Err(DecodeError::TrailingBytes(bytes.len()));
    }
    let mut words = vec![0u32; bytes.len() / 4];
    LittleEndian::read_u32_into(&bytes, &mut words);
    Ok(words)
}
