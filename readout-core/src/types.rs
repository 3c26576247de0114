//! Core types for front-end readout data.
//!
//! This module defines the framing selectors, the readout layout that fixes
//! where channel data sits inside an event, and the per-trigger structures
//! produced by the decoder and the assembler.

use serde::{Deserialize, Serialize};

/// Back-end board flavour. Selects the per-word transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    /// D19C firmware: channel words are bit-reversed
    D19c,
    /// Strasbourg supervisor: channel words are byte-swapped
    Supervisor,
    /// FC7 firmware: words are already in natural order
    Fc7,
}

/// Framing discipline of the raw word stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Every trigger occupies the same number of words
    #[default]
    Fixed,
    /// Each chunk carries its own length in the low 16 bits of its first word
    ZeroSuppressed,
}

/// Role of a word inside one channel's data region.
///
/// Purely positional; computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelWord {
    /// Carries the pipeline address in bits [2,9]
    First,
    /// Plain hit data
    Interior,
    /// Carries the stub word in bits [20,31]
    Last,
}

impl ChannelWord {
    /// Role of the word at `index` within a channel region of `channel_words`
    /// words. A single-word region is treated as `First`.
    #[inline]
    pub fn at(index: usize, channel_words: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 == channel_words {
            Self::Last
        } else {
            Self::Interior
        }
    }
}

/// Word geometry of one event.
///
/// A fixed-size event is `header_words` followed by one region per chip.
/// Each chip region is `frame_header_words` (hybrid, lane, error code)
/// followed by `channel_words` of channel data. Zero-suppressed chunks carry
/// no event header: their body is made of chip regions only, and chips
/// without hits are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadoutLayout {
    /// Event header words (fixed-size framing only)
    #[serde(default = "default_header_words")]
    pub header_words: usize,
    /// Chip frame header words at the start of each chip region
    #[serde(default = "default_frame_header_words")]
    pub frame_header_words: usize,
    /// Channel data words per chip
    pub channel_words: usize,
}

fn default_header_words() -> usize {
    4
}

fn default_frame_header_words() -> usize {
    1
}

impl ReadoutLayout {
    /// Creates a layout.
    pub fn new(header_words: usize, frame_header_words: usize, channel_words: usize) -> Self {
        Self {
            header_words,
            frame_header_words,
            channel_words,
        }
    }

    /// Words occupied by one chip region.
    #[inline]
    pub fn words_per_chip(&self) -> usize {
        self.frame_header_words + self.channel_words
    }

    /// Words of one fixed-size event carrying `chips` chip regions.
    #[inline]
    pub fn event_size_words(&self, chips: usize) -> usize {
        self.header_words + chips * self.words_per_chip()
    }

    /// Number of chip regions in a fixed-size event of `event_size_words`.
    ///
    /// Returns `None` when the size is not header plus whole chip regions.
    pub fn chips_in_event(&self, event_size_words: usize) -> Option<usize> {
        let per_chip = self.words_per_chip();
        let body = event_size_words.checked_sub(self.header_words)?;
        if per_chip == 0 || body % per_chip != 0 {
            return None;
        }
        Some(body / per_chip)
    }

    /// Channel role of the word at `offset` within a block whose chip regions
    /// start at `region_start`. Words outside any channel region (event
    /// header, chip frame headers) have no role.
    #[inline]
    pub fn role(&self, offset: usize, region_start: usize) -> Option<ChannelWord> {
        let per_chip = self.words_per_chip();
        if offset < region_start || per_chip == 0 {
            return None;
        }
        let in_chip = (offset - region_start) % per_chip;
        let index = in_chip.checked_sub(self.frame_header_words)?;
        Some(ChannelWord::at(index, self.channel_words))
    }
}

/// One trigger's worth of readout words, already transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEventBlock {
    /// Position of the trigger within the decode pass
    pub trigger: usize,
    /// Block words
    pub words: Vec<u32>,
}

impl RawEventBlock {
    /// Creates a block.
    pub fn new(trigger: usize, words: Vec<u32>) -> Self {
        Self { trigger, words }
    }

    /// Number of words in the block.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the block holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Logical chip behind a (hybrid, lane) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipIdentity {
    /// Chip id from the board description
    Resolved(u8),
    /// No configured chip listens on that lane
    Unresolved,
}

impl ChipIdentity {
    /// Returns the chip id, if resolved.
    pub fn id(self) -> Option<u8> {
        match self {
            Self::Resolved(id) => Some(id),
            Self::Unresolved => None,
        }
    }

    /// Returns true if a chip was found for the lane.
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Fixed-size event header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventHeader {
    /// Block size in 128-bit words
    pub block_size: u16,
    /// External (TLU) trigger id
    pub trigger_id: u16,
    /// Dummy 128-bit words padding the event
    pub dummy_count: u8,
    /// TDC phase
    pub tdc: u8,
    /// L1A counter (event number)
    pub l1a_counter: u32,
    /// Bunch crossing counter
    pub bx_counter: u32,
}

/// Data of one chip inside a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipFrame {
    /// Hybrid (module) id reported by the firmware
    pub hybrid_id: u8,
    /// Physical lane the data arrived on
    pub lane: u8,
    /// Chip resolved from the lane
    pub chip: ChipIdentity,
    /// Firmware error code, 0 when good
    pub error_code: u8,
    /// Size field of the frame header, in 128-bit words
    pub declared_size: u16,
    /// Channel data words
    pub payload: Vec<u32>,
}

/// A fully identified trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    /// Trigger index within the decode pass
    pub trigger: usize,
    /// Event header, present for fixed-size framing
    pub header: Option<EventHeader>,
    /// Chip frames in arrival order
    pub frames: Vec<ChipFrame>,
    /// Chip regions that could not be parsed
    pub skipped_frames: usize,
    /// Header block size disagrees with the number of words received
    pub size_mismatch: bool,
}

impl DecodedEvent {
    /// Frame of the given hybrid and resolved chip id.
    pub fn frame(&self, hybrid_id: u8, chip_id: u8) -> Option<&ChipFrame> {
        self.frames
            .iter()
            .find(|f| f.hybrid_id == hybrid_id && f.chip == ChipIdentity::Resolved(chip_id))
    }

    /// Hybrid ids, one per frame.
    pub fn hybrid_ids(&self) -> Vec<u8> {
        self.frames.iter().map(|f| f.hybrid_id).collect()
    }

    /// Returns true if the header size matched and every region parsed.
    pub fn is_clean(&self) -> bool {
        !self.size_mismatch && self.skipped_frames == 0
    }

    /// Chip identities, one per frame.
    pub fn chip_ids(&self) -> Vec<ChipIdentity> {
        self.frames.iter().map(|f| f.chip).collect()
    }
}
