#![allow(clippy::unusual_byte_groupings)]
//! Low-level handling of 32-bit readout words.
//!
//! This module provides the position-dependent word transforms applied to
//! channel data, and functions to extract fields from event and chip frame
//! headers using bitwise operations.

use crate::types::{BoardType, ChannelWord, EventHeader};

// ============================================================================
// Channel word transforms
// The front-end serializes its shift register in reverse bit order. The first
// and last words of a channel carry control fields that must keep their
// natural placement, so they are masked and re-inserted after the reversal.
// ============================================================================

/// Bits kept from the reversed first word: everything but [22,29].
pub const FIRST_WORD_MASK: u32 = 0xC03F_FFFF;
/// Bits kept from the reversed last word: everything but [0,11].
pub const LAST_WORD_MASK: u32 = 0xFFFF_F000;
/// Position of the pipeline address after the transform.
pub const PIPELINE_ADDRESS_SHIFT: u32 = 22;

/// Reverses the bit order of a 32-bit word.
#[inline]
pub fn reverse_bits(word: u32) -> u32 {
    word.reverse_bits()
}

/// Swaps the four bytes of a 32-bit word.
#[inline]
pub fn byte_swap(word: u32) -> u32 {
    word.swap_bytes()
}

/// Extracts the 8-bit pipeline address from bits [2,9] of a raw first word.
#[inline]
pub fn raw_pipeline_address(word: u32) -> u8 {
    ((word >> 2) & 0xFF) as u8
}

/// Extracts the 12-bit stub word from bits [20,31] of a raw last word.
#[inline]
pub fn raw_stub_word(word: u32) -> u16 {
    ((word >> 20) & 0xFFF) as u16
}

/// Reads the pipeline address from a transformed first word.
#[inline]
pub fn pipeline_address(word: u32) -> u8 {
    ((word >> PIPELINE_ADDRESS_SHIFT) & 0xFF) as u8
}

/// Reads the stub word from a transformed last word.
#[inline]
pub fn stub_word(word: u32) -> u16 {
    (word & 0xFFF) as u16
}

/// Applies the bit-reversal transform for a word of the given role.
#[inline]
pub fn transform(word: u32, role: ChannelWord) -> u32 {
    match role {
        ChannelWord::First => {
            let pipeline = u32::from(raw_pipeline_address(word));
            (reverse_bits(word) & FIRST_WORD_MASK) | (pipeline << PIPELINE_ADDRESS_SHIFT)
        }
        ChannelWord::Last => {
            let stub = u32::from(raw_stub_word(word));
            (reverse_bits(word) & LAST_WORD_MASK) | stub
        }
        ChannelWord::Interior => reverse_bits(word),
    }
}

/// Undoes [`transform`], giving back the raw word.
#[inline]
pub fn restore(word: u32, role: ChannelWord) -> u32 {
    match role {
        ChannelWord::First => {
            let pipeline = u32::from(pipeline_address(word));
            reverse_bits(word & FIRST_WORD_MASK) | (pipeline << 2)
        }
        ChannelWord::Last => {
            let stub = u32::from(stub_word(word));
            reverse_bits(word & LAST_WORD_MASK) | (stub << 20)
        }
        ChannelWord::Interior => reverse_bits(word),
    }
}

/// Per-board word transform. Never combined: a board uses exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTransform {
    /// Role-dependent bit reversal
    BitReversal,
    /// Byte swap regardless of role
    ByteSwap,
    /// Words are passed through untouched
    Identity,
}

impl WordTransform {
    /// Transform used by a board type.
    pub fn for_board(board: BoardType) -> Self {
        match board {
            BoardType::D19c => Self::BitReversal,
            BoardType::Supervisor => Self::ByteSwap,
            BoardType::Fc7 => Self::Identity,
        }
    }

    /// Transforms a channel word.
    #[inline]
    pub fn apply(self, word: u32, role: ChannelWord) -> u32 {
        match self {
            Self::BitReversal => transform(word, role),
            Self::ByteSwap => byte_swap(word),
            Self::Identity => word,
        }
    }

    /// Inverse of [`apply`](Self::apply).
    #[inline]
    pub fn invert(self, word: u32, role: ChannelWord) -> u32 {
        match self {
            Self::BitReversal => restore(word, role),
            Self::ByteSwap => byte_swap(word),
            Self::Identity => word,
        }
    }
}

// ============================================================================
// Event header (4 words)
// w0: [31:16] 0xFFFF | [15:0] block size (128-bit words)
// w1: [30:16] trigger id | [7:0] dummy count (128-bit words)
// w2: [31:24] tdc | [23:0] l1a counter
// w3: [31:0] bx counter
// ============================================================================

/// Marker in the upper half of the first header word.
pub const EVENT_HEADER_MARKER: u16 = 0xFFFF;
/// Number of words in an event header.
pub const EVENT_HEADER_WORDS: usize = 4;
/// 32-bit words per 128-bit DDR3 word.
pub const WORDS_PER_DDR3: usize = 4;

/// Extracts the header marker from the first header word.
#[inline]
pub fn event_header_marker(word: u32) -> u16 {
    (word >> 16) as u16
}

/// Extracts the block size from the first header word.
#[inline]
pub fn event_block_size(word: u32) -> u16 {
    (word & 0xFFFF) as u16
}

/// Extracts the external trigger id from the second header word.
#[inline]
pub fn event_trigger_id(word: u32) -> u16 {
    ((word >> 16) & 0x7FFF) as u16
}

/// Extracts the dummy count from the second header word.
#[inline]
pub fn event_dummy_count(word: u32) -> u8 {
    (word & 0xFF) as u8
}

/// Extracts the TDC phase from the third header word.
#[inline]
pub fn event_tdc(word: u32) -> u8 {
    (word >> 24) as u8
}

/// Extracts the L1A counter from the third header word.
#[inline]
pub fn event_l1a_counter(word: u32) -> u32 {
    word & 0x00FF_FFFF
}

/// Parses an event header. Returns `None` if fewer than four words are given
/// or the marker is missing.
pub fn parse_event_header(words: &[u32]) -> Option<EventHeader> {
    let w = words.get(..EVENT_HEADER_WORDS)?;
    if event_header_marker(w[0]) != EVENT_HEADER_MARKER {
        return None;
    }
    Some(EventHeader {
        block_size: event_block_size(w[0]),
        trigger_id: event_trigger_id(w[1]),
        dummy_count: event_dummy_count(w[1]),
        tdc: event_tdc(w[2]),
        l1a_counter: event_l1a_counter(w[2]),
        bx_counter: w[3],
    })
}

/// Builds the four header words of an event.
pub fn event_header(header: &EventHeader) -> [u32; EVENT_HEADER_WORDS] {
    [
        (u32::from(EVENT_HEADER_MARKER) << 16) | u32::from(header.block_size),
        (u32::from(header.trigger_id & 0x7FFF) << 16) | u32::from(header.dummy_count),
        (u32::from(header.tdc) << 24) | (header.l1a_counter & 0x00FF_FFFF),
        header.bx_counter,
    ]
}

// ============================================================================
// Chip frame header
// Bits: [31:28] 0xA | [27:24] error code | [23:16] hybrid | [15:12] lane | [11:0] size
// ============================================================================

/// Marker nibble of a chip frame header.
pub const FRAME_HEADER_MARKER: u8 = 0xA;

/// Extracts the marker nibble from a chip frame header.
#[inline]
pub fn frame_marker(word: u32) -> u8 {
    ((word >> 28) & 0xF) as u8
}

/// Extracts the firmware error code from a chip frame header.
#[inline]
pub fn frame_error_code(word: u32) -> u8 {
    ((word >> 24) & 0xF) as u8
}

/// Extracts the hybrid id from a chip frame header.
#[inline]
pub fn frame_hybrid_id(word: u32) -> u8 {
    ((word >> 16) & 0xFF) as u8
}

/// Extracts the chip lane from a chip frame header.
#[inline]
pub fn frame_lane(word: u32) -> u8 {
    ((word >> 12) & 0xF) as u8
}

/// Extracts the frame size (128-bit words) from a chip frame header.
#[inline]
pub fn frame_size(word: u32) -> u16 {
    (word & 0xFFF) as u16
}

/// Builds a chip frame header word.
#[inline]
pub fn frame_header(error_code: u8, hybrid_id: u8, lane: u8, size: u16) -> u32 {
    (u32::from(FRAME_HEADER_MARKER) << 28)
        | (u32::from(error_code & 0xF) << 24)
        | (u32::from(hybrid_id) << 16)
        | (u32::from(lane & 0xF) << 12)
        | u32::from(size & 0xFFF)
}

// ============================================================================
// Zero-suppressed chunk size
// Bits: [15:0] body size in words
// ============================================================================

/// Extracts the declared body size from the first word of a chunk.
#[inline]
pub fn chunk_size(word: u32) -> usize {
    (word & 0xFFFF) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    /// xorshift32, enough to spread test inputs over the word space.
    fn words(seed: u32, n: usize) -> Vec<u32> {
        let mut x = seed;
        (0..n)
            .map(|_| {
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                x
            })
            .collect()
    }

    #[test]
    fn test_first_word_keeps_pipeline_address() {
        // pipeline address 0xA5 in bits [2,9], error bits set
        let word: u32 = 0b0000_0000_0000_0000_0000_0010_1001_0111;
        assert_eq!(raw_pipeline_address(word), 0xA5);

        let out = transform(word, ChannelWord::First);
        assert_eq!(pipeline_address(out), 0xA5);
        // error bits [0,1] end up reversed at [30,31]
        assert_eq!(out >> 30, 0b11);
        assert_eq!(out & 0x003F_FFFF, 0);
    }

    #[test]
    fn test_last_word_keeps_stub_word() {
        let word: u32 = 0xABC0_0001;
        let out = transform(word, ChannelWord::Last);
        assert_eq!(stub_word(out), 0xABC);
        // bit 0 reversed to bit 31, remaining reversed bits masked
        assert_eq!(out & LAST_WORD_MASK, 0x8000_0000);
    }

    #[test]
    fn test_interior_is_self_inverse() {
        for w in words(0x1234_5678, 1000) {
            let once = transform(w, ChannelWord::Interior);
            assert_eq!(transform(once, ChannelWord::Interior), w);
        }
    }

    #[test]
    fn test_boundary_words_restore() {
        for w in words(0xDEAD_BEEF, 1000) {
            for role in [ChannelWord::First, ChannelWord::Interior, ChannelWord::Last] {
                assert_eq!(restore(transform(w, role), role), w, "{w:#010x} {role:?}");
            }
        }
    }

    #[test]
    fn test_byte_swap() {
        assert_eq!(byte_swap(0x1122_3344), 0x4433_2211);
        let t = WordTransform::for_board(BoardType::Supervisor);
        assert_eq!(t.apply(0x1122_3344, ChannelWord::First), 0x4433_2211);
        assert_eq!(t.invert(0x4433_2211, ChannelWord::Last), 0x1122_3344);
    }

    #[test]
    fn test_transform_selection() {
        assert_eq!(WordTransform::for_board(BoardType::D19c), WordTransform::BitReversal);
        assert_eq!(WordTransform::for_board(BoardType::Fc7), WordTransform::Identity);
        assert_eq!(WordTransform::Identity.apply(42, ChannelWord::Interior), 42);
    }

    #[test]
    fn test_event_header_parsing() {
        let words = [0xFFFF_0007, 0x0123_0002, 0x1A00_0042, 0xCAFE_F00D];
        let header = parse_event_header(&words).unwrap();
        assert_eq!(header.block_size, 7);
        assert_eq!(header.trigger_id, 0x0123);
        assert_eq!(header.dummy_count, 2);
        assert_eq!(header.tdc, 0x1A);
        assert_eq!(header.l1a_counter, 0x42);
        assert_eq!(header.bx_counter, 0xCAFE_F00D);

        assert!(parse_event_header(&words[..3]).is_none());
        assert!(parse_event_header(&[0xFFFE_0007, 0, 0, 0]).is_none());

        assert_eq!(event_header(&header), words);
    }

    #[test]
    fn test_frame_header_fields() {
        let word = frame_header(3, 0x12, 5, 0x00C);
        assert_eq!(word, 0b1010_0011_00010010_0101_000000001100);
        assert_eq!(frame_marker(word), FRAME_HEADER_MARKER);
        assert_eq!(frame_error_code(word), 3);
        assert_eq!(frame_hybrid_id(word), 0x12);
        assert_eq!(frame_lane(word), 5);
        assert_eq!(frame_size(word), 0x00C);
    }

    #[test]
    fn test_chunk_size() {
        assert_eq!(chunk_size(0xABCD_0005), 5);
    }
}
