//! Event assembly.
//!
//! Turns the raw blocks of one decode pass into identified events: the event
//! header is parsed, each chip region is split into frame header and channel
//! payload, and the physical lane is resolved to a logical chip.

use crate::board::{BoardDescription, BoardError, LaneResolver};
use crate::decoder::{DecodeError, FrameDecoder};
use crate::parser;
use crate::types::{ChipFrame, DecodedEvent, EventType, RawEventBlock};
use std::path::Path;
use tracing::{debug, warn};

/// Builds [`DecodedEvent`]s from raw blocks.
#[derive(Debug, Clone, Copy)]
pub struct EventAssembler<'a> {
    board: &'a BoardDescription,
    resolver: LaneResolver<'a>,
}

impl<'a> EventAssembler<'a> {
    /// Creates an assembler, validating the board description first.
    pub fn new(board: &'a BoardDescription) -> Result<Self, BoardError> {
        board.validate()?;
        Ok(Self {
            board,
            resolver: board.resolver(),
        })
    }

    /// Assembles every block, keeping trigger order.
    pub fn assemble(&self, blocks: Vec<RawEventBlock>) -> Vec<DecodedEvent> {
        blocks
            .into_iter()
            .map(|block| self.assemble_block(&block))
            .collect()
    }

    /// Assembles one block.
    pub fn assemble_block(&self, block: &RawEventBlock) -> DecodedEvent {
        let layout = self.board.layout;

        let (header, region_start) = match self.board.event_type {
            EventType::Fixed => {
                let header = if layout.header_words >= parser::EVENT_HEADER_WORDS {
                    let header = parser::parse_event_header(&block.words);
                    if header.is_none() {
                        warn!(trigger = block.trigger, "event header marker missing");
                    }
                    header
                } else {
                    None
                };
                (header, layout.header_words.min(block.len()))
            }
            EventType::ZeroSuppressed => (None, 0),
        };

        // Block size and dummy padding are counted in 128-bit words
        let mut size_mismatch = false;
        let mut region_end = block.len();
        if let Some(h) = &header {
            let declared = usize::from(h.block_size) * parser::WORDS_PER_DDR3;
            if declared != block.len() {
                warn!(
                    trigger = block.trigger,
                    declared,
                    received = block.len(),
                    "event block size mismatch"
                );
                size_mismatch = true;
            }
            let padding = usize::from(h.dummy_count) * parser::WORDS_PER_DDR3;
            region_end = block.len().saturating_sub(padding).max(region_start);
        }

        let per_chip = layout.words_per_chip();
        let mut frames = Vec::new();
        let mut skipped_frames = 0;

        for (index, region) in block.words[region_start..region_end]
            .chunks(per_chip)
            .enumerate()
        {
            if region.len() < per_chip {
                warn!(
                    trigger = block.trigger,
                    region = index,
                    words = region.len(),
                    expected = per_chip,
                    "truncated chip region skipped"
                );
                skipped_frames += 1;
                continue;
            }

            let head = region[0];
            if parser::frame_marker(head) != parser::FRAME_HEADER_MARKER {
                warn!(
                    trigger = block.trigger,
                    region = index,
                    word = head,
                    "chip frame header marker missing, region skipped"
                );
                skipped_frames += 1;
                continue;
            }

            let hybrid_id = parser::frame_hybrid_id(head);
            let lane = parser::frame_lane(head);
            let chip = self.resolver.resolve(hybrid_id, lane);
            if !chip.is_resolved() {
                debug!(
                    trigger = block.trigger,
                    hybrid_id, lane, "no chip configured on lane"
                );
            }

            frames.push(ChipFrame {
                hybrid_id,
                lane,
                chip,
                error_code: parser::frame_error_code(head),
                declared_size: parser::frame_size(head),
                payload: region[layout.frame_header_words..].to_vec(),
            });
        }

        DecodedEvent {
            trigger: block.trigger,
            header,
            frames,
            skipped_frames,
            size_mismatch,
        }
    }
}

/// Events of one decode pass.
///
/// Events assembled before a misalignment are kept alongside the error.
#[derive(Debug, Default)]
pub struct AssembledBatch {
    pub events: Vec<DecodedEvent>,
    pub error: Option<DecodeError>,
}

impl AssembledBatch {
    /// Returns true if the decode pass ran to completion.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Frame decoder and event assembler for one board.
#[derive(Debug)]
pub struct Pipeline<'a> {
    assembler: EventAssembler<'a>,
    decoder: FrameDecoder,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline. Fails if the board description is invalid.
    pub fn new(board: &'a BoardDescription) -> Result<Self, DecodeError> {
        Ok(Self {
            assembler: EventAssembler::new(board)?,
            decoder: FrameDecoder::from_board(board)?,
        })
    }

    /// Decodes and assembles the words of one acquisition.
    pub fn run(&mut self, words: &[u32], trigger_count: usize) -> AssembledBatch {
        let outcome = self.decoder.decode(words, trigger_count);
        AssembledBatch {
            events: self.assembler.assemble(outcome.blocks),
            error: outcome.error,
        }
    }

    /// Decodes and assembles a file of little-endian words.
    pub fn run_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        trigger_count: usize,
    ) -> Result<AssembledBatch, DecodeError> {
        let words = crate::decoder::read_words(path)?;
        Ok(self.run(&words, trigger_count))
    }
}
