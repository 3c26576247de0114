//! Readout decoder library for pixel and strip detector front-ends.
//!
//! This crate turns the raw 32-bit word stream delivered by a back-end board
//! into per-trigger events identified by hybrid and chip, and holds the
//! register maps of the supported readout chip families.
//!
//! # Example
//!
//! ```no_run
//! use readout_core::{BoardDescription, Pipeline};
//!
//! let board = BoardDescription::load("board.toml").unwrap();
//! let mut pipeline = Pipeline::new(&board).unwrap();
//! let batch = pipeline.run_file("run_0001.raw", 100).unwrap();
//!
//! println!("Assembled {} events", batch.events.len());
//! ```
//!
//! # Features
//!
//! - Fixed-size and zero-suppressed framing
//! - Per-board word transforms (bit reversal with pipeline address and stub
//!   word re-insertion, byte swap)
//! - Lane to chip resolution from a TOML board description
//! - RD53B and CROC register tables with field packing and write checks
//! - Frame CSV and raw word output

pub mod assembler;
pub mod board;
pub mod decoder;
pub mod output;
pub mod parser;
pub mod register;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use assembler::{AssembledBatch, EventAssembler, Pipeline};
pub use board::{BoardDescription, BoardError, ChipDescription, HybridDescription, LaneResolver};
pub use decoder::{DecodeError, DecodeOutcome, FrameDecoder};
pub use output::OutputError;
pub use parser::WordTransform;
pub use register::{Register, RegisterError, RegisterFile};
pub use tables::{ChipFamily, RegisterTable};
pub use types::{
    BoardType, ChannelWord, ChipFrame, ChipIdentity, DecodedEvent, EventHeader, EventType,
    RawEventBlock, ReadoutLayout,
};
