//! Output writers for decoded readout data.
//!
//! Supports a per-frame CSV summary of assembled events and raw little-endian
//! word files (the format [`read_words`](crate::decoder::read_words) expects).

use crate::types::{ChipIdentity, DecodedEvent};
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output writing.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Column header of the frame CSV.
pub const FRAME_CSV_HEADER: &str =
    "trigger,l1a_counter,bx_counter,hybrid,lane,chip,error_code,declared_size,payload_words";

/// CSV writer, one row per chip frame.
pub struct FrameCsvWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> FrameCsvWriter<W> {
    /// Creates a new CSV writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Writes the column header.
    pub fn write_header(&mut self) -> Result<(), OutputError> {
        writeln!(self.writer, "{}", FRAME_CSV_HEADER)?;
        Ok(())
    }

    /// Writes the frames of a batch of events.
    pub fn write_events(&mut self, events: &[DecodedEvent]) -> Result<(), OutputError> {
        for event in events {
            self.write_event(event)?;
        }
        Ok(())
    }

    /// Writes the frames of one event. Counters are empty without a header.
    fn write_event(&mut self, event: &DecodedEvent) -> Result<(), OutputError> {
        let (l1a, bx) = match &event.header {
            Some(h) => (h.l1a_counter.to_string(), h.bx_counter.to_string()),
            None => (String::new(), String::new()),
        };

        for frame in &event.frames {
            let chip = match frame.chip {
                ChipIdentity::Resolved(id) => id.to_string(),
                ChipIdentity::Unresolved => "-".to_string(),
            };
            writeln!(
                self.writer,
                "{},{},{},{},{},{},{},{},{}",
                event.trigger,
                l1a,
                bx,
                frame.hybrid_id,
                frame.lane,
                chip,
                frame.error_code,
                frame.declared_size,
                frame.payload.len()
            )?;
        }
        Ok(())
    }

    /// Flushes the writer.
    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writer for raw little-endian 32-bit word files.
pub struct RawWordWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> RawWordWriter<W> {
    /// Creates a new raw word writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Writes a batch of words.
    pub fn write_words(&mut self, words: &[u32]) -> Result<(), OutputError> {
        for &word in words {
            self.writer.write_u32::<LittleEndian>(word)?;
        }
        Ok(())
    }

    /// Flushes the writer.
    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the frames of assembled events to a CSV file.
pub fn write_frames_csv<P: AsRef<Path>>(
    path: P,
    events: &[DecodedEvent],
) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = FrameCsvWriter::new(file);
    writer.write_header()?;
    writer.write_events(events)?;
    writer.flush()?;
    Ok(())
}

/// Writes words to a raw little-endian file.
pub fn write_raw_words<P: AsRef<Path>>(path: P, words: &[u32]) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = RawWordWriter::new(file);
    writer.write_words(words)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChipFrame, EventHeader};

    fn frame(lane: u8, chip: ChipIdentity) -> ChipFrame {
        ChipFrame {
            hybrid_id: 1,
            lane,
            chip,
            error_code: 0,
            declared_size: 3,
            payload: vec![0; 11],
        }
    }

    #[test]
    fn test_frame_csv_writer() {
        let events = vec![
            DecodedEvent {
                trigger: 0,
                header: Some(EventHeader {
                    block_size: 4,
                    trigger_id: 0,
                    dummy_count: 0,
                    tdc: 0,
                    l1a_counter: 17,
                    bx_counter: 900,
                }),
                frames: vec![
                    frame(0, ChipIdentity::Resolved(10)),
                    frame(5, ChipIdentity::Unresolved),
                ],
                skipped_frames: 0,
                size_mismatch: false,
            },
            DecodedEvent {
                trigger: 1,
                header: None,
                frames: vec![frame(1, ChipIdentity::Resolved(11))],
                skipped_frames: 0,
                size_mismatch: false,
            },
        ];

        let mut output = Vec::new();
        {
            let mut writer = FrameCsvWriter::new(&mut output);
            writer.write_header().unwrap();
            writer.write_events(&events).unwrap();
            writer.flush().unwrap();
        }

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(lines[0], FRAME_CSV_HEADER);
        assert_eq!(lines[1], "0,17,900,1,0,10,0,3,11");
        assert_eq!(lines[2], "0,17,900,1,5,-,0,3,11");
        assert_eq!(lines[3], "1,,,1,1,11,0,3,11");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_raw_word_writer() {
        let mut output = Vec::new();
        {
            let mut writer = RawWordWriter::new(&mut output);
            writer.write_words(&[0x0403_0201, 0xDDCC_BBAA]).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(output, vec![1, 2, 3, 4, 0xAA, 0xBB, 0xCC, 0xDD]);
    }
}
