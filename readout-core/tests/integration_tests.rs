//! Integration tests for the readout decoder using synthetic acquisitions.
//!
//! Raw word files and board descriptions are written to temporary
//! directories and read back through the public API.

use readout_core::output;
use readout_core::parser::{self, reverse_bits};
use readout_core::{
    BoardDescription, ChipFamily, ChipIdentity, DecodeError, EventHeader, EventType,
    FrameDecoder, Pipeline, RegisterError, RegisterFile,
};

const D19C_BOARD: &str = r#"
board_type = "d19c"
event_type = "fixed"
chip_family = "croc"

[layout]
header_words = 4
frame_header_words = 1
channel_words = 11

[[hybrids]]
id = 5
chips = [ { id = 12, lane = 3 } ]
"#;

/// Small xorshift generator for reproducible word patterns.
struct XorShift(u32);

impl XorShift {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

struct RawEvent {
    words: Vec<u32>,
    pipeline_address: u8,
    stub: u16,
}

/// Builds one raw D19c event: untransformed header and channel words with the
/// pipeline address in bits [2,9] of the first word and the stub word in bits
/// [20,31] of the last.
fn raw_event(board: &BoardDescription, index: u32, rng: &mut XorShift) -> RawEvent {
    let header = EventHeader {
        block_size: 4,
        trigger_id: index as u16,
        dummy_count: 0,
        tdc: 7,
        l1a_counter: index,
        bx_counter: 1000 + index,
    };
    let pipeline_address = (0x5A ^ index) as u8;
    let stub = (0xC30 | index) as u16;

    let mut words = parser::event_header(&header).to_vec();
    words.push(parser::frame_header(0, 5, 3, 3));

    let channel_words = board.layout.channel_words;
    for w in 0..channel_words {
        let mut word = rng.next();
        if w == 0 {
            word = (word & !(0xFF << 2)) | (u32::from(pipeline_address) << 2);
        }
        if w + 1 == channel_words {
            word = (word & 0x000F_FFFF) | (u32::from(stub) << 20);
        }
        words.push(word);
    }

    RawEvent {
        words,
        pipeline_address,
        stub,
    }
}

#[test]
fn test_end_to_end_fixed_stream() {
    let board = BoardDescription::from_toml_str(D19C_BOARD).unwrap();
    assert_eq!(board.event_size_words(), 16);

    let mut rng = XorShift(0x1234_5678);
    let raw: Vec<RawEvent> = (0..4).map(|i| raw_event(&board, i, &mut rng)).collect();
    let words: Vec<u32> = raw.iter().flat_map(|e| e.words.iter().copied()).collect();
    assert_eq!(words.len(), 64);

    let mut pipeline = Pipeline::new(&board).unwrap();
    let batch = pipeline.run(&words, 4);

    assert!(batch.is_complete());
    assert_eq!(batch.events.len(), 4);

    for (i, (event, raw)) in batch.events.iter().zip(&raw).enumerate() {
        assert_eq!(event.trigger, i);
        assert_eq!(event.skipped_frames, 0);

        let header = event.header.unwrap();
        assert_eq!(header.l1a_counter, i as u32);
        assert_eq!(header.bx_counter, 1000 + i as u32);

        let frame = event.frame(5, 12).unwrap();
        assert_eq!(frame.lane, 3);
        assert_eq!(frame.payload.len(), 11);
        assert_eq!(parser::pipeline_address(frame.payload[0]), raw.pipeline_address);
        assert_eq!(parser::stub_word(frame.payload[10]), raw.stub);

        // Interior words are plain bit reversals of the raw words
        for k in 1..10 {
            assert_eq!(frame.payload[k], reverse_bits(raw.words[5 + k]));
        }
    }
}

#[test]
fn test_end_to_end_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let board_path = dir.path().join("board.toml");
    let raw_path = dir.path().join("run.raw");

    std::fs::write(&board_path, D19C_BOARD).unwrap();
    let board = BoardDescription::load(&board_path).unwrap();

    let mut rng = XorShift(99);
    let raw: Vec<RawEvent> = (0..3).map(|i| raw_event(&board, i, &mut rng)).collect();
    let words: Vec<u32> = raw.iter().flat_map(|e| e.words.iter().copied()).collect();
    output::write_raw_words(&raw_path, &words).unwrap();

    let mut pipeline = Pipeline::new(&board).unwrap();
    let batch = pipeline.run_file(&raw_path, 3).unwrap();
    assert_eq!(batch.events.len(), 3);
    assert_eq!(
        parser::pipeline_address(batch.events[2].frames[0].payload[0]),
        raw[2].pipeline_address
    );

    let csv_path = dir.path().join("frames.csv");
    output::write_frames_csv(&csv_path, &batch.events).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.lines().nth(1).unwrap().starts_with("0,0,1000,5,3,12,"));
}

#[test]
fn test_fixed_stream_with_short_remainder() {
    let board = BoardDescription::from_toml_str(D19C_BOARD).unwrap();
    let mut rng = XorShift(7);
    let mut words: Vec<u32> = (0..2)
        .flat_map(|i| raw_event(&board, i, &mut rng).words)
        .collect();
    words.extend([1, 2, 3, 4, 5]);

    let mut decoder = FrameDecoder::from_board(&board).unwrap();
    let outcome = decoder.decode(&words, 3);
    assert!(outcome.is_complete());
    assert_eq!(outcome.blocks.len(), 2);
    assert!(outcome.blocks.iter().all(|b| b.len() == 16));
}

#[test]
fn test_supervisor_byte_swap() {
    let board = BoardDescription::from_toml_str(
        r#"
board_type = "supervisor"
event_type = "fixed"
[layout]
header_words = 4
channel_words = 3
[[hybrids]]
id = 0
chips = [ { id = 1, lane = 0 } ]
"#,
    )
    .unwrap();

    // 4 + 1 + 3 words, two 128-bit words
    let mut words = parser::event_header(&EventHeader {
        block_size: 2,
        trigger_id: 0,
        dummy_count: 0,
        tdc: 0,
        l1a_counter: 1,
        bx_counter: 2,
    })
    .to_vec();
    words.extend([
        parser::frame_header(0, 0, 0, 1),
        0x1122_3344,
        0x0102_0304,
        0xAABB_CCDD,
    ]);

    let batch = Pipeline::new(&board).unwrap().run(&words, 1);
    assert!(batch.events[0].is_clean());
    let frame = &batch.events[0].frames[0];
    assert_eq!(frame.chip, ChipIdentity::Resolved(1));
    assert_eq!(frame.payload, vec![0x4433_2211, 0x0403_0201, 0xDDCC_BBAA]);
}

#[test]
fn test_header_block_size_checked() {
    let board = BoardDescription::from_toml_str(D19C_BOARD).unwrap();
    let mut rng = XorShift(0xC0FF_EE11);
    let mut words = Vec::new();
    for index in 0..2 {
        words.extend(raw_event(&board, index, &mut rng).words);
    }
    // Second event claims three 128-bit words instead of four
    words[16] = parser::event_header(&EventHeader {
        block_size: 3,
        trigger_id: 1,
        dummy_count: 0,
        tdc: 7,
        l1a_counter: 1,
        bx_counter: 1001,
    })[0];

    let batch = Pipeline::new(&board).unwrap().run(&words, 2);
    assert!(batch.is_complete());
    assert_eq!(batch.events.len(), 2);
    assert!(batch.events[0].is_clean());
    assert!(batch.events[1].size_mismatch);
    assert_eq!(batch.events[1].frames.len(), 1);
}

fn zero_suppressed_board() -> BoardDescription {
    BoardDescription::from_toml_str(
        r#"
board_type = "fc7"
event_type = "zero_suppressed"
[layout]
frame_header_words = 1
channel_words = 2
[[hybrids]]
id = 1
chips = [ { id = 20, lane = 0 }, { id = 21, lane = 1 } ]
"#,
    )
    .unwrap()
}

#[test]
fn test_zero_suppressed_chunks_in_order() {
    let board = zero_suppressed_board();
    assert_eq!(board.event_type, EventType::ZeroSuppressed);

    let words = [5, 10, 11, 12, 13, 14, 3, 20, 21, 22];
    let mut decoder = FrameDecoder::from_board(&board).unwrap();
    let outcome = decoder.decode(&words, 2);

    assert!(outcome.is_complete());
    let lengths: Vec<usize> = outcome.blocks.iter().map(|b| b.len()).collect();
    assert_eq!(lengths, vec![5, 3]);
    assert_eq!(outcome.blocks[0].words[0], 10);
    assert_eq!(outcome.blocks[1].words[0], 20);
}

#[test]
fn test_zero_suppressed_drops_chips_without_hits() {
    let board = zero_suppressed_board();
    let words = [
        6,
        parser::frame_header(0, 1, 0, 1),
        1,
        2,
        parser::frame_header(0, 1, 1, 1),
        3,
        4,
        3,
        parser::frame_header(0, 1, 1, 1),
        5,
        6,
    ];

    let batch = Pipeline::new(&board).unwrap().run(&words, 2);
    assert!(batch.is_complete());
    assert_eq!(
        batch.events[0].chip_ids(),
        vec![ChipIdentity::Resolved(20), ChipIdentity::Resolved(21)]
    );
    assert_eq!(batch.events[1].chip_ids(), vec![ChipIdentity::Resolved(21)]);
    assert_eq!(batch.events[1].frames[0].payload, vec![5, 6]);
}

#[test]
fn test_zero_suppressed_misalignment_keeps_prefix() {
    let board = zero_suppressed_board();
    let words = [3, parser::frame_header(0, 1, 0, 1), 1, 2, 50, 0, 0, 3, 0, 0, 0];

    let batch = Pipeline::new(&board).unwrap().run(&words, 3);
    assert_eq!(batch.events.len(), 1);
    assert_eq!(batch.events[0].frames[0].chip, ChipIdentity::Resolved(20));
    match batch.error {
        Some(DecodeError::MisalignedData {
            offset,
            declared,
            remaining,
        }) => {
            assert_eq!((offset, declared, remaining), (4, 50, 6));
        }
        other => panic!("expected misaligned data, got {other:?}"),
    }
}

#[test]
fn test_decode_file_rejects_partial_word() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.raw");
    std::fs::write(&path, [0u8; 10]).unwrap();

    let board = zero_suppressed_board();
    let mut decoder = FrameDecoder::from_board(&board).unwrap();
    assert!(matches!(
        decoder.decode_file(&path, 1),
        Err(DecodeError::TrailingBytes(10))
    ));
}

#[test]
fn test_register_file_rejects_read_only() {
    let table = ChipFamily::Croc.table().unwrap();
    let mut regs = RegisterFile::new(table);

    assert_eq!(
        regs.write("BCIDCnt", 1),
        Err(RegisterError::PermissionDenied("BCIDCnt".to_string()))
    );
    regs.write("VCAL_HIGH", 800).unwrap();
    assert_eq!(regs.read("VCAL_HIGH").unwrap(), 800);

    let address = table.index_of("VCAL_HIGH").unwrap() as u16;
    assert_eq!(regs.pending().collect::<Vec<_>>(), vec![(address, 800)]);
}

#[test]
fn test_register_families() {
    let rd53b = ChipFamily::Rd53b.table().unwrap();
    let croc = ChipFamily::Croc.table().unwrap();
    assert!(croc.len() > rd53b.len());

    for name in ["PIX_PORTAL", "VCAL_HIGH", "DAC_KRUM_CURR_LIN"] {
        assert_eq!(rd53b.index_of(name).unwrap(), croc.index_of(name).unwrap());
    }
    assert_eq!(
        croc.index_of("ChSyncConf").unwrap(),
        rd53b.index_of("ChSyncConf").unwrap() + 1
    );
}

#[test]
fn test_board_in_description_file() {
    let board = BoardDescription::from_toml_str(D19C_BOARD).unwrap();
    assert_eq!(board.chip_family, Some(ChipFamily::Croc));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.toml");
    board.save(&path).unwrap();
    assert_eq!(BoardDescription::load(&path).unwrap(), board);
}
