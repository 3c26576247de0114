//! Benchmarks for frame decoding and event assembly.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use readout_core::{parser, BoardDescription, EventHeader, FrameDecoder, Pipeline};

const EVENTS: usize = 10_000;

const BOARD: &str = r#"
board_type = "d19c"
event_type = "fixed"
[layout]
header_words = 4
frame_header_words = 1
channel_words = 11
[[hybrids]]
id = 0
chips = [
    { id = 0, lane = 0 }, { id = 1, lane = 1 }, { id = 2, lane = 2 }, { id = 3, lane = 3 },
]
"#;

fn synthetic_stream(board: &BoardDescription, events: usize) -> Vec<u32> {
    let mut words = Vec::with_capacity(events * board.event_size_words());
    for i in 0..events {
        let header = EventHeader {
            block_size: (board.event_size_words() / parser::WORDS_PER_DDR3) as u16,
            trigger_id: (i & 0x7FFF) as u16,
            dummy_count: 0,
            tdc: (i & 0xFF) as u8,
            l1a_counter: i as u32,
            bx_counter: (i * 3) as u32,
        };
        words.extend(parser::event_header(&header));
        for hybrid in &board.hybrids {
            for chip in &hybrid.chips {
                words.push(parser::frame_header(0, hybrid.id, chip.lane, 3));
                words.extend((0..board.layout.channel_words as u32).map(|w| {
                    (i as u32).wrapping_mul(0x9E37_79B9) ^ w.wrapping_mul(0x85EB_CA6B)
                }));
            }
        }
    }
    words
}

fn decode_fixed_benchmark(c: &mut Criterion) {
    let board = BoardDescription::from_toml_str(BOARD).unwrap();
    let words = synthetic_stream(&board, EVENTS);

    let mut group = c.benchmark_group("decode_fixed");
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("bit_reversal_10k_events", |b| {
        let mut decoder = FrameDecoder::from_board(&board).unwrap();
        b.iter(|| {
            let outcome = decoder.decode(black_box(&words), EVENTS);
            black_box(outcome.blocks.len())
        })
    });

    group.bench_function("decode_and_assemble_10k_events", |b| {
        let mut pipeline = Pipeline::new(&board).unwrap();
        b.iter(|| {
            let batch = pipeline.run(black_box(&words), EVENTS);
            black_box(batch.events.len())
        })
    });

    group.finish();
}

fn decode_zero_suppressed_benchmark(c: &mut Criterion) {
    let mut board = BoardDescription::from_toml_str(BOARD).unwrap();
    board.event_type = readout_core::EventType::ZeroSuppressed;
    let per_chip = board.layout.words_per_chip();

    // Chunks alternate between one and four chips with hits
    let mut words = Vec::new();
    for i in 0..EVENTS {
        let chips = if i % 2 == 0 { 1 } else { 4 };
        words.push((chips * per_chip) as u32);
        for lane in 0..chips as u8 {
            words.push(parser::frame_header(0, 0, lane, 3));
            words.extend((0..board.layout.channel_words as u32).map(|w| w ^ i as u32));
        }
    }

    let mut group = c.benchmark_group("decode_zero_suppressed");
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("chunks_10k", |b| {
        let mut decoder = FrameDecoder::from_board(&board).unwrap();
        b.iter(|| {
            let outcome = decoder.decode(black_box(&words), EVENTS);
            black_box(outcome.blocks.len())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    decode_fixed_benchmark,
    decode_zero_suppressed_benchmark
);
criterion_main!(benches);
