//! Readout decoder CLI application.
//!
//! Decodes raw word files from a back-end board into per-trigger events and
//! prints the register maps of the supported readout chips.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use readout_core::decoder::read_words;
use readout_core::{
    output, BoardDescription, BoardType, ChipDescription, ChipFamily, EventType,
    HybridDescription, Pipeline, ReadoutLayout,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Front-end readout decoder for tracker back-end boards.
#[derive(Parser, Debug)]
#[command(name = "readout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug messages (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a raw word file into events
    Decode {
        /// Raw file of little-endian 32-bit words
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Board description (TOML)
        #[arg(short, long, value_name = "PATH")]
        board: PathBuf,

        /// Number of triggers in the acquisition
        ///
        /// Decoding stops after this many events. Without it, the whole file
        /// is decoded.
        #[arg(short, long)]
        triggers: Option<usize>,

        /// Write one CSV row per chip frame to this file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the register table of a chip family
    Registers {
        /// Chip family (rd53b, croc)
        #[arg(value_name = "FAMILY")]
        family: ChipFamily,

        /// Show the field layout of a single register
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Write a template board description
    Board {
        /// Output path for the board description
        #[arg(short, long, default_value = "board.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the tables and summaries
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Decode {
            input,
            board,
            triggers,
            output,
            quiet,
        } => run_decode(input, board, triggers, output, quiet),
        Commands::Registers { family, name } => run_registers(family, name),
        Commands::Board { output } => run_board_template(output),
    }
}

fn run_decode(
    input: PathBuf,
    board_path: PathBuf,
    triggers: Option<usize>,
    output_path: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let board = BoardDescription::load(&board_path)
        .with_context(|| format!("Failed to load board description {:?}", board_path))?;
    info!(
        board = ?board.board_type,
        event_type = ?board.event_type,
        chips = board.chip_count(),
        "loaded board description"
    );

    // Setup progress bar
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .context("Invalid progress template")?,
        );
        pb
    };

    let start_time = Instant::now();
    progress.set_message(format!(
        "Decoding {:?}...",
        input.file_name().unwrap_or_default()
    ));

    let words = read_words(&input).with_context(|| format!("Failed to read {:?}", input))?;
    // Without a trigger count, take every whole event in the file
    let trigger_count = triggers.unwrap_or(match board.event_type {
        EventType::Fixed => words.len() / board.event_size_words(),
        EventType::ZeroSuppressed => usize::MAX,
    });

    let mut pipeline = Pipeline::new(&board).context("Invalid readout layout")?;
    let batch = pipeline.run(&words, trigger_count);

    let duration = start_time.elapsed();
    progress.finish_with_message(format!(
        "Done! Assembled {} events in {:.2}s",
        batch.events.len(),
        duration.as_secs_f64()
    ));

    if let Some(err) = &batch.error {
        warn!("decode pass stopped early: {err}");
    }

    if let Some(path) = &output_path {
        output::write_frames_csv(path, &batch.events)
            .with_context(|| format!("Failed to write frame CSV {:?}", path))?;
    }

    let frames: usize = batch.events.iter().map(|e| e.frames.len()).sum();
    let skipped: usize = batch.events.iter().map(|e| e.skipped_frames).sum();
    let size_mismatches = batch.events.iter().filter(|e| e.size_mismatch).count();
    let unresolved = batch
        .events
        .iter()
        .flat_map(|e| &e.frames)
        .filter(|f| !f.chip.is_resolved())
        .count();
    let chip_errors = batch
        .events
        .iter()
        .flat_map(|e| &e.frames)
        .filter(|f| f.error_code != 0)
        .count();

    if !quiet {
        println!();
        println!("Summary:");
        println!("  Input:        {:?}", input);
        println!("  Board:        {:?}", board_path);
        if let Some(path) = &output_path {
            println!("  Output:       {:?}", path);
        }
        println!("  Events:       {}", batch.events.len());
        println!("  Frames:       {}", frames);
        println!("  Unresolved:   {}", unresolved);
        println!("  Skipped:      {}", skipped);
        println!("  Size errors:  {}", size_mismatches);
        println!("  Chip errors:  {}", chip_errors);
        println!("  Complete:     {}", batch.is_complete());
        println!("  Duration:     {:.3}s", duration.as_secs_f64());
    }

    match batch.error {
        Some(err) => Err(err).context("Raw data is misaligned"),
        None => Ok(()),
    }
}

fn run_registers(family: ChipFamily, name: Option<String>) -> Result<()> {
    let table = family
        .table()
        .with_context(|| format!("Failed to build {} register table", family))?;

    if let Some(name) = name {
        let reg = table
            .by_name(&name)
            .with_context(|| format!("No register {:?} in {} table", name, family))?;
        println!(
            "{} @ {}  ({} bits, default {:#06x}{})",
            reg.name(),
            reg.address(),
            reg.size(),
            reg.default_value(),
            if reg.is_read_only() { ", read-only" } else { "" }
        );
        // Most significant field first, as listed in the chip manual
        for (i, field) in reg.fields().iter().rev().enumerate() {
            let high = u32::from(field.offset) + u32::from(field.width) - 1;
            println!(
                "  field {:<2} [{:>2}:{:<2}]  width {:<2}  default {}",
                i, high, field.offset, field.width, field.default
            );
        }
        return Ok(());
    }

    println!("{} register table, {} registers", family, table.len());
    for reg in table.registers() {
        println!(
            "{:>4}  {:<32} {:>2} bits  {:#06x}  {}",
            reg.address(),
            reg.name(),
            reg.size(),
            reg.default_value(),
            if reg.is_read_only() { "ro" } else { "rw" }
        );
    }
    Ok(())
}

fn run_board_template(output: PathBuf) -> Result<()> {
    let board = BoardDescription {
        board_type: BoardType::D19c,
        event_type: EventType::Fixed,
        chip_family: Some(ChipFamily::Croc),
        layout: ReadoutLayout::new(4, 1, 11),
        hybrids: vec![HybridDescription {
            id: 0,
            chips: (0..4)
                .map(|lane| ChipDescription { id: 12 + lane, lane })
                .collect(),
        }],
    };
    board
        .save(&output)
        .with_context(|| format!("Failed to write board description {:?}", output))?;
    info!("wrote board description template to {:?}", output);
    Ok(())
}
