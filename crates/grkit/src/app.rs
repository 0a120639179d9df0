//! Demo walk-through of the arena and the dynamic array.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use grkit_memory::{Arena, ArenaStats, DynArray};

use crate::config::DemoConfig;

/// Final state reported by `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Arena accounting after the arena steps (before reset).
    pub arena: ArenaStats,
    /// Dynamic array state after the remove steps (before clear).
    pub array: ArrayReport,
}

/// Dynamic array state.
#[derive(Debug, Serialize)]
pub struct ArrayReport {
    /// Live element count.
    pub count: usize,
    /// Allocated slots.
    pub capacity: usize,
    /// Live elements in slot order.
    pub elements: Vec<i32>,
}

/// Run the demo, writing to stdout.
pub fn run(config: &DemoConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(config, &mut out)
}

/// Run the demo, writing to `out`.
pub fn run_with_writer<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let quiet = config.json;

    let arena_stats = arena_demo(config.arena_size, out, quiet)?;
    let array = array_demo(config.count, config.remove_at, out, quiet)?;

    if config.json {
        let report = Report {
            arena: arena_stats,
            array,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    }
    Ok(())
}

fn arena_demo<W: Write>(size: usize, out: &mut W, quiet: bool) -> Result<ArenaStats> {
    info!(size, "arena demo");
    let mut arena = Arena::try_with_capacity(size)?;

    let slot = arena.alloc(std::mem::size_of::<i32>())?;
    slot.copy_from_slice(&5i32.to_ne_bytes());
    let x = i32::from_ne_bytes(slot[..4].try_into().context("i32 slot")?);

    let first = arena.alloc_str("gr.h demo app")?;
    let second = arena.alloc_str("a demo for gr.h library")?;
    let (a, b) = (&first[..4], &second[11..15]);

    let stats = arena.stats();
    if !quiet {
        writeln!(out, "arena")?;
        writeln!(out, "arena.capacity: {}", stats.capacity)?;
        writeln!(out, "arena.used: {}", stats.used)?;
        writeln!(out, "arena.avail: {}", stats.available)?;
        writeln!(out, "x: {x}")?;
        writeln!(out, "views: {a:?} {b:?} equal={}", a == b)?;
    }

    arena.reset();
    Ok(stats)
}

fn array_demo<W: Write>(
    count: usize,
    remove_at: usize,
    out: &mut W,
    quiet: bool,
) -> Result<ArrayReport> {
    info!(count, remove_at, "dynarray demo");
    let mut arr: DynArray<i32> = DynArray::new();

    for i in 0..count {
        let value = i32::try_from(i * 10).context("element value exceeds i32")?;
        arr.append(value)?;
    }
    print_array(out, quiet, "appended", &arr)?;

    arr.swap_remove(remove_at)?;
    print_array(out, quiet, &format!("swap remove at i={remove_at}"), &arr)?;

    arr.remove(remove_at)?;
    print_array(out, quiet, &format!("remove at i={remove_at}"), &arr)?;

    let report = ArrayReport {
        count: arr.count(),
        capacity: arr.capacity(),
        elements: arr.as_slice().to_vec(),
    };

    arr.clear();
    print_array(out, quiet, "cleared array", &arr)?;

    arr.free();
    Ok(report)
}

fn print_array<W: Write>(
    out: &mut W,
    quiet: bool,
    label: &str,
    arr: &DynArray<i32>,
) -> Result<()> {
    if quiet {
        return Ok(());
    }
    writeln!(
        out,
        "{label} (count={}, capacity={})",
        arr.count(),
        arr.capacity()
    )?;
    for value in arr {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
