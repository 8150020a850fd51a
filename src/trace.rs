//! Plain-text execution trace export.
//!
//! Writes the per-step trace and summary of a [`Simulation`] in the
//! format the simulator's "export trace" action produces:
//!
//! ```text
//! OS MEMORY SIMULATOR - EXECUTION TRACE
//! =====================================
//! Algorithm: FIFO
//! Frames: 3
//! ...
//! Step 1: Page Reference = 7
//!   Memory Before: [empty]
//!   Memory After:  [7]
//!   Action: Load: Page 7 loaded into empty frame
//!   Fault: YES
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::common::{Error, PageId, Result};
use crate::engine::Simulation;

const RULE: &str = "=====================================";

/// Write the trace of `sim` to `out`.
///
/// # Errors
/// - `Error::EmptyTrace` if the simulation has no steps
/// - `Error::Io` if writing fails
pub fn write_trace<W: Write>(sim: &Simulation, out: &mut W) -> Result<()> {
    if sim.is_empty() {
        return Err(Error::EmptyTrace);
    }

    writeln!(out, "OS MEMORY SIMULATOR - EXECUTION TRACE")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Algorithm: {}", sim.policy())?;
    writeln!(out, "Frames: {}", sim.capacity())?;
    writeln!(out, "Reference String: {}", join(sim.references()))?;
    writeln!(out, "Total References: {}", sim.references().len())?;
    writeln!(out)?;

    writeln!(out, "DETAILED TRACE:")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    for step in sim {
        writeln!(out, "Step {}: Page Reference = {}", step.step, step.page)?;
        writeln!(out, "  Memory Before: [{}]", frames(&step.before))?;
        writeln!(out, "  Memory After:  [{}]", frames(&step.after))?;
        writeln!(out, "  Action: {}", step.description)?;
        writeln!(out, "  Fault: {}", if step.page_fault { "YES" } else { "NO" })?;
        writeln!(out)?;
    }

    let result = sim.result();
    writeln!(out, "SUMMARY STATISTICS:")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total Page Faults: {}", result.page_faults)?;
    writeln!(out, "Total Page Hits: {}", result.page_hits)?;
    writeln!(out, "Hit Rate: {:.2}%", result.hit_rate)?;
    writeln!(out, "Fault Rate: {:.2}%", result.fault_rate)?;
    Ok(())
}

/// Render the trace of `sim` into a string.
///
/// # Errors
/// - `Error::EmptyTrace` if the simulation has no steps
pub fn render_trace(sim: &Simulation) -> Result<String> {
    let mut buf = Vec::new();
    write_trace(sim, &mut buf)?;
    // Everything written above is formatted from UTF-8 strings.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the trace of `sim` to a new file at `path`.
///
/// # Errors
/// - `Error::EmptyTrace` if the simulation has no steps; no file is created
/// - `Error::Io` if the file cannot be created or written
pub fn export_to_path(sim: &Simulation, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if sim.is_empty() {
        return Err(Error::EmptyTrace);
    }

    let mut out = BufWriter::new(File::create(path)?);
    write_trace(sim, &mut out)?;
    out.flush()?;

    info!("wrote {} trace ({} steps) to {}", sim.policy(), sim.len(), path.display());
    Ok(())
}

/// Default file name for an exported trace of `sim`.
pub fn default_file_name(sim: &Simulation) -> String {
    format!("pagesim-trace-{}.txt", sim.policy().name().to_lowercase())
}

fn join(pages: &[PageId]) -> String {
    pages
        .iter()
        .map(PageId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn frames(pages: &[PageId]) -> String {
    if pages.is_empty() {
        "empty".to_string()
    } else {
        join(pages)
    }
}
