//! Page replacement simulator CLI.

use clap::Parser;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use pagesim::common::config::DEFAULT_FRAMES;
use pagesim::{parse_references, trace, Policy, ReplacementEngine, Result, Scenario, Simulation};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Step-by-step FIFO / LRU / Optimal / Clock page replacement simulator",
    long_about = None,
)]
struct Cli {
    /// Number of memory frames (defaults to the preset's, or 3).
    #[arg(short = 'n', long)]
    frames: Option<usize>,

    /// Reference string, e.g. "7,0,1,2,0,3".
    #[arg(short = 'r', long, conflicts_with = "preset")]
    refs: Option<String>,

    /// Preset scenario: light, normal, heavy, worst.
    #[arg(short = 'p', long)]
    preset: Option<Scenario>,

    /// Policy to run; repeat for several. Runs all four when omitted.
    #[arg(short = 'a', long = "policy")]
    policies: Vec<Policy>,

    /// Directory to write one trace file per policy into.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Emit each simulation as JSON.
    #[arg(long, conflicts_with_all = ["output", "compare"])]
    json: bool,

    /// Print one summary line per policy instead of full traces.
    #[arg(long)]
    compare: bool,

    /// Show only this step (1-based).
    #[arg(
        long,
        conflicts_with_all = ["output", "compare", "json"],
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
    )]
    step: Option<usize>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = build_engine(&cli)?;
    let policies = if cli.policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        cli.policies.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.compare {
        writeln!(
            out,
            "{:<8} {:>7} {:>6} {:>9} {:>11}",
            "POLICY", "FAULTS", "HITS", "HIT RATE", "FAULT RATE"
        )?;
    }

    for policy in policies {
        let sim = engine.run(policy);

        if cli.compare {
            let r = sim.result();
            writeln!(
                out,
                "{:<8} {:>7} {:>6} {:>8.2}% {:>10.2}%",
                policy.name(),
                r.page_faults,
                r.page_hits,
                r.hit_rate,
                r.fault_rate
            )?;
        } else if cli.json {
            let json = serde_json::to_string_pretty(&sim).map_err(io::Error::from)?;
            writeln!(out, "{}", json)?;
        } else if let Some(n) = cli.step {
            print_step(&mut out, &sim, n)?;
        } else if let Some(dir) = &cli.output {
            let path = dir.join(trace::default_file_name(&sim));
            trace::export_to_path(&sim, &path)?;
            writeln!(out, "{} -> {}", policy, path.display())?;
        } else {
            trace::write_trace(&sim, &mut out)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn build_engine(cli: &Cli) -> Result<ReplacementEngine> {
    if let Some(text) = &cli.refs {
        let references = parse_references(text)?;
        let frames = cli.frames.unwrap_or(DEFAULT_FRAMES);
        debug!("custom workload: {} frames, {} references", frames, references.len());
        return ReplacementEngine::new(frames, references);
    }

    let preset = match cli.preset {
        Some(preset) => preset,
        None => "normal".parse()?,
    };
    debug!("preset workload: {}", preset.name);
    ReplacementEngine::new(cli.frames.unwrap_or(preset.frames), preset.references())
}

fn print_step<W: Write>(out: &mut W, sim: &Simulation, n: usize) -> Result<()> {
    let step = sim.step_number(n)?;
    let stats = sim.stats_through(step.step - 1)?;
    let pad = sim.capacity().saturating_sub(step.after.len());
    let slots: Vec<String> = step
        .after
        .iter()
        .map(|p| p.to_string())
        .chain(std::iter::repeat("-".to_string()).take(pad))
        .collect();

    writeln!(out, "[{}] step {}/{}: page {}", sim.policy(), step.step, sim.len(), step.page)?;
    writeln!(out, "  frames: [{}]", slots.join(" | "))?;
    writeln!(out, "  {}", step.description)?;
    writeln!(
        out,
        "  so far: {} faults, {} hits, {:.1}% hit rate, {:.0}% utilization",
        stats.page_faults,
        stats.page_hits,
        stats.hit_rate,
        sim.utilization_at(step.step - 1)?
    )?;
    Ok(())
}
