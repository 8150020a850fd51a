//! pagesim - A step-by-step page replacement simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Consumers (trace export, CLI, visualizers)        │   │
//! │  │     read-only: Simulation::step(n), result()             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Engine (engine/)                         │   │
//! │  │   ReplacementEngine: shared step loop → Simulation       │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacers: FIFO | LRU | OPTIMAL | CLOCK       │   │   │
//! │  │   │         (selected by the Policy enum)           │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   Inputs: SimulationConfig, parse_references, presets    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`replacer`] - Per-policy resident-set bookkeeping
//! - [`engine`] - The step loop, step records and results
//! - [`scenario`] - Preset workloads
//! - [`trace`] - Plain-text trace export
//!
//! # Quick Start
//! ```
//! use pagesim::{parse_references, Policy, ReplacementEngine};
//!
//! let refs = parse_references("7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1").unwrap();
//! let engine = ReplacementEngine::new(3, refs).unwrap();
//!
//! let sim = engine.run(Policy::Fifo);
//! assert_eq!(sim.result().page_faults, 15);
//!
//! // Jump straight to any step
//! let step = sim.step(3).unwrap();
//! assert_eq!(step.description, "Fault: Replace page 7 with page 2");
//! ```

pub mod common;
pub mod engine;
pub mod replacer;
pub mod scenario;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{parse_references, Error, PageId, Result, SimulationConfig};
pub use engine::{run, Action, Policy, ReplacementEngine, Simulation, SimulationResult, StepRecord};
pub use scenario::{Scenario, PRESETS};
