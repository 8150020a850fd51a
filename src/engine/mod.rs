//! The replacement simulation engine.
//!
//! # Components
//! - [`ReplacementEngine`] - runs one policy over a reference sequence
//! - [`Policy`] - the closed set of policies
//! - [`Simulation`] - the resulting step trace with random access
//! - [`StepRecord`] / [`Action`] - one processed reference
//! - [`SimulationResult`] - totals and rates

mod policy;
mod replacement_engine;
mod result;
mod simulation;
mod step;

pub use policy::Policy;
pub use replacement_engine::{run, ReplacementEngine};
pub use result::SimulationResult;
pub use simulation::Simulation;
pub use step::{Action, StepRecord};
