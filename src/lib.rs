//! Deterministic week-by-week projection of body composition, blood markers
//! and organ-risk scores for a compound regimen.
//!
//! Each simulated week runs five sub-models in order: pharmacokinetics,
//! hormonal state, energetics, body composition and organ health. The
//! [`simulation::Simulator`] drives that loop and hands the peak-risk week to
//! the synthesis step.

pub mod compounds;
pub mod config;
pub mod dosing;
pub mod error;
pub mod models;
pub mod output;
pub mod simulation;
pub mod text;

pub use compounds::{CompoundLookup, KnowledgeBase};
pub use config::SimulationInput;
pub use error::{EngineError, EngineResult};
pub use simulation::{validate_simulation, SimulationResult, Simulator};
