//! Core library for a Game-of-Life family cellular automaton on a torus.

pub mod engine;
pub mod rules;

pub use engine::{Engine, Grid, GridError};
pub use rules::RuleSet;
