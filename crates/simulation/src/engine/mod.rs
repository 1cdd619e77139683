//! Calculation engine: maps the five slider inputs to the projected annual
//! indicators.
//!
//! The engine is a pure function ([`evaluate`]). The plugin wraps it in a
//! single system that recomputes [`ProjectedOutputs`] whenever the inputs or
//! the baseline change, so every slider interaction triggers one full
//! recomputation and nothing else is retained between frames.

pub mod calculations;
pub mod systems;
pub mod types;

#[cfg(test)]
mod tests_calculations;
#[cfg(test)]
mod tests_properties;

pub use calculations::*;
pub use systems::*;
pub use types::*;
