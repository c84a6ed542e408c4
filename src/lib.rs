//! Crystalizer: a per-channel high-frequency enhancement filter.
//!
//! The filter amplifies the difference between each sample and the previous
//! sample on the same channel, scaled by an intensity factor, in place over
//! interleaved float blocks. A host owns the process loop and the logger;
//! this crate owns the transform, its state, and its parameter surface.

pub mod dsp;
pub mod params;
pub mod plugin;

pub use dsp::crystalizer::Crystalizer;
pub use params::ParamError;
