//! Orchestration domain - phases of a boardroom run

pub mod phase;

pub use phase::Phase;
