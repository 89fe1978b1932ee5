//! Use cases (application services)
//!
//! - [`run_round`]: one concurrent round over the active providers
//! - [`tally_votes`]: the vote round and its tally
//! - [`run_ensemble`]: the full answer → vote → result flow

pub mod run_ensemble;
pub mod run_round;
pub mod tally_votes;
