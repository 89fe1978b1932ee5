//! Vote tally and winner selection

use super::vote::Ballot;
use serde::{Deserialize, Serialize};

/// Valid-vote counts per candidate, indexed 1..=N
///
/// The sum of counts never exceeds the number of ballots recorded: a dropped
/// ballot or an out-of-range choice adds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    counts: Vec<usize>,
}

impl VoteTally {
    /// Empty tally for `candidates` candidates
    pub fn new(candidates: usize) -> Self {
        Self {
            counts: vec![0; candidates],
        }
    }

    /// Tally every counted ballot
    pub fn from_ballots<'a>(candidates: usize, ballots: impl IntoIterator<Item = &'a Ballot>) -> Self {
        let mut tally = Self::new(candidates);
        for choice in ballots.into_iter().filter_map(Ballot::choice) {
            tally.record(choice);
        }
        tally
    }

    /// Count one vote for a 1-based index; returns false if out of range
    pub fn record(&mut self, index: usize) -> bool {
        match index.checked_sub(1).and_then(|i| self.counts.get_mut(i)) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn candidates(&self) -> usize {
        self.counts.len()
    }

    /// Votes for a 1-based index (0 when out of range)
    pub fn count(&self, index: usize) -> usize {
        index
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(index, count)` pairs with 1-based indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().enumerate().map(|(i, c)| (i + 1, *c))
    }

    /// Highest count wins; ties go to the lowest index
    ///
    /// With no votes at all every index is tied at zero, so index 1 wins.
    /// `None` only when there are no candidates.
    pub fn winner(&self) -> Option<usize> {
        self.winner_among(|_| true)
    }

    /// [`winner`](Self::winner) restricted to indices accepted by `eligible`
    pub fn winner_among(&self, eligible: impl Fn(usize) -> bool) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, count) in self.iter().filter(|(i, _)| eligible(*i)) {
            // strict `>` keeps the earliest index on ties
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| index)
    }
}
