mod geometry;
mod types;

pub use geometry::{calculate_crossing, find_crossing};
pub use types::{Crossing, CrossingFact};

use crate::models::Train;
use std::iter::FusedIterator;

/// Number of unordered pairs among `train_count` trains
#[must_use]
pub const fn pair_count(train_count: usize) -> usize {
    train_count * train_count.saturating_sub(1) / 2
}

/// Lazily checks every unordered pair `(i, j)` with `i < j`, in index order,
/// yielding a fact for each pair that crosses.
///
/// Cloning the iterator (or calling `analyze_all_pairs` again) restarts the
/// analysis; the trains are only read.
#[derive(Debug, Clone)]
pub struct CrossingPairs<'a> {
    trains: &'a [Train],
    speed_tolerance: f64,
    i: usize,
    j: usize,
    evaluated: usize,
}

impl<'a> CrossingPairs<'a> {
    fn new(trains: &'a [Train], speed_tolerance: f64) -> Self {
        Self {
            trains,
            speed_tolerance,
            i: 0,
            j: 1,
            evaluated: 0,
        }
    }

    /// Pairs checked so far, whether or not they crossed
    #[must_use]
    pub fn pairs_evaluated(&self) -> usize {
        self.evaluated
    }

    fn next_pair(&mut self) -> Option<(usize, usize)> {
        while self.i < self.trains.len() {
            if self.j < self.trains.len() {
                let pair = (self.i, self.j);
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

impl Iterator for CrossingPairs<'_> {
    type Item = CrossingFact;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((i, j)) = self.next_pair() {
            self.evaluated += 1;
            let (train1, train2) = (&self.trains[i], &self.trains[j]);
            if let Some(crossing) = calculate_crossing(train1, train2, self.speed_tolerance) {
                return Some(CrossingFact {
                    train1_idx: i,
                    train2_idx: j,
                    train1_name: train1.name.clone(),
                    train2_name: train2.name.clone(),
                    crossing,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(pair_count(self.trains.len()) - self.evaluated))
    }
}

impl FusedIterator for CrossingPairs<'_> {}

/// Crossings between every pair of trains, using exact speed equality
#[must_use]
pub fn analyze_all_pairs(trains: &[Train]) -> CrossingPairs<'_> {
    CrossingPairs::new(trains, 0.0)
}

/// Crossings between every pair of trains, treating speeds within `speed_tolerance` as equal
#[must_use]
pub fn analyze_all_pairs_with_tolerance(trains: &[Train], speed_tolerance: f64) -> CrossingPairs<'_> {
    CrossingPairs::new(trains, speed_tolerance)
}
