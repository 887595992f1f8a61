//! Longest-matching-blocks similarity between two character sequences.
//!
//! This is the classic "gestalt pattern matching" ratio: find the longest
//! common block, recurse on both sides of it, and report `2 * M / T` where `M`
//! is the number of matched characters and `T` the total length of both
//! sequences. Block selection (leftmost-longest, then popular-element pruning
//! for long second sequences) follows the reference sequence matcher so
//! ratios are reproducible digit for digit.

use ahash::HashMap;
use bumpalo::{
  Bump,
  collections::{CollectIn, Vec},
};

/// Second sequences this long have their most frequent elements pruned from
/// the index.
const AUTOJUNK_MIN_LEN: usize = 200;

pub(crate) struct SequenceMatcher<'s> {
  lhs: &'s [char],
  rhs: &'s [char],
  rhs_index: HashMap<char, std::vec::Vec<usize>>,
}

impl<'s> SequenceMatcher<'s> {
  pub(crate) fn new(lhs: &'s [char], rhs: &'s [char]) -> SequenceMatcher<'s> {
    let mut rhs_index: HashMap<char, std::vec::Vec<usize>> = HashMap::default();

    for (j, c) in rhs.iter().enumerate() {
      rhs_index.entry(*c).or_default().push(j);
    }

    if rhs.len() >= AUTOJUNK_MIN_LEN {
      let popular = rhs.len() / 100 + 1;

      rhs_index.retain(|_, positions| positions.len() <= popular);
    }

    SequenceMatcher { lhs, rhs, rhs_index }
  }

  /// Longest block `(i, j, size)` with `lhs[i..i+size] == rhs[j..j+size]`
  /// inside the given bounds, preferring the earliest `i`, then the earliest
  /// `j`.
  fn longest_match(&self, lo: (usize, usize), hi: (usize, usize)) -> (usize, usize, usize) {
    let ((alo, blo), (ahi, bhi)) = (lo, hi);
    let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

    let mut run_lengths: HashMap<usize, usize> = HashMap::default();
    let mut next_run_lengths: HashMap<usize, usize> = HashMap::default();

    for i in alo..ahi {
      if let Some(positions) = self.rhs_index.get(&self.lhs[i]) {
        for &j in positions {
          if j < blo {
            continue;
          }
          if j >= bhi {
            break;
          }

          let k = j.checked_sub(1).and_then(|prev| run_lengths.get(&prev)).copied().unwrap_or(0) + 1;

          next_run_lengths.insert(j, k);

          if k > bestsize {
            besti = i + 1 - k;
            bestj = j + 1 - k;
            bestsize = k;
          }
        }
      }

      std::mem::swap(&mut run_lengths, &mut next_run_lengths);
      next_run_lengths.clear();
    }

    // Pruned elements never seed a block, but they may still extend one.
    while besti > alo && bestj > blo && self.lhs[besti - 1] == self.rhs[bestj - 1] {
      besti -= 1;
      bestj -= 1;
      bestsize += 1;
    }

    while besti + bestsize < ahi && bestj + bestsize < bhi && self.lhs[besti + bestsize] == self.rhs[bestj + bestsize] {
      bestsize += 1;
    }

    (besti, bestj, bestsize)
  }

  /// Total number of characters covered by matching blocks.
  pub(crate) fn matched(&self) -> usize {
    let mut queue = vec![((0, 0), (self.lhs.len(), self.rhs.len()))];
    let mut matched = 0;

    while let Some(((alo, blo), (ahi, bhi))) = queue.pop() {
      let (i, j, size) = self.longest_match((alo, blo), (ahi, bhi));

      if size == 0 {
        continue;
      }

      matched += size;

      if alo < i && blo < j {
        queue.push(((alo, blo), (i, j)));
      }
      if i + size < ahi && j + size < bhi {
        queue.push(((i + size, j + size), (ahi, bhi)));
      }
    }

    matched
  }

  pub(crate) fn ratio(&self) -> f64 {
    let total = self.lhs.len() + self.rhs.len();

    if total == 0 {
      return 1.0;
    }

    2.0 * self.matched() as f64 / total as f64
  }
}

/// Sequence ratio of two strings, compared character by character.
pub fn sequence_ratio(bump: &Bump, lhs: &str, rhs: &str) -> f64 {
  let lhs = lhs.chars().collect_in::<Vec<_>>(bump);
  let rhs = rhs.chars().collect_in::<Vec<_>>(bump);

  SequenceMatcher::new(&lhs, &rhs).ratio()
}
