use ahash::HashSet;
use bumpalo::{
  Bump,
  collections::{CollectIn, Vec},
};
use itertools::Itertools;
use strsim::normalized_levenshtein;

use crate::matching::sequence::{SequenceMatcher, sequence_ratio};

const WINKLER_SCALING: f64 = 0.1;
const WINKLER_MAX_PREFIX: usize = 4;

/// `1 - distance / longest length`, in characters.
///
/// Two empty strings are identical (1.0), a single empty string shares nothing
/// with the other one (0.0).
#[inline]
pub fn levenshtein_similarity(lhs: &str, rhs: &str) -> f64 {
  normalized_levenshtein(lhs, rhs)
}

/// Jaro similarity with a Winkler prefix boost.
///
/// The boost is applied whatever the Jaro similarity, for up to four leading
/// common characters.
pub fn jaro_winkler(lhs: &str, rhs: &str) -> f64 {
  if lhs == rhs {
    return 1.0;
  }
  if lhs.is_empty() || rhs.is_empty() {
    return 0.0;
  }

  let lhs = lhs.chars().collect::<std::vec::Vec<_>>();
  let rhs = rhs.chars().collect::<std::vec::Vec<_>>();
  let window = (lhs.len().max(rhs.len()) / 2).saturating_sub(1);

  let mut lhs_matched = vec![false; lhs.len()];
  let mut rhs_matched = vec![false; rhs.len()];
  let mut matches = 0usize;

  for (i, c) in lhs.iter().enumerate() {
    let start = i.saturating_sub(window);
    let end = (i + window + 1).min(rhs.len());

    for j in start..end {
      if rhs_matched[j] || rhs[j] != *c {
        continue;
      }

      lhs_matched[i] = true;
      rhs_matched[j] = true;
      matches += 1;

      break;
    }
  }

  if matches == 0 {
    return 0.0;
  }

  let mut transpositions = 0usize;
  let mut k = 0;

  for (i, c) in lhs.iter().enumerate() {
    if !lhs_matched[i] {
      continue;
    }

    while !rhs_matched[k] {
      k += 1;
    }

    if rhs[k] != *c {
      transpositions += 1;
    }

    k += 1;
  }

  let m = matches as f64;
  let jaro = (m / lhs.len() as f64 + m / rhs.len() as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0;
  let prefix = lhs.iter().zip(rhs.iter()).take(WINKLER_MAX_PREFIX).take_while(|(l, r)| l == r).count();

  jaro + prefix as f64 * WINKLER_SCALING * (1.0 - jaro)
}

/// Jaccard similarity of the sets of character n-grams.
pub fn ngram_similarity(lhs: &str, rhs: &str, n: usize) -> f64 {
  let lhs = lhs.chars().collect::<std::vec::Vec<_>>();
  let rhs = rhs.chars().collect::<std::vec::Vec<_>>();

  if n == 0 || lhs.len() < n || rhs.len() < n {
    return 0.0;
  }

  let lhs_grams = lhs.windows(n).collect::<HashSet<_>>();
  let rhs_grams = rhs.windows(n).collect::<HashSet<_>>();

  jaccard(&lhs_grams, &rhs_grams)
}

/// Order-insensitive token comparison.
///
/// Best of the Jaccard similarity of the token sets and the sequence ratio of
/// the alphabetically sorted, space-joined unique tokens.
pub fn token_set_ratio(bump: &Bump, lhs: &str, rhs: &str) -> f64 {
  let lhs_tokens = lhs.split_whitespace().collect::<HashSet<_>>();
  let rhs_tokens = rhs.split_whitespace().collect::<HashSet<_>>();

  if lhs_tokens.is_empty() || rhs_tokens.is_empty() {
    return 0.0;
  }

  let base = jaccard(&lhs_tokens, &rhs_tokens);

  let lhs_sorted = lhs_tokens.iter().sorted().join(" ");
  let rhs_sorted = rhs_tokens.iter().sorted().join(" ");

  base.max(sequence_ratio(bump, &lhs_sorted, &rhs_sorted))
}

/// Best sequence ratio of the shorter string against every same-length window
/// of the longer one.
pub fn partial_ratio(bump: &Bump, lhs: &str, rhs: &str) -> f64 {
  if lhs.is_empty() || rhs.is_empty() {
    return 0.0;
  }

  let lhs = lhs.chars().collect_in::<Vec<_>>(bump);
  let rhs = rhs.chars().collect_in::<Vec<_>>(bump);
  let (shorter, longer) = if lhs.len() > rhs.len() { (&rhs, &lhs) } else { (&lhs, &rhs) };

  let mut best = 0.0f64;

  for window in longer.windows(shorter.len()) {
    best = best.max(SequenceMatcher::new(shorter, window).ratio());

    if best >= 1.0 {
      break;
    }
  }

  best
}

/// `1 - |len(a) - len(b)| / max(len(a), len(b))`, 0.0 for two empty strings.
pub fn length_similarity(lhs: &str, rhs: &str) -> f64 {
  let (lhs, rhs) = (lhs.chars().count(), rhs.chars().count());
  let longest = lhs.max(rhs);

  if longest == 0 {
    return 0.0;
  }

  1.0 - lhs.abs_diff(rhs) as f64 / longest as f64
}

#[inline]
pub fn common_prefix_length(lhs: &str, rhs: &str) -> usize {
  lhs.chars().zip(rhs.chars()).take_while(|(l, r)| l == r).count()
}

#[inline]
pub fn common_suffix_length(lhs: &str, rhs: &str) -> usize {
  lhs.chars().rev().zip(rhs.chars().rev()).take_while(|(l, r)| l == r).count()
}

fn jaccard<T: Eq + std::hash::Hash>(lhs: &HashSet<T>, rhs: &HashSet<T>) -> f64 {
  let union = lhs.union(rhs).count();

  if union == 0 {
    return 0.0;
  }

  lhs.intersection(rhs).count() as f64 / union as f64
}
