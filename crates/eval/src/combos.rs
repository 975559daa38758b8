// Copyright (C) 2025 The Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! K-subsets enumeration.
//!
//! Iterative generation of all the k elements combinations of a sequence,
//! used to expand a 7 cards hand into its twenty-one 5 cards sub-hands.

/// Returns the binomial coefficient for n choose k.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k), the smaller side keeps products small.
    let k = k.min(n - k);
    (0..k).fold(1, |b, i| b * (n - i) / (i + 1))
}

/// Returns an iterator over all the k elements combinations of `items`.
///
/// Every subset is visited exactly once and preserves the relative order of
/// `items`; the order subsets come out in is deterministic but carries no
/// ranking meaning. Iterating again over the same items yields the same
/// sequence.
///
/// ```
/// # use showdown_eval::combos::{binomial, combinations};
/// let hands = combinations(&[1, 2, 3, 4, 5, 6, 7], 5).count();
/// assert_eq!(hands, binomial(7, 5));
/// ```
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations::new(items, k)
}

/// Iterator over the k elements combinations of a slice.
///
/// See [combinations].
pub struct Combinations<'a, T> {
    items: &'a [T],
    // Index counters c[1..=k] plus sentinels (Algorithm L, TAOCP 4a).
    c: Vec<usize>,
    k: usize,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    fn new(items: &'a [T], k: usize) -> Self {
        let mut c = vec![0usize; k + 3];
        for i in 1..=k {
            c[i] = i - 1;
        }
        c[k + 1] = items.len();

        Self {
            items,
            c,
            k,
            done: k > items.len(),
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self.c[1..=self.k]
            .iter()
            .map(|&pos| self.items[pos].clone())
            .collect();

        // Advance the leftmost counter that has room, resetting the
        // counters below it.
        let mut j = 1;
        while self.c[j] + 1 == self.c[j + 1] {
            self.c[j] = j - 1;
            j += 1;
        }

        if j > self.k {
            self.done = true;
        } else {
            self.c[j] += 1;
        }

        Some(subset)
    }
}
