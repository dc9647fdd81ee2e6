use std::array;

/// Number of ways to choose `k` elements out of `n`, zero when `k > n`.
#[must_use]
pub const fn n_choose_k(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k < n - k { k } else { n - k };
    let mut result: u64 = 1;
    let mut i = 1;
    while i <= k {
        // Exact at every step, result is C(n - k + i, i)
        result = result * (n - k + i) as u64 / i as u64;
        i += 1;
    }
    result
}

/// Every `K`-element subset of `items`, in lexicographic order of positions.
///
/// For `items = 0..n` this is exactly the order counted by
/// [`rank_combination`](crate::rank::rank_combination): the n-th item yielded
/// has rank n.
pub struct Combinations<T, const K: usize> {
    indices: [usize; K],
    items: Vec<T>,
    exhausted: bool,
}
impl<T: Copy, const K: usize> Combinations<T, K> {
    #[must_use]
    pub fn new(items: &[T]) -> Self {
        Self {
            indices: array::from_fn(|index| index),
            items: items.to_vec(),
            exhausted: K > items.len(),
        }
    }
    fn increment_indices(&mut self) {
        let n = self.items.len();

        // For each index
        for index in (0..K).rev() {
            // See if it can be incremented
            if self.indices[index] != index + n - K {
                self.indices[index] += 1;

                // All indices to the right are at the maximum allowed value, so reset them
                for right_index in index + 1..K {
                    self.indices[right_index] = self.indices[right_index - 1] + 1;
                }

                return;
            }
        }
        self.exhausted = true;
    }
}
impl<const K: usize> Combinations<usize, K> {
    /// Subsets of the deck `0..n`.
    #[must_use]
    pub fn of_deck(n: usize) -> Self {
        let deck: Vec<usize> = (0..n).collect();
        Self::new(&deck)
    }
}
impl<T: Copy, const K: usize> Iterator for Combinations<T, K> {
    type Item = [T; K];
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let combination = array::from_fn(|index| self.items[self.indices[index]]);
        self.increment_indices();
        Some(combination)
    }
}
