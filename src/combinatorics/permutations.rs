/// Distinct orderings of a sequence in lexicographic order.
///
/// Iteration starts from the sorted arrangement, so every distinct
/// permutation is produced exactly once whatever order the input had.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    current: Option<Vec<T>>,
}

/// Enumerate all permutations of `items`.
pub fn permute<T: Ord + Clone>(items: &[T]) -> Permutations<T> {
    let mut first = items.to_vec();
    first.sort();
    Permutations {
        current: Some(first),
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = next_permutation(&current);
        Some(current)
    }
}

fn next_permutation<T: Ord + Clone>(items: &[T]) -> Option<Vec<T>> {
    let pivot = items
        .windows(2)
        .rposition(|pair| matches!(pair, [a, b] if a < b))?;
    let pivot_value = items.get(pivot)?;
    let swap = items.iter().rposition(|value| value > pivot_value)?;

    let mut next = items.to_vec();
    next.swap(pivot, swap);
    next.get_mut(pivot + 1..)?.reverse();
    Some(next)
}
