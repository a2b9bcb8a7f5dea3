use log::trace;

/// Strictly increasing `k`-tuples over `1..=n`, in lexicographic order.
///
/// The sequence is finite and cannot be restarted; ask for a new one to make
/// another pass.
#[derive(Debug, Clone)]
pub struct KSubsets {
    n: usize,
    current: Option<Vec<usize>>,
}

/// Enumerate the `k`-subsets of `{1..n}`.
///
/// `k == 0` yields the empty subset once; `k > n` yields nothing.
pub fn ksubsets(n: usize, k: usize) -> KSubsets {
    trace!("Enumerating {}-subsets of 1..={}", k, n);

    let current = (k <= n).then(|| (1..=k).collect());
    KSubsets { n, current }
}

impl Iterator for KSubsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = successor(&current, self.n);
        Some(current)
    }
}

/// Next subset in lexicographic order, or `None` after the last one.
fn successor(subset: &[usize], n: usize) -> Option<Vec<usize>> {
    let k = subset.len();

    // Rightmost entry that has not reached its ceiling `n - k + i + 1`.
    let pivot = subset
        .iter()
        .enumerate()
        .rposition(|(i, &value)| value < n - k + i + 1)?;
    let base = subset.get(pivot)? + 1;

    let mut next = subset.to_vec();
    for (offset, slot) in next.iter_mut().skip(pivot).enumerate() {
        *slot = base + offset;
    }
    Some(next)
}
