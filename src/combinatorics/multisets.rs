/// Non-decreasing index sequences of a fixed length over `0..kinds`.
///
/// Each sequence names one multiset (a bag where only per-kind counts matter),
/// and the bags come out in lexicographic order of their sorted form.
#[derive(Debug, Clone)]
pub struct Multisets {
    kinds: usize,
    current: Option<Vec<usize>>,
}

/// Enumerate the size-`len` multisets over `kinds` kinds.
///
/// There are `C(kinds + len - 1, len)` of them.
pub fn multisets(kinds: usize, len: usize) -> Multisets {
    let current = (kinds > 0 || len == 0).then(|| vec![0; len]);
    Multisets { kinds, current }
}

impl Iterator for Multisets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = successor(&current, self.kinds);
        Some(current)
    }
}

fn successor(bag: &[usize], kinds: usize) -> Option<Vec<usize>> {
    let pivot = bag.iter().rposition(|&kind| kind + 1 < kinds)?;
    let raised = bag.get(pivot)? + 1;

    let mut next = bag.to_vec();
    for slot in next.iter_mut().skip(pivot) {
        *slot = raised;
    }
    Some(next)
}
