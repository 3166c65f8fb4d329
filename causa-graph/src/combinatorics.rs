//! Candidate-set helpers for callers searching over adjustment sets.

/// Every non-empty subset of `items`, each exactly once. Items keep their
/// relative order inside a subset.
pub fn get_combinations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    get_combinations_up_to(items, 0)
}

/// Like [`get_combinations`], limited to subsets of at most `max_len` items.
/// `max_len == 0` means no limit.
pub fn get_combinations_up_to<T: Clone>(items: &[T], max_len: usize) -> Vec<Vec<T>> {
    let mut combos: Vec<Vec<T>> = vec![Vec::new()];
    for item in items {
        let grown: Vec<Vec<T>> = combos
            .iter()
            .filter(|combo| max_len == 0 || combo.len() < max_len)
            .map(|combo| {
                let mut next = combo.clone();
                next.push(item.clone());
                next
            })
            .collect();
        combos.extend(grown);
    }
    combos.retain(|combo| !combo.is_empty());
    combos
}
