use rand::{seq::SliceRandom, Rng};

/// One page of selected items
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    /// Pool size before selection
    pub total: usize,
}

/// Contiguous `[offset, offset + limit)` slice of the pool
pub fn paginate<T: Clone>(pool: &[T], offset: usize, limit: usize) -> Page<T> {
    let start = offset.min(pool.len());
    let end = offset.saturating_add(limit).min(pool.len());

    Page {
        items: pool[start..end].to_vec(),
        has_more: offset.saturating_add(limit) < pool.len(),
        total: pool.len(),
    }
}

/// Uniform draw of up to `limit` items without replacement
pub fn sample<T: Clone, R: Rng + ?Sized>(pool: &[T], limit: usize, rng: &mut R) -> Page<T> {
    let mut shuffled = pool.to_vec();
    let amount = limit.min(shuffled.len());
    let (picked, _) = shuffled.partial_shuffle(rng, amount);
    let items = picked.to_vec();

    Page {
        has_more: pool.len() > items.len(),
        total: pool.len(),
        items,
    }
}
