//! Stable display-field sorting
//!
//! Ordering is plain code-point comparison on the chosen field (`str`'s
//! `Ord`), never locale-aware collation: the output ordering must be
//! reproducible regardless of the environment a generator runs in. The sort
//! is stable, so records with equal display fields keep their base key order.

/// Sort `records` ascending by the string field selected by `display`.
pub fn sort_by_display<T, F>(records: &mut [T], display: F)
where
    F: Fn(&T) -> &str,
{
    records.sort_by(|a, b| display(a).cmp(display(b)));
}
