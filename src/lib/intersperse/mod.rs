//! Place separators between consecutive items, never before the first or
//! after the last.

use itertools::Itertools;

/// Interleave `items` with separators built per position.
///
/// `separator(idx)` is called once for every gap, where `idx` is the index of
/// the item that follows the separator. Callers use it to produce separators
/// that are distinguishable from one another.
pub fn intersperse<I, T, F>(items: I, mut separator: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(usize) -> T,
{
    let mut idx = 0;
    Itertools::intersperse_with(items.into_iter(), || {
        idx += 1;
        separator(idx)
    })
    .collect()
}

/// Interleave `items` with a constant separator.
pub fn intersperse_value<I, T>(items: I, separator: T) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Clone,
{
    Itertools::intersperse(items.into_iter(), separator).collect()
}
