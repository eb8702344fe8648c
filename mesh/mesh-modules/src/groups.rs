//! Ragged-list grouping.
//!
//! [`Groups`] keeps one inner list per module so per-module results can be
//! displayed group by group instead of being concatenated. Group `i`
//! belongs to the `i`-th module.

/// An ordered sequence of ordered groups.
///
/// # Example
///
/// ```
/// use mesh_modules::Groups;
///
/// let groups: Groups<u32> = vec![vec![1, 2], vec![], vec![3]].into_iter().collect();
///
/// assert_eq!(groups.len(), 3);
/// assert_eq!(groups.group(0), Some(&[1, 2][..]));
/// assert_eq!(groups.total_items(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<T> {
    groups: Vec<Vec<T>>,
}

impl<T> Groups<T> {
    /// Create an empty set of groups.
    #[must_use]
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a group.
    pub fn push(&mut self, group: Vec<T>) {
        self.groups.push(group);
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get group `index`.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&[T]> {
        self.groups.get(index).map(Vec::as_slice)
    }

    /// Iterate over groups in order.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Number of items across all groups.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Iterate over all items, group after group.
    pub fn flatten(&self) -> impl Iterator<Item = &T> {
        self.groups.iter().flatten()
    }

    /// Unwrap into the underlying list of lists.
    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<T>> {
        self.groups
    }
}

impl<T> Default for Groups<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Vec<T>>> for Groups<T> {
    fn from(groups: Vec<Vec<T>>) -> Self {
        Self { groups }
    }
}

impl<T, I> FromIterator<I> for Groups<T>
where
    I: IntoIterator<Item = T>,
{
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        group_ragged(iter)
    }
}

/// Convert a ragged list into groups, keyed by outer position.
///
/// Inner orders are preserved; nothing is concatenated.
pub fn group_ragged<T, Outer, Inner>(ragged: Outer) -> Groups<T>
where
    Outer: IntoIterator<Item = Inner>,
    Inner: IntoIterator<Item = T>,
{
    Groups {
        groups: ragged
            .into_iter()
            .map(|inner| inner.into_iter().collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_ragged_preserves_shape() {
        let groups = group_ragged(vec![vec!['a', 'b', 'c'], vec![], vec!['d']]);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.group(0), Some(&['a', 'b', 'c'][..]));
        assert_eq!(groups.group(1), Some(&[][..]));
        assert_eq!(groups.group(2), Some(&['d'][..]));
        assert!(groups.group(3).is_none());
    }

    #[test]
    fn test_flatten_order() {
        let groups: Groups<u8> = Groups::from(vec![vec![3, 1], vec![2]]);
        let flat: Vec<u8> = groups.flatten().copied().collect();
        assert_eq!(flat, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty() {
        let groups: Groups<u8> = group_ragged(Vec::<Vec<u8>>::new());
        assert!(groups.is_empty());
        assert_eq!(groups.total_items(), 0);
        assert_eq!(groups, Groups::default());
    }

    #[test]
    fn test_push_and_into_inner() {
        let mut groups = Groups::new();
        groups.push(vec![1]);
        groups.push(vec![2, 3]);

        assert_eq!(groups.iter().map(<[i32]>::len).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(groups.into_inner(), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_collect_from_slices() {
        let data = [vec![1, 2], vec![3]];
        let groups: Groups<&i32> = data.iter().collect();
        assert_eq!(groups.total_items(), 3);
        assert_eq!(groups.group(1), Some(&[&3][..]));
    }
}
