extern crate hashbrown;

use hashbrown::{
    hash_map::{HashMap, Keys},
    hash_set::{HashSet, Iter},
};

/// Set of record positions indexed under one term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Postings {
    entries: HashSet<usize>,
}

impl Postings {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records containing the term.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `false` when the record was already present.
    #[inline]
    pub fn insert(&mut self, position: usize) -> bool {
        self.entries.insert(position)
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.entries.contains(&position)
    }

    pub fn union_with(&mut self, other: &Postings) {
        self.entries.extend(other.entries.iter().copied());
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, usize> {
        self.entries.iter()
    }

    /// Positions in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut positions = self.entries.iter().copied().collect::<Vec<_>>();
        positions.sort_unstable();
        positions
    }
}

impl FromIterator<usize> for Postings {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Term → postings map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    inner: HashMap<String, Postings>,
}

impl InvertedIndex {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Adds a record position under `term`.
    #[inline]
    pub fn add_term(&mut self, term: String, position: usize) {
        self.inner
            .entry(term)
            .and_modify(|postings| {
                postings.insert(position);
            })
            .or_insert_with(|| std::iter::once(position).collect());
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<&Postings> {
        self.inner.get(term)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.inner.contains_key(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn terms(&self) -> Keys<'_, String, Postings> {
        self.inner.keys()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Postings)> {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{InvertedIndex, Postings};

    #[test]
    fn test_inverted_index_add_term_dedupes() {
        let mut index = InvertedIndex::with_capacity(8);
        index.add_term("ali".to_string(), 0);
        index.add_term("ali".to_string(), 0);
        index.add_term("ali".to_string(), 2);
        index.add_term("bob".to_string(), 1);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("ali").map(Postings::count), Some(2));
        assert_eq!(index.get("ali").map(Postings::sorted), Some(vec![0, 2]));
        assert!(index.get("carol").is_none());
    }

    #[test]
    fn test_postings_union() {
        let mut left = [3, 1].into_iter().collect::<Postings>();
        let right = [1, 2].into_iter().collect::<Postings>();
        left.union_with(&right);
        assert_eq!(left.sorted(), vec![1, 2, 3]);
        assert!(left.contains(2));
        assert!(!left.insert(3));
    }
}
