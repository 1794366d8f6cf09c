use crate::postings::{InvertedIndex, Postings};

/// READ access to a built index.
pub struct IndexReader<'r> {
    index: &'r InvertedIndex,
    records: usize,
}

impl<'r> IndexReader<'r> {
    pub fn new(index: &'r InvertedIndex, records: usize) -> Self {
        Self { index, records }
    }

    /// Number of records the index was built from.
    #[inline]
    pub fn total_records(&self) -> usize {
        self.records
    }

    /// Number of records containing the term.
    #[inline]
    pub fn record_frequency(&self, term: &str) -> Option<usize> {
        self.get(term).map(Postings::count)
    }

    /// Postings stored under exactly `term`.
    #[inline]
    pub fn get(&self, term: &str) -> Option<&'r Postings> {
        self.index.get(term)
    }

    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &'r str> {
        self.index.terms().map(String::as_str)
    }

    /// Union of the postings of every term containing `needle`.
    pub fn scan_contains(&self, needle: &str) -> Postings {
        let mut accumulator = Postings::new();

        self.index
            .iter()
            .filter(|(term, _)| term.contains(needle))
            .for_each(|(_, postings)| accumulator.union_with(postings));

        accumulator
    }
}
