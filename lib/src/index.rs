//! The [`Index`] maps normalized terms to the set of records containing them.
//!
//! Each extracted field value is normalized (lower-cased by default) and
//! expanded by the [`Tokenizer`] into its full value plus every substring of at
//! least [`MIN_GRAM`](crate::tokenizer::MIN_GRAM) characters. Records are
//! identified by their position in the slice the index was built from, so the
//! same slice (or an identical snapshot) must be handed to search.
//!
//! An index is a pure function of its input snapshot and exposes no mutating
//! API once built. When the records change, build a new one.

use tracing::debug;

use crate::{
    field::Fields,
    normalizer::NormalizerPipeline,
    postings::InvertedIndex,
    reader::IndexReader,
    tokenizer::Tokenizer,
    writer::{IndexWriter, RecordState, WriterContext},
};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Snapshot {
    terms: InvertedIndex,
    records: usize,
}

#[derive(Clone, Debug)]
pub struct Index {
    snapshot: Snapshot,
    tokenizer: Tokenizer,
    pipeline: NormalizerPipeline,
}

impl Index {
    /// Builds an index with the default n-gram tokenizer and lower-casing.
    pub fn build<R, F>(records: &[R], extract: F) -> Self
    where
        F: Fn(&R) -> Fields,
    {
        IndexBuilder::new().build(records, extract)
    }

    pub fn builder() -> IndexBuilder {
        IndexBuilder::new()
    }

    /// Provides READ access to the index.
    pub fn reader(&self) -> IndexReader<'_> {
        IndexReader::new(&self.snapshot.terms, self.snapshot.records)
    }

    /// Number of distinct keys.
    #[inline]
    pub fn term_count(&self) -> usize {
        self.snapshot.terms.len()
    }

    /// Number of records the index was built from.
    #[inline]
    pub fn record_count(&self) -> usize {
        self.snapshot.records
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.snapshot.terms.contains_term(term)
    }

    #[inline]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Normalizes text the same way indexed values were normalized.
    #[inline]
    pub fn normalize(&self, text: &str) -> Option<String> {
        self.pipeline.apply(text)
    }
}

impl PartialEq for Index {
    /// Content equality: same keys mapping to the same record positions.
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot
    }
}

/// Options for building an [`Index`].
#[derive(Clone, Debug, Default)]
pub struct IndexBuilder {
    tokenizer: Tokenizer,
    pipeline: NormalizerPipeline,
    capacity: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn pipeline(mut self, pipeline: NormalizerPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Initial key capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build<R, F>(self, records: &[R], extract: F) -> Index
    where
        F: Fn(&R) -> Fields,
    {
        let mut terms = InvertedIndex::with_capacity(self.capacity);
        let mut count = 0;

        for record in records {
            let writer = IndexWriter::new(&mut terms, &mut count);
            let mut entry = WriterContext::<RecordState>::new(writer).entry();

            for field in extract(record) {
                let Some(value) = field.value() else {
                    continue;
                };

                let Some(normalized) = self.pipeline.apply(value) else {
                    debug!(position = entry.position(), "field dropped by normalizer");
                    continue;
                };

                self.tokenizer
                    .tokenize(&normalized)
                    .into_iter()
                    .for_each(|token| entry.insert_term_with(|| token));
            }
        }

        debug!(records = count, terms = terms.len(), "index built");

        Index {
            snapshot: Snapshot {
                terms,
                records: count,
            },
            tokenizer: self.tokenizer,
            pipeline: self.pipeline,
        }
    }
}

/// Builds an index over `records` with the default options.
pub fn build_index<R, F>(records: &[R], extract: F) -> Index
where
    F: Fn(&R) -> Fields,
{
    Index::build(records, extract)
}
