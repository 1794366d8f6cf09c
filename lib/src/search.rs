//! Query evaluation over an [`Index`].
//!
//! A query is answered by the first path that yields anything:
//!
//! 1. blank query: every record,
//! 2. exact key lookup,
//! 3. scan of all keys for ones containing the query,
//! 4. linear scan of the records through a fallback extractor.
//!
//! Only the set of hits is meaningful. Hits come back in ascending record
//! position so identical inputs always give identical output; any display
//! order (most recent first, etc.) is applied by the caller.

use tracing::{debug, warn};

use crate::{error::ExtractError, field::Fields, index::Index, postings::Postings};

/// Which path produced a [`Collection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPath {
    /// Blank query, all records returned.
    All,
    Exact,
    Substring,
    Fallback,
    /// Nothing matched.
    Empty,
}

#[derive(Debug)]
pub struct Collection<'r, R> {
    path: SearchPath,
    hits: Vec<&'r R>,
}

impl<'r, R> Collection<'r, R> {
    fn new(path: SearchPath, hits: Vec<&'r R>) -> Self {
        Self { path, hits }
    }

    #[inline]
    pub fn path(&self) -> SearchPath {
        self.path
    }

    #[inline]
    pub fn hits(&self) -> &[&'r R] {
        &self.hits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    #[inline]
    pub fn into_hits(self) -> Vec<&'r R> {
        self.hits
    }
}

/// Returns the records matching `query`.
///
/// `records` must be the snapshot `index` was built from. `fallback` is only
/// consulted when neither index path matches; a record whose extraction fails
/// is logged and treated as non-matching.
pub fn search<'r, R, F>(query: &str, index: &Index, records: &'r [R], fallback: F) -> Vec<&'r R>
where
    F: Fn(&R) -> Result<Fields, ExtractError>,
{
    search_detailed(query, index, records, fallback).into_hits()
}

/// Like [`search`], also reporting which path answered.
pub fn search_detailed<'r, R, F>(
    query: &str,
    index: &Index,
    records: &'r [R],
    fallback: F,
) -> Collection<'r, R>
where
    F: Fn(&R) -> Result<Fields, ExtractError>,
{
    if query.trim().is_empty() {
        return Collection::new(SearchPath::All, records.iter().collect());
    }

    if index.record_count() != records.len() {
        warn!(
            indexed = index.record_count(),
            given = records.len(),
            "index snapshot does not match records, rebuild it"
        );
    }

    let Some(needle) = index.normalize(query) else {
        return Collection::new(SearchPath::Empty, Vec::new());
    };
    let reader = index.reader();

    if let Some(postings) = reader.get(&needle) {
        debug!(query = %needle, hits = postings.count(), "exact key match");
        return Collection::new(SearchPath::Exact, materialize(postings, records));
    }

    // Every substring of min_gram or more chars is already a key, so a longer
    // needle that missed above cannot be inside any key.
    let scan_keys = match index.tokenizer().min_gram() {
        Some(min_gram) => needle.chars().count() < min_gram,
        None => true,
    };

    if scan_keys {
        let postings = reader.scan_contains(&needle);
        if !postings.is_empty() {
            debug!(query = %needle, hits = postings.count(), "substring key match");
            return Collection::new(SearchPath::Substring, materialize(&postings, records));
        }
    }

    let hits = records
        .iter()
        .enumerate()
        .filter(|(position, record)| match fallback(*record) {
            Ok(fields) => fields
                .iter()
                .filter_map(|field| field.value())
                .filter_map(|value| index.normalize(value))
                .any(|value| value.contains(&needle)),
            Err(error) => {
                warn!(position, %error, "skipping record in fallback scan");
                false
            }
        })
        .map(|(_, record)| record)
        .collect::<Vec<_>>();

    if hits.is_empty() {
        debug!(query = %needle, "no match");
        return Collection::new(SearchPath::Empty, hits);
    }

    debug!(query = %needle, hits = hits.len(), "fallback scan match");
    Collection::new(SearchPath::Fallback, hits)
}

// Out-of-range positions belong to a stale snapshot and are skipped.
fn materialize<'r, R>(postings: &Postings, records: &'r [R]) -> Vec<&'r R> {
    postings
        .sorted()
        .into_iter()
        .filter_map(|position| records.get(position))
        .collect()
}

impl Index {
    /// Method form of [`search`].
    pub fn search<'r, R, F>(&self, query: &str, records: &'r [R], fallback: F) -> Vec<&'r R>
    where
        F: Fn(&R) -> Result<Fields, ExtractError>,
    {
        search(query, self, records, fallback)
    }
}
