use std::sync::Arc;

use ngidx::{
    search_detailed,
    tokenizer::{NGram, Tokenizer},
    Index, IndexBuilder, SearchPath,
};
use parking_lot::RwLock;
use tracing::info;

use crate::{config::Config, query::Query, record::Conversation};

#[derive(Debug)]
struct Snapshot {
    records: Vec<Conversation>,
    index: Index,
}

/// Owns the current records and the index built over them.
///
/// Reloading swaps in a whole new snapshot, so a search in flight keeps
/// answering against the records its index was built from.
#[derive(Debug)]
pub struct SearchEngine {
    builder: IndexBuilder,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl SearchEngine {
    pub fn new(config: &Config) -> Self {
        let builder =
            IndexBuilder::new().tokenizer(Tokenizer::NGram(NGram::new(config.min_gram)));
        let index = builder
            .clone()
            .build::<Conversation, _>(&[], Conversation::fields);

        Self {
            builder,
            snapshot: RwLock::new(Arc::new(Snapshot {
                records: Vec::new(),
                index,
            })),
        }
    }

    /// Rebuilds the index over `records` and makes it current.
    pub fn load(&self, records: Vec<Conversation>) {
        let index = self
            .builder
            .clone()
            .with_capacity(records.len() * 16)
            .build(&records, Conversation::fields);

        info!(
            records = records.len(),
            terms = index.term_count(),
            "index rebuilt"
        );

        *self.snapshot.write() = Arc::new(Snapshot { records, index });
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn search(&self, query: Query) -> (SearchPath, Vec<Conversation>) {
        let snapshot = self.snapshot.read().clone();

        if query.is_blank() {
            return (SearchPath::All, snapshot.records.clone());
        }

        let collection = search_detailed(
            query.as_ref(),
            &snapshot.index,
            &snapshot.records,
            Conversation::fallback_fields,
        );

        let path = collection.path();
        let hits = collection.into_hits().into_iter().cloned().collect();
        (path, hits)
    }
}
