use std::marker::PhantomData;

use crate::{postings::InvertedIndex, token::Token};

/// WRITE access to an index under construction.
pub struct IndexWriter<'w> {
    index: &'w mut InvertedIndex,
    records: &'w mut usize,
}

impl<'w> IndexWriter<'w> {
    pub fn new(index: &'w mut InvertedIndex, records: &'w mut usize) -> Self {
        Self { index, records }
    }

    // Reserve the next record position
    #[inline]
    pub fn insert_record(&mut self) -> usize {
        let position = *self.records;
        *self.records += 1;
        position
    }

    #[inline]
    pub fn insert_term(&mut self, term: String, position: usize) {
        self.index.add_term(term, position)
    }
}

pub struct RecordState;

#[derive(Clone, Copy)]
pub struct TermEntryState {
    position: usize,
}

/// Typestate wrapper: a record slot must be reserved before any of its terms
/// can be written.
pub struct WriterContext<'wctx, S> {
    writer: IndexWriter<'wctx>,
    data: Option<S>,
    _marker: PhantomData<S>,
}

impl<'wctx, S> WriterContext<'wctx, S> {
    pub fn new(writer: IndexWriter<'wctx>) -> Self {
        Self {
            writer,
            data: None,
            _marker: PhantomData,
        }
    }

    fn new_with_data(writer: IndexWriter<'wctx>, data: S) -> Self {
        Self {
            writer,
            data: Some(data),
            _marker: PhantomData,
        }
    }
}

impl<'wctx> WriterContext<'wctx, RecordState> {
    pub fn entry(mut self) -> WriterContext<'wctx, TermEntryState> {
        let position = self.writer.insert_record();
        WriterContext::<'wctx, TermEntryState>::new_with_data(
            self.writer,
            TermEntryState { position },
        )
    }
}

impl<'wctx> WriterContext<'wctx, TermEntryState> {
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.data.map(|state| state.position)
    }

    pub fn insert_term(&mut self, term: String) {
        if let Some(position) = self.position() {
            self.writer.insert_term(term, position)
        }
    }

    pub fn insert_term_with(&mut self, f: impl FnOnce() -> Token) {
        let term = f().inner();
        self.insert_term(term);
    }
}
