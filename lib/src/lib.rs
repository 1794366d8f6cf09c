//! N-gram inverted index over arbitrary records, with a trailing-edge
//! throttle for rate limiting rebuilds and a fixed-height list window
//! calculator for rendering results.

pub mod error;
pub mod field;
pub mod index;
pub mod normalizer;
pub mod postings;
pub mod reader;
pub mod search;
pub mod throttle;
pub mod token;
pub mod tokenizer;
pub mod window;
pub mod writer;

pub use {
    error::{Error, ExtractError, ScheduleError},
    field::{Field, Fields},
    index::{build_index, Index, IndexBuilder},
    search::{search, search_detailed, Collection, SearchPath},
    throttle::{throttle, ManualScheduler, Scheduler, ThrottledInvoker, TokioScheduler},
    window::{compute_window, compute_window_with, Window},
};
