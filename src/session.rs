use std::{path::PathBuf, sync::Arc, time::Duration};

use ngidx::{SearchPath, ThrottledInvoker, TokioScheduler};
use parking_lot::Mutex;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinHandle,
};
use tracing::{debug, error};

use crate::{
    engine::SearchEngine,
    error::{Error, IoError},
    query::Query,
    record::{load_records, Conversation},
};

const RELOAD: &str = ":reload";

type Reloads = Arc<Mutex<Vec<JoinHandle<()>>>>;

/// Answers `input` line by line. Every line is a throttled query whose result
/// goes to `output`; the line `:reload` is a throttled rebuild from `records`.
///
/// A query waits for every reload started before it. When the input closes
/// the last pending reload and query still run before returning.
pub async fn run<R, F>(
    input: R,
    engine: Arc<SearchEngine>,
    records: PathBuf,
    interval: Duration,
    scheduler: TokioScheduler,
    output: F,
) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    F: Fn(&str, SearchPath, Vec<Conversation>) + Send + Sync + 'static,
{
    let reloads: Reloads = Arc::default();

    let searcher = {
        let engine = Arc::clone(&engine);
        ThrottledInvoker::new(
            move |query: String| {
                let (path, hits) = engine.search(Query::new(&query));
                output(&query, path, hits);
            },
            interval,
            scheduler.clone(),
        )
    };

    let reloader = {
        let reloads = Arc::clone(&reloads);
        ThrottledInvoker::new(
            move |path: PathBuf| {
                let engine = Arc::clone(&engine);
                let handle = tokio::spawn(async move {
                    match load_records(&path).await {
                        Ok(records) => engine.load(records),
                        Err(error) => error!(%error, path = %path.display(), "reload failed"),
                    }
                });
                reloads.lock().push(handle);
            },
            interval,
            scheduler,
        )
    };

    let mut lines = input.lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| IoError::Reader(error.kind()))?
    {
        if line.trim() == RELOAD {
            reloader.call(records.clone());
            continue;
        }

        settle(&reloads).await;
        searcher.call(line);
    }

    debug!("input closed");
    reloader.flush();
    settle(&reloads).await;
    searcher.flush();
    Ok(())
}

// Waits for every reload spawned so far.
async fn settle(reloads: &Reloads) {
    let pending = std::mem::take(&mut *reloads.lock());

    for handle in pending {
        if let Err(error) = handle.await {
            error!(%error, "reload task did not finish");
        }
    }
}
