extern crate tokio;

mod cli;
mod config;
mod engine;
mod error;
mod query;
mod read;
mod record;
mod session;

use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use ngidx::{compute_window_with, SearchPath, TokioScheduler};
use serde_json::json;
use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Command, Interactive, Search, Window},
    config::Config,
    engine::SearchEngine,
    error::Error,
    query::Query,
    record::{load_records, Conversation},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };

    match cli.command {
        Command::Search(args) => run_search(args, config).await,
        Command::Window(args) => {
            args.apply(&mut config);
            run_window(args, config)
        }
        Command::Interactive(args) => {
            args.apply(&mut config);
            config.validate()?;
            run_interactive(args, config).await
        }
    }
}

async fn run_search(args: Search, mut config: Config) -> Result<(), Error> {
    args.index.apply(&mut config);
    config.validate()?;

    let engine = SearchEngine::new(&config);
    engine.load(load_records(&args.index.records).await?);

    let (path, hits) = engine.search(Query::new(&args.query));
    print_hits(path, &hits);
    Ok(())
}

fn run_window(args: Window, config: Config) -> Result<(), Error> {
    let window = compute_window_with(
        args.count,
        config.item_height,
        config.container_height,
        args.scroll_top,
        config.overscan,
    );

    println!(
        "{}",
        json!({
            "startIndex": window.start,
            "endIndex": window.end,
            "offsetY": window.offset_y,
        })
    );
    Ok(())
}

async fn run_interactive(args: Interactive, config: Config) -> Result<(), Error> {
    let engine = Arc::new(SearchEngine::new(&config));
    engine.load(load_records(&args.index.records).await?);
    if engine.is_empty() {
        warn!(path = %args.index.records.display(), "no records loaded");
    }
    info!(records = engine.len(), "ready, type a query per line");

    let scheduler = TokioScheduler::current()?;

    session::run(
        BufReader::new(tokio::io::stdin()),
        engine,
        args.index.records,
        config.interval(),
        scheduler,
        |_: &str, path: SearchPath, hits: Vec<Conversation>| print_hits(path, &hits),
    )
    .await
}

fn print_hits(path: SearchPath, hits: &[Conversation]) {
    info!(?path, hits = hits.len(), "search");

    for hit in hits {
        match serde_json::to_string(hit) {
            Ok(line) => println!("{line}"),
            Err(error) => error!(%error, id = %hit.id, "cannot serialize record"),
        }
    }
}
