mod analysis;
mod config;
mod loader;
mod models;
mod screener;
mod sort;
mod utils;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::screener::Screener;
use crate::sort::SortMode;
use crate::view::RankedView;

#[derive(Parser)]
#[command(name = "entry-screener", about = "Analyst stock-post entry screener", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Score the dataset and render the ranked list
    Rank {
        /// Path to the seed CSV (default: from config)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Sort mode: entry-score | upside | rsi (unknown values fall back to entry-score)
        #[arg(short, long)]
        sort: Option<String>,

        /// Show only the top N records
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit scored records as JSON instead of the text view
        #[arg(long)]
        json: bool,
    },

    /// Show the detail card for one ticker
    Show {
        ticker: String,

        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Show dataset statistics
    Stats {
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// List all tickers in the dataset
    Symbols {
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "entry_screener=info,warn",
        1 => "entry_screener=debug,info",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .compact()
        .with_target(false)
        .init();

    let config = AppConfig::load()?;
    let default_sort = SortMode::parse(&config.screener.sort_by);
    let screener = Screener::new(config);

    match cli.command {
        Command::Rank { data, sort, limit, json } => {
            let _t = utils::Timer::start("Rank");
            let records = screener.load(data.as_deref())?;
            let scored = screener.score_records(records);

            let mode = sort.as_deref().map(SortMode::parse).unwrap_or(default_sort);
            let ranked = RankedView::new(scored, mode);

            if json {
                println!("{}", serde_json::to_string_pretty(ranked.records())?);
            } else {
                print!("{}", view::render_list(&ranked, limit));
            }
        }

        Command::Show { ticker, data } => {
            let records = screener.load(data.as_deref())?;
            let scored = screener.score_records(records);
            let ranked = RankedView::new(scored, default_sort);

            match ranked.find(&ticker) {
                Some(s) => print!("{}", view::render_detail(s)),
                None => println!(
                    "{} not found — run `entry-screener symbols` to list tickers.",
                    ticker.trim().to_uppercase()
                ),
            }
        }

        Command::Stats { data } => {
            let records = screener.load(data.as_deref())?;
            let scored = screener.score_records(records);
            let stats = screener::dataset_stats(&scored);

            println!("─────────────────────────────────");
            println!("  Entry Screener — Dataset Stats");
            println!("─────────────────────────────────");
            println!("  Records    : {}", stats.records);
            println!("  First post : {}", stats.first_post.map(|d| d.to_string()).unwrap_or("—".into()));
            println!("  Last post  : {}", stats.last_post.map(|d| d.to_string()).unwrap_or("—".into()));
            println!("  STRONG BUY : {}", stats.strong_buys);
            println!("  BUY        : {}", stats.buys);
            println!("  HOLD       : {}", stats.holds);
            println!("  WAIT       : {}", stats.waits);
            println!("─────────────────────────────────");
        }

        Command::Symbols { data } => {
            let records = screener.load(data.as_deref())?;
            if records.is_empty() {
                println!("No records — check the dataset path.");
            } else {
                println!("{} tickers:", records.len());
                for r in &records {
                    println!("  {} — {}", r.ticker, r.company);
                }
            }
        }
    }

    Ok(())
}
