//! Stockbase CLI: pull Polygon.io data into the local SQLite sink.
//!
//! Commands:
//! - `prices`: daily open/close for one date
//! - `dividends`: every listed dividend per symbol
//! - `holidays`: upcoming market holidays
//! - `financials`: financial statements per symbol
//! - `positions`: import a position CSV (no vendor calls)
//! - `runs`: list recent ingestion runs

mod config;
mod main_lib;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stockbase_core::positions::read_positions_csv;
use stockbase_core::{IngestRunStore, IngestServiceTrait, WritePolicy};
use stockbase_market_data::Timeframe;

use config::Config;
use main_lib::{build_ingest, build_offline_ingest, init_tracing, open_stores};

#[derive(Parser, Debug)]
#[command(
    name = "stockbase",
    about = "Stockbase: rate-limited Polygon.io ingestion into SQLite"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the daily open/close aggregate of each symbol.
    Prices {
        /// Trading day (YYYY-MM-DD).
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,

        /// Symbols to fetch (e.g., AAPL MSFT).
        #[arg(required = true)]
        symbols: Vec<String>,

        /// How to treat rows that already exist: insert, skip or upsert.
        #[arg(long, default_value = "insert", value_parser = parse_policy)]
        policy: WritePolicy,
    },
    /// Fetch every dividend listed for each symbol.
    Dividends {
        #[arg(required = true)]
        symbols: Vec<String>,

        #[arg(long, default_value = "insert", value_parser = parse_policy)]
        policy: WritePolicy,
    },
    /// Fetch upcoming market holidays.
    Holidays {
        #[arg(long, default_value = "insert", value_parser = parse_policy)]
        policy: WritePolicy,
    },
    /// Fetch financial statements for each symbol.
    Financials {
        #[arg(required = true)]
        symbols: Vec<String>,

        /// annual, quarterly or ttm. All timeframes when omitted.
        #[arg(long)]
        timeframe: Option<Timeframe>,

        /// Page size requested from the vendor.
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long, default_value = "insert", value_parser = parse_policy)]
        policy: WritePolicy,
    },
    /// Import position history from a CSV file (date,symbol,quantity,cost_basis).
    Positions {
        file: PathBuf,

        #[arg(long, default_value = "insert", value_parser = parse_policy)]
        policy: WritePolicy,
    },
    /// List recent ingestion runs.
    Runs {
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}

fn parse_policy(s: &str) -> Result<WritePolicy, String> {
    s.parse::<WritePolicy>().map_err(|e| e.to_string())
}

fn normalize(symbols: Vec<String>) -> Vec<String> {
    symbols
        .into_iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing();

    let stores = open_stores(&config)?;

    match cli.command {
        Commands::Prices {
            date,
            symbols,
            policy,
        } => {
            let ingest = build_ingest(&config, stores).await?;
            let symbols = normalize(symbols);
            let written = ingest.ingest_daily_prices(&symbols, date, policy).await?;
            println!("{} price row(s) written for {}", written, date);
        }
        Commands::Dividends { symbols, policy } => {
            let ingest = build_ingest(&config, stores).await?;
            for symbol in normalize(symbols) {
                let written = ingest.ingest_dividends(&symbol, policy).await?;
                println!("{}: {} dividend row(s) written", symbol, written);
            }
        }
        Commands::Holidays { policy } => {
            let ingest = build_ingest(&config, stores).await?;
            let written = ingest.ingest_market_holidays(policy).await?;
            println!("{} holiday row(s) written", written);
        }
        Commands::Financials {
            symbols,
            timeframe,
            limit,
            policy,
        } => {
            let ingest = build_ingest(&config, stores).await?;
            for symbol in normalize(symbols) {
                let written = ingest
                    .ingest_financials(&symbol, timeframe, limit, policy)
                    .await?;
                println!("{}: {} statement row(s) written", symbol, written);
            }
        }
        Commands::Positions { file, policy } => {
            let positions = read_positions_csv(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let ingest = build_offline_ingest(&config, stores)?;
            let written = ingest.import_positions(positions, policy).await?;
            println!("{} position row(s) written", written);
        }
        Commands::Runs { limit } => {
            let runs = stores.runs.latest_runs(limit)?;
            if runs.is_empty() {
                println!("No ingestion runs recorded");
            }
            for run in runs {
                println!("{}  {:>8}", run.run_date.format("%Y-%m-%d %H:%M:%S"), run.records_added);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_prices_command() {
        let cli = Cli::try_parse_from([
            "stockbase", "prices", "--date", "2023-04-06", "aapl", "FB", "--policy", "skip",
        ])
        .unwrap();
        match cli.command {
            Commands::Prices {
                date,
                symbols,
                policy,
            } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2023, 4, 6).unwrap());
                assert_eq!(normalize(symbols), vec!["AAPL", "FB"]);
                assert_eq!(policy, WritePolicy::Skip);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_policy_defaults_to_insert() {
        let cli = Cli::try_parse_from(["stockbase", "holidays"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Holidays {
                policy: WritePolicy::Insert
            }
        ));
    }

    #[test]
    fn test_parse_financials_options() {
        let cli = Cli::try_parse_from([
            "stockbase",
            "financials",
            "--timeframe",
            "quarterly",
            "--limit",
            "4",
            "GOOG",
        ])
        .unwrap();
        match cli.command {
            Commands::Financials {
                timeframe, limit, ..
            } => {
                assert_eq!(timeframe, Some(Timeframe::Quarterly));
                assert_eq!(limit, Some(4));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_positions_help_names_csv_header() {
        let cli = Cli::command();
        let positions = cli.find_subcommand("positions").unwrap();
        let about = positions.get_about().unwrap().to_string();
        assert!(about.contains("date,symbol,quantity,cost_basis"), "{}", about);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["stockbase", "prices", "AAPL"]).is_err());
        assert!(Cli::try_parse_from(["stockbase", "prices", "--date", "06/04/2023", "AAPL"]).is_err());
        assert!(Cli::try_parse_from(["stockbase", "holidays", "--policy", "merge"]).is_err());
        assert!(Cli::try_parse_from(["stockbase", "dividends"]).is_err());
    }
}
