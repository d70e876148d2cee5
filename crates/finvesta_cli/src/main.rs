//! Operator CLI for the Finvesta loan register.
//!
//! # Responsibility
//! - Expose the record store's two mutations plus read-side views without
//!   any business logic of its own.
//! - Stand in for the grid UI: add, inline edit, list.

use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use finvesta_core::{
    daily_schedule, default_log_level, init_logging, load_seed_file, portfolio_summary,
    ClockIdGenerator, FileStorage, LoanRecord, RecordId, RecordStore,
};

#[derive(Parser)]
#[command(name = "finvesta", about = "Loan record register for a microfinance desk")]
struct Cli {
    /// File holding the persisted record collection.
    #[arg(long, env = "FINVESTA_DATA", default_value = "finvesta-data.json")]
    data_file: PathBuf,

    /// Optional seed dataset used when the data file is absent or corrupt.
    #[arg(long, env = "FINVESTA_SEED")]
    seed_file: Option<PathBuf>,

    /// Enable file logging into this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a loan record dated today.
    Add {
        #[arg(long)]
        name: String,
        /// Whole currency units.
        #[arg(long)]
        amount: String,
    },
    /// List all records in display order.
    List,
    /// Edit fields of one record, addressed as PLxxxx or a bare id.
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<i64>,
        /// YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,
    },
    /// Portfolio totals.
    Summary,
    /// Daily amortization preview for one record.
    Schedule {
        id: String,
        /// Annual rate as a fraction, e.g. 0.24 for 24% p.a.
        #[arg(long)]
        rate: String,
        /// Tenure in days.
        #[arg(long)]
        days: u32,
        /// Show only the first N installments.
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), &log_dir.to_string_lossy())?;
    }

    let seed = cli
        .seed_file
        .as_deref()
        .and_then(load_seed_file);
    let mut store = RecordStore::initialize(
        FileStorage::new(&cli.data_file),
        ClockIdGenerator::new(),
        seed,
    );

    match cli.command {
        Command::Add { name, amount } => match store.add_record(&name, &amount) {
            Some(id) => println!("added {}", format_record_id(id)),
            None => println!("nothing added: name and a whole-number amount are required"),
        },
        Command::List => {
            println!("{:<16} {:<24} {:>10}  {}", "ID", "NAME", "AMOUNT", "DATE");
            for record in store.records() {
                println!(
                    "{:<16} {:<24} {:>10}  {}",
                    format_record_id(record.id),
                    record.name,
                    record.amount,
                    record.date
                );
            }
        }
        Command::Edit {
            id,
            name,
            amount,
            date,
        } => {
            let id = parse_record_id(&id)?;
            let Some(existing) = store.records().get(id).cloned() else {
                println!("no record {}", format_record_id(id));
                return Ok(());
            };
            let edited = LoanRecord {
                id,
                name: name.unwrap_or(existing.name),
                amount: amount.unwrap_or(existing.amount),
                date: date.unwrap_or(existing.date),
            };
            let confirmed = store.update_record(edited);
            println!(
                "updated {}: {} {} {}",
                format_record_id(confirmed.id),
                confirmed.name,
                confirmed.amount,
                confirmed.date
            );
        }
        Command::Summary => {
            let summary = portfolio_summary(store.records());
            println!("records            {}", summary.record_count);
            println!("total principal    {}", summary.total_principal);
            if let Some(largest) = summary.largest_exposure {
                println!("largest exposure   {largest}");
            }
            for (date, total) in &summary.disbursed_by_date {
                println!("  {date}  {total}");
            }
        }
        Command::Schedule {
            id,
            rate,
            days,
            limit,
        } => {
            let id = parse_record_id(&id)?;
            let Some(record) = store.records().get(id).cloned() else {
                println!("no record {}", format_record_id(id));
                return Ok(());
            };
            let rate = Decimal::from_str(rate.trim())
                .map_err(|_| format!("invalid rate `{rate}`; expected a fraction like 0.24"))?;
            let schedule = daily_schedule(&record, rate, days)?;
            println!(
                "{:<5} {:<12} {:>10} {:>10} {:>10} {:>12}",
                "DAY", "DUE", "PRINCIPAL", "INTEREST", "TOTAL", "BALANCE"
            );
            let shown = limit.unwrap_or(schedule.len());
            for row in schedule.iter().take(shown) {
                println!(
                    "{:<5} {:<12} {:>10} {:>10} {:>10} {:>12}",
                    row.number, row.due_date, row.principal_due, row.interest_due, row.total_due,
                    row.balance
                );
            }
            if shown < schedule.len() {
                println!("... {} more installments", schedule.len() - shown);
            }
        }
    }

    Ok(())
}

/// Formats a record id in the register's `PLxxxx` display convention.
fn format_record_id(id: RecordId) -> String {
    format!("PL{id:04}")
}

/// Accepts `PLxxxx` display ids and bare integers.
fn parse_record_id(text: &str) -> Result<RecordId, String> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("PL")
        .or_else(|| trimmed.strip_prefix("pl"))
        .unwrap_or(trimmed);
    digits
        .parse()
        .map_err(|_| format!("invalid record id `{text}`; expected PLxxxx or a number"))
}

#[cfg(test)]
mod tests {
    use super::{format_record_id, parse_record_id};

    #[test]
    fn record_ids_round_trip_through_display_form() {
        let display = format_record_id(1700000000000);
        assert_eq!(display, "PL1700000000000");
        assert_eq!(parse_record_id(&display).unwrap(), 1700000000000);
    }

    #[test]
    fn short_ids_are_zero_padded() {
        assert_eq!(format_record_id(7), "PL0007");
        assert_eq!(parse_record_id("PL0007").unwrap(), 7);
        assert_eq!(parse_record_id("7").unwrap(), 7);
    }

    #[test]
    fn garbage_ids_are_rejected() {
        assert!(parse_record_id("PLabc").is_err());
        assert!(parse_record_id("").is_err());
    }
}
