//! Moving bills in and out of the store: `dump`, `load` and `export`

use std::io::{BufRead, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::warn;

use super::{AppContext, Prompter, RangeArgs};
use crate::error::{BeerusError, BeerusResult};
use crate::export::{export_bills_csv, export_bills_json, BillExport};
use crate::storage::{write_atomic, BillStore};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per bill: title, amount, date
    Csv,
    /// Bills plus export metadata
    Json,
}

fn confirm_overwrite<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    output: &Path,
    assume_yes: bool,
) -> BeerusResult<()> {
    if output.exists() {
        prompter.require(
            &format!("{} already exists. Overwrite it?", output.display()),
            assume_yes,
        )?;
    }
    Ok(())
}

/// Write the whole store as an SQL script
pub fn handle_dump<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    output: &Path,
    assume_yes: bool,
) -> BeerusResult<()> {
    let store = ctx.open_store()?;
    confirm_overwrite(prompter, output, assume_yes)?;

    let rows = write_atomic(output, |writer| store.dump(writer))?;
    println!("Dumped {} bills to {}", rows, output.display());
    Ok(())
}

/// Run a dump script against the configured store, creating it if needed
pub fn handle_load<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    input: &Path,
    assume_yes: bool,
) -> BeerusResult<()> {
    let script = std::fs::read_to_string(input)
        .map_err(|e| BeerusError::Io(format!("Failed to read {}: {}", input.display(), e)))?;

    let db_path = ctx.database_path();
    prompter.require(
        &format!(
            "Load {} into the bill store at {}?",
            input.display(),
            db_path.display()
        ),
        assume_yes,
    )?;

    let created = !db_path.exists();
    let store = BillStore::open_or_create(&db_path)?;
    let added = match store.load_script(&script) {
        Ok(added) => added,
        Err(e) => {
            drop(store);
            // a failed load must not leave a table-less file behind
            if created && db_path.exists() {
                if let Err(rm) = std::fs::remove_file(&db_path) {
                    warn!(
                        path = %db_path.display(),
                        error = %rm,
                        "could not remove store after failed load"
                    );
                }
            }
            return Err(e);
        }
    };
    println!("Loaded {} bills from {}", added, input.display());
    Ok(())
}

/// Export the bills in range as CSV or JSON
pub fn handle_export<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    output: &Path,
    format: ExportFormat,
    range: &RangeArgs,
    assume_yes: bool,
) -> BeerusResult<()> {
    let store = ctx.open_store()?;
    let range = ctx.range(range)?;
    let bills = store.query(&range)?;
    confirm_overwrite(prompter, output, assume_yes)?;

    let count = bills.len();
    match format {
        ExportFormat::Csv => write_atomic(output, |writer| export_bills_csv(&bills, writer))?,
        ExportFormat::Json => {
            let export = BillExport::new(range, bills)?;
            write_atomic(output, |writer| export_bills_json(&export, writer))?
        }
    }

    println!(
        "Exported {} bills ({}) to {}",
        count,
        range,
        output.display()
    );
    Ok(())
}
