//! Setup commands: `init` and `config`

use std::io::{BufRead, Write};

use tracing::info;

use super::{AppContext, Prompter};
use crate::error::BeerusResult;
use crate::storage::BillStore;

/// Create an empty bill store, asking before replacing an existing one
pub fn handle_init<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    assume_yes: bool,
) -> BeerusResult<()> {
    let db_path = ctx.database_path();
    let overwrite = db_path.exists();

    if overwrite {
        println!(
            "WARNING: a bill store already exists at {}. All its bills will be lost.",
            db_path.display()
        );
        prompter.require("Replace it with an empty store?", assume_yes)?;
    }

    let store = BillStore::initialize(&db_path, overwrite)?;

    if !ctx.paths.settings_file().exists() {
        ctx.settings.save(&ctx.paths)?;
        info!(path = %ctx.paths.settings_file().display(), "wrote default settings");
    }

    println!("Initialized bill store at {}", store.path().display());
    Ok(())
}

/// Print resolved paths and the active settings
pub fn handle_config(ctx: &AppContext) -> BeerusResult<()> {
    let settings_file = ctx.paths.settings_file();
    let db_path = ctx.database_path();

    println!("beerus configuration");
    println!("====================");
    println!("Base directory: {}", ctx.paths.base_dir().display());
    println!(
        "Settings file:  {}{}",
        settings_file.display(),
        if settings_file.exists() { "" } else { " (not created yet)" }
    );
    println!(
        "Bill store:     {}{}",
        db_path.display(),
        if db_path.exists() { "" } else { " (not initialized)" }
    );
    if db_path.exists() {
        println!("Bills stored:   {}", ctx.open_store()?.count()?);
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol:    {}", ctx.settings.currency_symbol);
    println!("  Default range days: {}", ctx.settings.default_range_days);
    println!("  Chart width:        {}", ctx.settings.chart_width);

    Ok(())
}
