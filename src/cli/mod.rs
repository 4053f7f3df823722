//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod bill;
pub mod prompt;
pub mod report;
pub mod setup;
pub mod transfer;

pub use bill::{handle_delete, handle_register, BillArgs};
pub use prompt::Prompter;
pub use report::{handle_deficit, handle_list, handle_plot};
pub use setup::{handle_config, handle_init};
pub use transfer::{handle_dump, handle_export, handle_load, ExportFormat};

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use tracing::warn;

use crate::config::{BeerusPaths, Settings};
use crate::error::BeerusResult;
use crate::models::DateRange;
use crate::storage::BillStore;

/// `--from` / `--to` bounds shared by the reading commands
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Starting date (YYYY-MM-DD), defaults to 30 days ago
    #[arg(long)]
    pub from: Option<String>,

    /// Ending date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<String>,
}

/// Everything a command needs from its environment
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: BeerusPaths,
    pub settings: Settings,
    pub today: NaiveDate,
}

impl AppContext {
    /// Resolve paths and read settings, honouring an explicit settings file
    pub fn load(settings_file: Option<PathBuf>) -> BeerusResult<Self> {
        let mut paths = BeerusPaths::new()?;
        if let Some(file) = settings_file {
            paths = paths.with_settings_file(file);
        }
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self::new(paths, settings, chrono::Local::now().date_naive()))
    }

    pub fn new(paths: BeerusPaths, settings: Settings, today: NaiveDate) -> Self {
        Self {
            paths,
            settings,
            today,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.settings.database_path(&self.paths)
    }

    /// Open the configured store; fails if it was never initialized
    pub fn open_store(&self) -> BeerusResult<BillStore> {
        BillStore::from_settings(&self.settings, &self.paths)
    }

    /// Range from `--from`/`--to`; one that ends before it begins is only logged
    pub fn range(&self, args: &RangeArgs) -> BeerusResult<DateRange> {
        let range = DateRange::from_bounds(
            args.from.as_deref(),
            args.to.as_deref(),
            self.today,
            self.settings.default_range_days,
        )?;
        if range.is_empty() {
            warn!(range = %range, "date range ends before it begins; no bills can match");
        }
        Ok(range)
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}
