use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use beerus::cli::{self, AppContext, BillArgs, ExportFormat, Prompter, RangeArgs};
use beerus::BeerusError;

#[derive(Parser)]
#[command(
    name = "beerus",
    version,
    about = "Keep track of your bills",
    long_about = "beerus is a small personal bill tracker. Register what you pay, \
                  list it by date range, plot monthly totals and see how far you \
                  are from a monthly spending target."
)]
struct Cli {
    /// Settings file to use instead of the default one
    #[arg(long, global = true, env = "BEERUS_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty bill store
    Init {
        /// Replace an existing store without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Register a bill
    #[command(alias = "add")]
    Register(BillArgs),

    /// Delete every bill matching title, amount and date
    #[command(alias = "rm")]
    Delete(BillArgs),

    /// List bills with their total and monthly average
    #[command(alias = "ls")]
    List(RangeArgs),

    /// Plot monthly totals as a bar chart
    Plot(RangeArgs),

    /// Show monthly deficits against a spending target
    Deficit {
        /// Most you want to spend in a month
        #[arg(allow_hyphen_values = true)]
        target: String,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Write the whole store as an SQL script
    Dump {
        /// Output file
        file: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Add the bills of an SQL script to the store
    Load {
        /// Script produced by `dump`
        file: PathBuf,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Export the bills in range as CSV or JSON
    Export {
        /// Output file
        file: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[command(flatten)]
        range: RangeArgs,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Show configuration paths and settings
    Config,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("BEERUS_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("beerus=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::load(cli.config)?;
    let mut prompter = Prompter::stdio();

    match cli.command {
        Commands::Init { yes } => cli::handle_init(&ctx, &mut prompter, yes)?,
        Commands::Register(args) => cli::handle_register(&ctx, &mut prompter, args)?,
        Commands::Delete(args) => cli::handle_delete(&ctx, &mut prompter, args)?,
        Commands::List(range) => cli::handle_list(&ctx, &range)?,
        Commands::Plot(range) => cli::handle_plot(&ctx, &range)?,
        Commands::Deficit { target, range } => cli::handle_deficit(&ctx, &range, &target)?,
        Commands::Dump { file, yes } => cli::handle_dump(&ctx, &mut prompter, &file, yes)?,
        Commands::Load { file, yes } => cli::handle_load(&ctx, &mut prompter, &file, yes)?,
        Commands::Export {
            file,
            format,
            range,
            yes,
        } => cli::handle_export(&ctx, &mut prompter, &file, format, &range, yes)?,
        Commands::Config => cli::handle_config(&ctx)?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Err(e)
            if e
                .downcast_ref::<BeerusError>()
                .is_some_and(BeerusError::is_aborted) =>
        {
            println!("{}", e);
            Ok(())
        }
        other => other,
    }
}
