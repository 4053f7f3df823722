//! Bill commands: `register` and `delete`
//!
//! Both take the bill fields as flags and prompt for whatever was left out.

use std::io::{BufRead, Write};

use clap::Args;

use super::{AppContext, Prompter};
use crate::display::format_bill_summary;
use crate::error::BeerusResult;
use crate::models::Bill;
use crate::services::{BillInput, BillService};

#[derive(Args, Debug, Clone, Default)]
pub struct BillArgs {
    /// Bill title (prompted if omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Amount, e.g. "12.50" (prompted if omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Date (YYYY-MM-DD); prompted if omitted, blank means today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl BillArgs {
    /// Fill the missing fields from the prompter and validate
    fn collect<R: BufRead, W: Write>(
        self,
        ctx: &AppContext,
        prompter: &mut Prompter<R, W>,
    ) -> BeerusResult<Bill> {
        let title = match self.title {
            Some(title) => title,
            None => prompter.ask("Title")?,
        };
        let amount = match self.amount {
            Some(amount) => amount,
            None => prompter.ask("Amount")?,
        };
        let date = match self.date {
            Some(date) => date,
            None => prompter.ask("Date (YYYY-MM-DD, blank for today)")?,
        };

        BillInput::new(title, amount, Some(date)).into_bill(ctx.today)
    }
}

pub fn handle_register<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    args: BillArgs,
) -> BeerusResult<()> {
    let store = ctx.open_store()?;
    let assume_yes = args.yes;
    let bill = args.collect(ctx, prompter)?;

    println!("{}", format_bill_summary("Registering", &bill));
    prompter.require("Proceed?", assume_yes)?;

    BillService::new(&store).register(&bill)?;
    println!("Bill registered.");
    Ok(())
}

pub fn handle_delete<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    args: BillArgs,
) -> BeerusResult<()> {
    let store = ctx.open_store()?;
    let assume_yes = args.yes;
    let bill = args.collect(ctx, prompter)?;

    println!("{}", format_bill_summary("Deleting", &bill));
    prompter.require("Proceed?", assume_yes)?;

    match BillService::new(&store).remove(&bill)? {
        0 => println!("No matching bill found."),
        1 => println!("Deleted 1 bill."),
        n => println!("Deleted {} bills.", n),
    }
    Ok(())
}
