//! Reading commands: `list`, `plot` and `deficit`

use super::{AppContext, RangeArgs};
use crate::display::{format_bill_listing, BarChart};
use crate::error::BeerusResult;
use crate::services::BillService;

pub fn handle_list(ctx: &AppContext, range: &RangeArgs) -> BeerusResult<()> {
    let store = ctx.open_store()?;
    let report = BillService::new(&store).monthly_report(ctx.range(range)?)?;

    print!("{}", format_bill_listing(&report, ctx.currency()));
    Ok(())
}

pub fn handle_plot(ctx: &AppContext, range: &RangeArgs) -> BeerusResult<()> {
    let store = ctx.open_store()?;
    let report = BillService::new(&store).monthly_report(ctx.range(range)?)?;

    print!(
        "{}",
        BarChart::monthly_totals(&report).render(ctx.settings.chart_width, ctx.currency())
    );
    Ok(())
}

pub fn handle_deficit(ctx: &AppContext, range: &RangeArgs, target: &str) -> BeerusResult<()> {
    let store = ctx.open_store()?;
    let report = BillService::new(&store).deficit_report(ctx.range(range)?, target)?;
    let symbol = ctx.currency();

    println!(
        "Monthly target: {}",
        report.target.format_with_symbol(symbol)
    );
    print!(
        "{}",
        BarChart::deficits(&report, symbol).render(ctx.settings.chart_width, symbol)
    );

    let over: Vec<String> = report.over_target().map(|m| m.month.to_string()).collect();
    if report.months.is_empty() {
        println!("No bills in range.");
    } else if over.is_empty() {
        println!("Spending stayed within the target every month.");
    } else {
        println!("Over target in: {}", over.join(", "));
    }
    Ok(())
}
