//! Bill register formatting

use crate::models::Bill;
use crate::reports::MonthlyReport;

use super::truncate;

const TITLE_WIDTH: usize = 24;

/// Format a numbered register of bills
pub fn format_bill_register(bills: &[Bill], currency_symbol: &str) -> String {
    if bills.is_empty() {
        return "No bills found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}{:<26}{:>14}  {:<10}\n",
        "No.", "Title", "Amount", "Date"
    ));

    for (i, bill) in bills.iter().enumerate() {
        output.push_str(&format!(
            "{:<5}{:<26}{:>14}  {:<10}\n",
            i + 1,
            truncate(&bill.title, TITLE_WIDTH),
            bill.amount.format_with_symbol(currency_symbol),
            bill.date_key()
        ));
    }

    output
}

/// Format the `list` output: register, total and monthly average
pub fn format_bill_listing(report: &MonthlyReport, currency_symbol: &str) -> String {
    let rule = "=".repeat(59);
    let mut output = String::new();

    output.push_str(&format!("Period of {}\n", report.range));
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format_bill_register(&report.bills, currency_symbol));
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "Total amount: {}\n",
        report.total.format_with_symbol(currency_symbol)
    ));

    match report.monthly_average() {
        Some(average) => output.push_str(&format!(
            "Monthly average: {}\n",
            average.format_with_symbol(currency_symbol)
        )),
        None => output.push_str("Monthly average: n/a (no bills in range)\n"),
    }

    output
}

/// One-line confirmation summary for a bill about to be stored or removed
pub fn format_bill_summary(verb: &str, bill: &Bill) -> String {
    format!("{} {}.", verb, bill)
}
