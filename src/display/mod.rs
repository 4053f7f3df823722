//! Display formatting for terminal output
//!
//! Bill registers, report summaries and text bar charts.

pub mod bill;
pub mod chart;

pub use bill::{format_bill_listing, format_bill_register, format_bill_summary};
pub use chart::{format_bar, BarChart};

/// Truncate a string to at most `max_len` characters, with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
