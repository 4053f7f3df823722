//! Terminal bar charts
//!
//! Monthly totals and deficits are drawn as horizontal bars scaled to the
//! largest absolute value. Negative values use a lighter glyph.

use crate::models::Money;
use crate::reports::{DeficitReport, MonthlyReport};

const POSITIVE_GLYPH: &str = "█";
const NEGATIVE_GLYPH: &str = "▒";

/// A titled list of labelled values
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub rows: Vec<(String, Money)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: impl Into<String>, value: Money) -> Self {
        self.rows.push((label.into(), value));
        self
    }

    /// Monthly spending totals
    pub fn monthly_totals(report: &MonthlyReport) -> Self {
        let chart = Self::new(format!("From {}", report.range));
        report
            .buckets
            .iter()
            .fold(chart, |chart, b| chart.row(b.month.to_string(), b.total))
    }

    /// Per-month deficits, titled with the total
    pub fn deficits(report: &DeficitReport, currency_symbol: &str) -> Self {
        let chart = Self::new(format!(
            "Total deficit: {}",
            report.total_deficit.format_with_symbol(currency_symbol)
        ));
        report
            .months
            .iter()
            .fold(chart, |chart, m| chart.row(m.month.to_string(), m.deficit))
    }

    /// Render with bars at most `width` cells long
    pub fn render(&self, width: usize, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&"─".repeat(self.title.chars().count().max(width + 10)));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("(no data)\n");
            return output;
        }

        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let max_value = self
            .rows
            .iter()
            .map(|(_, value)| value.abs().to_f64())
            .fold(0.0_f64, f64::max);

        for (label, value) in &self.rows {
            output.push_str(&format!(
                "{:<label_width$} │{} {}\n",
                label,
                format_bar(value.to_f64(), max_value, width),
                value.format_with_symbol(currency_symbol),
                label_width = label_width
            ));
        }

        output
    }
}

/// A bar of `width` cells, filled in proportion to `|value| / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value == 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value.abs() / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);
    let glyph = if value < 0.0 {
        NEGATIVE_GLYPH
    } else {
        POSITIVE_GLYPH
    };

    format!("{}{}", glyph.repeat(filled), " ".repeat(width - filled))
}
