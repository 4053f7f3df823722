//! CSV export of bills

use std::io::Write;

use crate::error::BeerusResult;
use crate::models::Bill;

/// Write bills as `title,amount,date` rows with a header
pub fn export_bills_csv<W: Write>(bills: &[Bill], writer: W) -> BeerusResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["title", "amount", "date"])?;

    for bill in bills {
        let amount = bill.amount.to_string();
        let date = bill.date_key();
        csv_writer.write_record([bill.title.as_str(), amount.as_str(), date.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
