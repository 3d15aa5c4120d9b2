//! Snapshot file naming
//!
//! One file per calendar date: `<root>/YYYY-MM-DD.json`.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";
const EXTENSION: &str = "json";

/// File name holding the snapshot for `date`
pub fn file_name_for(date: NaiveDate) -> String {
    format!("{}.{}", date.format(DATE_FORMAT), EXTENSION)
}

/// Inverse of [`file_name_for`]; `None` for anything that is not a snapshot file
pub fn date_from_file_name(name: &str) -> Option<NaiveDate> {
    let stem = name.strip_suffix(EXTENSION)?.strip_suffix('.')?;
    // %Y accepts more than four digits and %m/%d accept single digits;
    // only the canonical spelling names a snapshot.
    let date = NaiveDate::parse_from_str(stem, DATE_FORMAT).ok()?;
    (file_name_for(date) == name).then_some(date)
}
