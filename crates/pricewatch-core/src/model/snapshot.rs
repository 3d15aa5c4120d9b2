//! Snapshot dates.

use chrono::{Days, NaiveDate};

/// `date − 1 day`; `None` only at the start of the calendar range
pub fn prior_date(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}
