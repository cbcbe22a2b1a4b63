//! Business-day stepping.
//!
//! A business day is Monday–Friday. Public holidays are not modelled.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn is_business_day(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The date `n` business days before `d` (T-n).
///
/// Walks back one calendar day at a time, counting only weekdays. For `n = 0`
/// a weekday returns `d` itself and a weekend date rolls back to the preceding
/// Friday, so the result is always a business day.
pub fn business_days_back(d: NaiveDate, n: u32) -> NaiveDate {
    let mut curr = d;
    if n == 0 {
        while !is_business_day(curr) {
            let Some(prev) = curr.pred_opt() else { break };
            curr = prev;
        }
        return curr;
    }

    let mut counted = 0;
    while counted < n {
        let Some(prev) = curr.pred_opt() else { break };
        curr = prev;
        if is_business_day(curr) {
            counted += 1;
        }
    }
    curr
}

/// Last business day of the month before `d`'s month.
pub fn last_business_day_of_previous_month(d: NaiveDate) -> NaiveDate {
    let first = d.with_day(1).unwrap_or(d);
    let mut curr = first.pred_opt().unwrap_or(first);
    while !is_business_day(curr) {
        let Some(prev) = curr.pred_opt() else { break };
        curr = prev;
    }
    curr
}
