//! Per-fund publication deadlines.
//!
//! Standard funds: NAV by T-1, holdings same day.
//! Exception funds: NAV by T-2, holdings by T-1.
//! Everyone: the previous month-end distribution date must appear on the page.

use chrono::NaiveDate;

use crate::calendar::business::{business_days_back, last_business_day_of_previous_month};
use crate::domain::{ExpectationSet, FundId, MonitorConfig};

/// Deadlines for `id` on `today`. Pure: same inputs, same output.
pub fn expectations_for(id: &FundId, today: NaiveDate, config: &MonitorConfig) -> ExpectationSet {
    let (nav_lag, holdings_lag) = if config.is_exception(id) { (2, 1) } else { (1, 0) };

    ExpectationSet {
        nav_deadline: business_days_back(today, nav_lag),
        holdings_deadline: business_days_back(today, holdings_lag),
        distribution_deadline: last_business_day_of_previous_month(today),
    }
}
