//! Keyword rules that attribute extracted dates to NAV, performance and holdings.
//!
//! Each bucket is decided independently, so one record may land in several.
//! Within a bucket the latest date wins; ties keep the earlier record.

use chrono::NaiveDate;

use crate::domain::{Bucket, DateRecord};

/// Latest qualifying record per bucket for one fund page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub nav: Option<DateRecord>,
    pub performance: Option<DateRecord>,
    pub holdings: Option<DateRecord>,
}

impl Classification {
    pub fn get(&self, bucket: Bucket) -> Option<&DateRecord> {
        match bucket {
            Bucket::Nav => self.nav.as_ref(),
            Bucket::Performance => self.performance.as_ref(),
            Bucket::Holdings => self.holdings.as_ref(),
        }
    }
}

/// Whether `record` counts as evidence for `bucket` on `today`.
pub fn qualifies(bucket: Bucket, record: &DateRecord, today: NaiveDate) -> bool {
    let ctx = record.context.as_str();
    let mentions_holdings = ctx.contains("holding") || ctx.contains("characteristics");
    match bucket {
        // A NAV dated today is the holdings widget bleeding through; NAV is never same-day.
        Bucket::Nav => {
            (ctx.contains("nav") || ctx.contains("net asset"))
                && !mentions_holdings
                && record.date != today
        }
        Bucket::Performance => ctx.contains("return"),
        Bucket::Holdings => mentions_holdings && !ctx.contains("return"),
    }
}

pub fn classify(records: &[DateRecord], today: NaiveDate) -> Classification {
    let latest = |bucket: Bucket| {
        records
            .iter()
            .filter(|r| qualifies(bucket, r, today))
            .fold(None::<&DateRecord>, |best, r| match best {
                Some(b) if r.date <= b.date => Some(b),
                _ => Some(r),
            })
            .cloned()
    };

    Classification {
        nav: latest(Bucket::Nav),
        performance: latest(Bucket::Performance),
        holdings: latest(Bucket::Holdings),
    }
}
