//! Time-bounded cache in front of any [`TickerSource`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::calendar::Clock;
use crate::data::TickerSource;
use crate::domain::FundId;

struct Cached {
    fetched_at: DateTime<Utc>,
    tickers: Vec<FundId>,
}

pub struct TickerCache<S> {
    source: S,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    state: Mutex<Option<Cached>>,
}

impl<S: TickerSource> TickerCache<S> {
    pub fn new(source: S, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            state: Mutex::new(None),
        }
    }

    /// Cached tickers while fresh, otherwise a refreshed set.
    pub fn get(&self) -> Vec<FundId> {
        let now = self.clock.now();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(cached) = state.as_ref()
            && now.signed_duration_since(cached.fetched_at) < self.ttl
        {
            debug!(count = cached.tickers.len(), "ticker cache hit");
            return cached.tickers.clone();
        }

        let tickers = self.source.tickers();
        debug!(count = tickers.len(), "ticker cache refreshed");
        *state = Some(Cached {
            fetched_at: now,
            tickers: tickers.clone(),
        });
        tickers
    }

    /// Force the next [`get`](Self::get) to refresh.
    pub fn invalidate(&self) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl<S: TickerSource> TickerSource for TickerCache<S> {
    fn tickers(&self) -> Vec<FundId> {
        self.get()
    }
}
