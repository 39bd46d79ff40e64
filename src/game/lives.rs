//! Lives accounting with a once-a-day refill
//!
//! Invariant: `0 <= count <= max`. Every change is written to storage
//! straight away.

use super::clock::date_key;
use crate::storage::{KeyValueStore, StoreExt, keys};
use chrono::NaiveDate;

/// Remaining lives for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivesTracker {
    count: u8,
    max: u8,
}

impl LivesTracker {
    /// Read the stored count
    ///
    /// A player with no stored count starts full. If the read fails the
    /// player has zero lives until storage recovers.
    pub fn load<S: KeyValueStore + ?Sized>(max: u8, store: &S) -> Self {
        let count: u8 = store.load_or(keys::LIVES_COUNT, max, 0);
        Self {
            count: count.min(max),
            max,
        }
    }

    #[inline]
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> u8 {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.count == 0
    }

    /// Take one life, never going below zero; returns the new count
    pub fn consume_life<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> u8 {
        self.count = self.count.saturating_sub(1);
        store.save_logged(keys::LIVES_COUNT, &self.count);
        self.count
    }

    /// Restore lives to the maximum
    pub fn grant_full<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        self.count = self.max;
        store.save_logged(keys::LIVES_COUNT, &self.count);
    }

    /// Grant a full refill if none was granted on `today` yet
    ///
    /// Returns whether lives were granted. If the stored refill date cannot
    /// be read, no refill is granted.
    pub fn try_daily_refill<S: KeyValueStore + ?Sized>(
        &mut self,
        today: NaiveDate,
        store: &mut S,
    ) -> bool {
        let key = date_key(today);

        match store.load::<String>(keys::LIVES_REFILL_DATE) {
            Ok(Some(last)) if last == key => return false,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Cannot read last refill date, skipping refill: {e}");
                return false;
            }
        }

        store.save_logged(keys::LIVES_REFILL_DATE, &key);
        self.grant_full(store);
        tracing::info!("Daily refill granted for {key}");
        true
    }
}
