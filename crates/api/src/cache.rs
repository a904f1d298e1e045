//! Memoized slot lists keyed by availability window.
//!
//! Slot generation depends only on the window, so a provider's list is built
//! once and shared between requests. Windows come from clients, so the cache
//! holds at most `capacity` of them and evicts the oldest entry first.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use eyre::eyre;
use slotbook_core::{
    errors::{TimeError, TimeResult},
    models::{availability::AvailabilityWindow, time::TimeLabel},
};
use tracing::debug;

use crate::config::DEFAULT_SLOT_CACHE_CAPACITY;

#[derive(Debug, Default)]
struct Entries {
    slots: HashMap<AvailabilityWindow, Arc<Vec<TimeLabel>>>,
    // Insertion order, oldest first
    order: VecDeque<AvailabilityWindow>,
}

#[derive(Debug)]
pub struct SlotCache {
    capacity: usize,
    entries: RwLock<Entries>,
}

impl Default for SlotCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SLOT_CACHE_CAPACITY)
    }
}

impl SlotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `capacity` windows. Zero disables storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(Entries::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots for `window`, generating and storing them on first use.
    pub fn slots_for(&self, window: &AvailabilityWindow) -> TimeResult<Arc<Vec<TimeLabel>>> {
        {
            let entries = self.entries.read().map_err(|_| poisoned())?;
            if let Some(slots) = entries.slots.get(window) {
                return Ok(Arc::clone(slots));
            }
        }

        debug!(open = %window.open, close = %window.close, "Generating slots for window");
        let slots = Arc::new(window.slots());
        if self.capacity == 0 {
            return Ok(slots);
        }

        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        if let Some(existing) = entries.slots.get(window) {
            return Ok(Arc::clone(existing));
        }

        while entries.slots.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.slots.remove(&oldest);
            debug!(open = %oldest.open, close = %oldest.close, "Evicted window from slot cache");
        }

        entries.slots.insert(*window, Arc::clone(&slots));
        entries.order.push_back(*window);
        Ok(slots)
    }

    pub fn contains(&self, window: &AvailabilityWindow) -> bool {
        self.entries
            .read()
            .map(|entries| entries.slots.contains_key(window))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .map(|entries| entries.slots.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> TimeError {
    TimeError::Internal(eyre!("slot cache lock poisoned"))
}
