//! Memoization cache for resolved nearest colors.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::color::Color;

/// Cache from exact input colors to their resolved palette colors.
///
/// Keys are full 4-channel [`Color`] values compared exactly, so two
/// inputs that differ in any channel occupy separate entries. There is no
/// eviction: entries are pure memoizations that stay valid for as long as
/// the palette and metric they were computed under, and working sets for
/// single images are small.
///
/// Cloning is cheap and shares the underlying table, which lets one warm
/// cache serve conversions running on separate threads. Reads and writes
/// are synchronized through an internal lock; a poisoned lock is usable
/// anyway since entries cannot be left half-written.
#[derive(Debug, Clone)]
pub struct ColorCache {
    entries: Arc<RwLock<HashMap<Color, Color>>>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Look up the resolved color for `color`, if previously inserted.
    pub fn get(&self, color: Color) -> Option<Color> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(&color).copied()
    }

    /// Record `resolved` as the result for `color`.
    pub fn insert(&self, color: Color, resolved: Color) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(color, resolved);
    }

    /// Number of memoized colors.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// True if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all memoized entries.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new()
    }
}
