//! Weekday key normalization and the weekday-keyed map type.
//!
//! Fixed weekly patterns, ideal staffing counts, and blocked-day lists are
//! all keyed by weekday *name*. To keep those lookups deterministic across
//! data sources, every key is normalized to the trimmed, lowercase English
//! weekday name before it is stored or compared.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Returns the canonical lowercase key for a weekday.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use roster_engine::models::weekday_key;
///
/// assert_eq!(weekday_key(Weekday::Mon), "monday");
/// assert_eq!(weekday_key(Weekday::Sun), "sunday");
/// ```
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Normalizes a raw weekday (or wildcard) key for storage and comparison.
pub fn normalize_day_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// An associative container keyed by normalized weekday name.
///
/// Keys are normalized on insert and on lookup, so `"Monday"`, `" monday "`
/// and `"monday"` all address the same slot. Serializes transparently as a
/// plain string-keyed map.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use roster_engine::models::WeekdayMap;
///
/// let mut fixed = WeekdayMap::new();
/// fixed.insert("Monday", "early".to_string());
/// assert_eq!(fixed.get(Weekday::Mon), Some(&"early".to_string()));
/// assert_eq!(fixed.get(Weekday::Tue), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayMap<V>(BTreeMap<String, V>);

impl<V> WeekdayMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a value under the normalized form of `day`, returning the
    /// previous value if the slot was occupied.
    pub fn insert(&mut self, day: &str, value: V) -> Option<V> {
        self.0.insert(normalize_day_key(day), value)
    }

    /// Looks up the value stored for a weekday.
    pub fn get(&self, day: Weekday) -> Option<&V> {
        self.0.get(weekday_key(day))
    }

    /// Looks up a value by raw key, normalizing it first.
    pub fn get_key(&self, day: &str) -> Option<&V> {
        self.0.get(&normalize_day_key(day))
    }

    /// Removes the value stored for a raw key, normalizing it first.
    pub fn remove(&mut self, day: &str) -> Option<V> {
        self.0.remove(&normalize_day_key(day))
    }

    /// Whether any value is stored for the weekday.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains_key(weekday_key(day))
    }

    /// Number of populated weekday slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(normalized key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.0.iter()
    }
}

impl<V> Default for WeekdayMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for WeekdayMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(&key, value);
        }
        map
    }
}
