//! Filter keys, filter sets and the record inclusion predicate.
//!
//! A [`FilterSet`] maps each active [`FilterKey`] to the text its input holds.
//! Keys are either exact-match (`type1`, `type2`, `generation`, `legendary`)
//! or range bounds on one of three stats (`hp`, `attack`, `speed`). The set
//! never contains a key whose value is blank.
//!
//! [`matches`] is the whole predicate: a name substring search plus every
//! filter in the set, AND-combined.

use super::error::DexError;
use super::record::Record;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Stats that accept a min/max range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeStat {
    Hp,
    Attack,
    Speed,
}

impl RangeStat {
    pub const ALL: [Self; 3] = [Self::Hp, Self::Attack, Self::Speed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Speed => "speed",
        }
    }

    #[must_use]
    pub const fn value_of(self, record: &Record) -> u32 {
        match self {
            Self::Hp => record.hp,
            Self::Attack => record.attack,
            Self::Speed => record.speed,
        }
    }
}

/// Which end of a range a filter constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    Min,
    Max,
}

/// A filter control key.
///
/// The derived ordering is the order filters are listed in (and the order
/// chips are rendered in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Type1,
    Type2,
    Generation,
    Legendary,
    Range(RangeStat, Bound),
}

impl FilterKey {
    /// Every key, in listing order.
    pub const ALL: [Self; 10] = [
        Self::Type1,
        Self::Type2,
        Self::Generation,
        Self::Legendary,
        Self::Range(RangeStat::Hp, Bound::Min),
        Self::Range(RangeStat::Hp, Bound::Max),
        Self::Range(RangeStat::Attack, Bound::Min),
        Self::Range(RangeStat::Attack, Bound::Max),
        Self::Range(RangeStat::Speed, Bound::Min),
        Self::Range(RangeStat::Speed, Bound::Max),
    ];

    /// Stable text key, e.g. `type1` or `hp_min`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type1 => "type1",
            Self::Type2 => "type2",
            Self::Generation => "generation",
            Self::Legendary => "legendary",
            Self::Range(RangeStat::Hp, Bound::Min) => "hp_min",
            Self::Range(RangeStat::Hp, Bound::Max) => "hp_max",
            Self::Range(RangeStat::Attack, Bound::Min) => "attack_min",
            Self::Range(RangeStat::Attack, Bound::Max) => "attack_max",
            Self::Range(RangeStat::Speed, Bound::Min) => "speed_min",
            Self::Range(RangeStat::Speed, Bound::Max) => "speed_max",
        }
    }

    #[must_use]
    pub const fn is_range(self) -> bool {
        matches!(self, Self::Range(..))
    }

    /// Human label used for active-filter chips.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexplorer::domain::{Bound, FilterKey, RangeStat};
    ///
    /// assert_eq!(FilterKey::Range(RangeStat::Hp, Bound::Min).label(), "Min HP");
    /// assert_eq!(FilterKey::Generation.label(), "Generation");
    /// ```
    #[must_use]
    pub fn label(self) -> String {
        let fixed = match self {
            Self::Type1 => "Type 1",
            Self::Type2 => "Type 2",
            Self::Range(RangeStat::Hp, Bound::Min) => "Min HP",
            Self::Range(RangeStat::Hp, Bound::Max) => "Max HP",
            Self::Range(RangeStat::Attack, Bound::Min) => "Min Attack",
            Self::Range(RangeStat::Attack, Bound::Max) => "Max Attack",
            Self::Range(RangeStat::Speed, Bound::Min) => "Min Speed",
            Self::Range(RangeStat::Speed, Bound::Max) => "Max Speed",
            Self::Generation | Self::Legendary => return generic_label(self.as_str()),
        };
        fixed.to_string()
    }
}

/// First underscore becomes a space, first letter is upper-cased.
fn generic_label(key: &str) -> String {
    let spaced = key.replacen('_', " ", 1);
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = DexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DexError::UnknownFilter(s.to_string()))
    }
}

/// The text held by an active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterValue(String);

impl FilterValue {
    /// Wraps trimmed input text. Returns `None` for blank input.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_text(&self) -> &str {
        &self.0
    }

    /// Leading-integer reading of the value, as used by range filters.
    ///
    /// `"40"` and `"40abc"` both read as 40; `"abc"` reads as nothing.
    /// Integers too large for `i64` saturate rather than being dropped.
    #[must_use]
    pub fn as_bound(&self) -> Option<i64> {
        let s = self.0.trim_start();
        let (sign, digits) = match s.as_bytes().first() {
            Some(b'-') => (-1, &s[1..]),
            Some(b'+') => (1, &s[1..]),
            _ => (1, s),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        let digits = &digits[..end];
        if digits.is_empty() {
            return None;
        }
        let saturated = if sign < 0 { i64::MIN } else { i64::MAX };
        Some(digits.parse::<i64>().map_or(saturated, |n| sign * n))
    }

    /// Text shown on the chip for this value under `key`.
    #[must_use]
    pub fn display_for(&self, key: FilterKey) -> String {
        if key.is_range() {
            if let Some(n) = self.as_bound() {
                return n.to_string();
            }
        }
        self.0.clone()
    }
}

/// Active filters, keyed and ordered by [`FilterKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: BTreeMap<FilterKey, FilterValue>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` from raw input text; blank text removes the key.
    pub fn set(&mut self, key: FilterKey, text: &str) {
        match FilterValue::new(text) {
            Some(value) => {
                self.entries.insert(key, value);
            }
            None => {
                self.entries.remove(&key);
            }
        }
    }

    pub fn remove(&mut self, key: FilterKey) -> Option<FilterValue> {
        self.entries.remove(&key)
    }

    #[must_use]
    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.entries.get(&key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    fn bound(&self, stat: RangeStat, bound: Bound) -> Option<i64> {
        self.get(FilterKey::Range(stat, bound))
            .and_then(FilterValue::as_bound)
    }
}

/// Text of the record field an exact-match key compares against.
fn exact_field_text(record: &Record, key: FilterKey) -> Option<String> {
    match key {
        FilterKey::Type1 => Some(record.type1.clone()),
        FilterKey::Type2 => record.type2.clone(),
        FilterKey::Generation => Some(record.generation.to_string()),
        FilterKey::Legendary => Some(record.legendary.to_string()),
        FilterKey::Range(..) => None,
    }
}

/// Decides whether `record` passes the search term and every active filter.
///
/// - search: the lower-cased name must contain the lower-cased term
/// - `legendary`: the flag must equal `value == "true"`
/// - other exact keys: lower-cased field text must equal lower-cased value
/// - `<stat>_min` / `<stat>_max`: excludes stats strictly below / above
///
/// # Examples
///
/// ```
/// use dexplorer::domain::{matches, FilterKey, FilterSet};
/// use dexplorer::Record;
///
/// let record = Record::new(4, "Charmander", "Fire");
/// let mut filters = FilterSet::new();
/// filters.set(FilterKey::Type1, "fire");
///
/// assert!(matches(&record, &filters, "char"));
/// assert!(!matches(&record, &filters, "bulb"));
/// ```
#[must_use]
pub fn matches(record: &Record, filters: &FilterSet, search: &str) -> bool {
    if !search.is_empty() && !record.name.to_lowercase().contains(&search.to_lowercase()) {
        return false;
    }

    for (key, value) in filters.iter() {
        match key {
            FilterKey::Range(..) => {}
            FilterKey::Legendary => {
                if record.legendary != (value.as_text() == "true") {
                    return false;
                }
            }
            exact => {
                let wanted = value.as_text().to_lowercase();
                if exact_field_text(record, exact).map(|t| t.to_lowercase()) != Some(wanted) {
                    return false;
                }
            }
        }
    }

    RangeStat::ALL.into_iter().all(|stat| {
        let value = i64::from(stat.value_of(record));
        let above_min = filters.bound(stat, Bound::Min).map_or(true, |min| value >= min);
        let below_max = filters.bound(stat, Bound::Max).map_or(true, |max| value <= max);
        above_min && below_max
    })
}

/// Keeps the records that satisfy [`matches`], preserving input order.
#[must_use]
pub fn filter_records(records: &[Record], filters: &FilterSet, search: &str) -> Vec<Record> {
    let _span = tracing::debug_span!(
        "filter_records",
        total = records.len(),
        active_filters = filters.len(),
        search_len = search.len()
    )
    .entered();

    let kept: Vec<Record> = records
        .iter()
        .filter(|record| matches(record, filters, search))
        .cloned()
        .collect();

    tracing::trace!(kept = kept.len(), "filter applied");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_text() {
        for key in FilterKey::ALL {
            assert_eq!(key.as_str().parse::<FilterKey>().unwrap(), key);
        }
        assert!(matches!(
            "weight".parse::<FilterKey>(),
            Err(DexError::UnknownFilter(k)) if k == "weight"
        ));
    }

    #[test]
    fn labels_match_chip_table() {
        assert_eq!(FilterKey::Type1.label(), "Type 1");
        assert_eq!(FilterKey::Type2.label(), "Type 2");
        assert_eq!(FilterKey::Range(RangeStat::Attack, Bound::Max).label(), "Max Attack");
        assert_eq!(FilterKey::Range(RangeStat::Speed, Bound::Min).label(), "Min Speed");
        assert_eq!(FilterKey::Legendary.label(), "Legendary");
        assert_eq!(generic_label("base_experience"), "Base experience");
    }

    #[test]
    fn bound_reads_leading_integer() {
        assert_eq!(FilterValue::new("40").unwrap().as_bound(), Some(40));
        assert_eq!(FilterValue::new(" 12abc ").unwrap().as_bound(), Some(12));
        assert_eq!(FilterValue::new("-3").unwrap().as_bound(), Some(-3));
        assert_eq!(FilterValue::new("abc").unwrap().as_bound(), None);
        assert_eq!(FilterValue::new("-").unwrap().as_bound(), None);
        assert_eq!(
            FilterValue::new("99999999999999999999").unwrap().as_bound(),
            Some(i64::MAX)
        );
        assert_eq!(
            FilterValue::new("-99999999999999999999").unwrap().as_bound(),
            Some(i64::MIN)
        );
        assert!(FilterValue::new("   ").is_none());
    }

    #[test]
    fn blank_set_removes_key() {
        let mut filters = FilterSet::new();
        filters.set(FilterKey::Generation, "1");
        assert_eq!(filters.get(FilterKey::Generation).map(FilterValue::as_text), Some("1"));
        filters.set(FilterKey::Generation, "  ");
        assert!(filters.is_empty());
    }

    #[test]
    fn iteration_follows_listing_order() {
        let mut filters = FilterSet::new();
        filters.set(FilterKey::Range(RangeStat::Speed, Bound::Max), "100");
        filters.set(FilterKey::Legendary, "false");
        filters.set(FilterKey::Type1, "Fire");
        let keys: Vec<&str> = filters.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["type1", "legendary", "speed_max"]);
    }

    #[test]
    fn unparsable_bound_imposes_no_constraint() {
        let mut record = Record::new(1, "Bulba", "Grass");
        record.hp = 45;
        let mut filters = FilterSet::new();
        filters.set(FilterKey::Range(RangeStat::Hp, Bound::Min), "lots");
        assert!(matches(&record, &filters, ""));
    }
}
