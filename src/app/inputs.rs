//! Raw text of the filter controls and the identifiers that address them.
//!
//! The filter panel keeps exactly what the user typed, untrimmed. The active
//! [`FilterSet`] is rebuilt from these inputs from scratch after every change,
//! so a control that was cleared can never leave a stale key behind.

use crate::domain::error::{DexError, Result};
use crate::domain::{FilterKey, FilterSet};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Text currently held by each filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    values: BTreeMap<FilterKey, String>,
}

impl FilterInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: FilterKey, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, text);
        }
    }

    /// Current text of the control for `key`; empty when untouched.
    #[must_use]
    pub fn get(&self, key: FilterKey) -> &str {
        self.values.get(&key).map_or("", String::as_str)
    }

    pub fn push_char(&mut self, key: FilterKey, c: char) {
        self.values.entry(key).or_default().push(c);
    }

    pub fn pop_char(&mut self, key: FilterKey) {
        if let Some(text) = self.values.get_mut(&key) {
            text.pop();
            if text.is_empty() {
                self.values.remove(&key);
            }
        }
    }

    pub fn clear(&mut self, key: FilterKey) {
        self.values.remove(&key);
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// Builds the filter set from scratch: trimmed, blanks discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexplorer::app::FilterInputs;
    /// use dexplorer::domain::FilterKey;
    ///
    /// let mut inputs = FilterInputs::new();
    /// inputs.set(FilterKey::Type1, "  Fire ");
    /// inputs.set(FilterKey::Type2, "   ");
    ///
    /// let filters = inputs.rebuild_filter_set();
    /// assert_eq!(filters.len(), 1);
    /// assert_eq!(filters.get(FilterKey::Type1).map(|v| v.as_text()), Some("Fire"));
    /// ```
    #[must_use]
    pub fn rebuild_filter_set(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        for (key, text) in &self.values {
            filters.set(*key, text);
        }
        filters
    }
}

/// A user input addressed by its stable identifier.
///
/// Identifiers follow the element ids of the original web page:
/// `search-box`, `filter-sort`, and `filter-<key>` with underscores written as
/// hyphens (`filter-type1`, `filter-hp-min`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Search,
    Sort,
    Filter(FilterKey),
}

impl Control {
    /// The identifier this control parses from.
    #[must_use]
    pub fn id(self) -> String {
        match self {
            Self::Search => "search-box".to_string(),
            Self::Sort => "filter-sort".to_string(),
            Self::Filter(key) => format!("filter-{}", key.as_str().replace('_', "-")),
        }
    }
}

impl FromStr for Control {
    type Err = DexError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "search-box" => Ok(Self::Search),
            "filter-sort" => Ok(Self::Sort),
            other => other
                .strip_prefix("filter-")
                .and_then(|rest| rest.replace('-', "_").parse::<FilterKey>().ok())
                .map(Self::Filter)
                .ok_or_else(|| DexError::UnknownControl(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bound, RangeStat};

    #[test]
    fn control_ids_parse() {
        assert_eq!("search-box".parse::<Control>().ok(), Some(Control::Search));
        assert_eq!("filter-sort".parse::<Control>().ok(), Some(Control::Sort));
        assert_eq!(
            "filter-type1".parse::<Control>().ok(),
            Some(Control::Filter(FilterKey::Type1))
        );
        assert_eq!(
            "filter-hp-min".parse::<Control>().ok(),
            Some(Control::Filter(FilterKey::Range(RangeStat::Hp, Bound::Min)))
        );
        assert!(matches!(
            "filter-colour".parse::<Control>(),
            Err(DexError::UnknownControl(_))
        ));
    }

    #[test]
    fn control_id_round_trips_for_every_filter() {
        for key in FilterKey::ALL {
            let control = Control::Filter(key);
            assert_eq!(control.id().parse::<Control>().ok(), Some(control));
        }
    }

    #[test]
    fn backspace_to_empty_drops_the_input() {
        let mut inputs = FilterInputs::new();
        inputs.push_char(FilterKey::Generation, '1');
        inputs.pop_char(FilterKey::Generation);
        assert_eq!(inputs.get(FilterKey::Generation), "");
        assert!(inputs.rebuild_filter_set().is_empty());
    }
}
