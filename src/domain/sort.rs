//! Sort options and the stable record sort.
//!
//! Identifier order is ascending; stat orders are descending (strongest
//! first); names use [`collate`]. Every order is a stable sort, so records
//! with equal keys keep the order they were filtered in.

use super::error::DexError;
use super::record::Record;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The active list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    #[default]
    Id,
    Name,
    Hp,
    Attack,
    Defense,
    Speed,
}

impl SortOption {
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::Speed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Speed => "speed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "Number",
            Self::Name => "Name",
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Speed => "Speed",
        }
    }

    /// The option after this one, wrapping back to [`SortOption::Id`].
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => collate(&a.name, &b.name),
            Self::Hp => b.hp.cmp(&a.hp),
            Self::Attack => b.attack.cmp(&a.attack),
            Self::Defense => b.defense.cmp(&a.defense),
            Self::Speed => b.speed.cmp(&a.speed),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = DexError;

    /// Parses a sort key. The empty string means the default order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.is_empty() {
            return Ok(Self::default());
        }
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == key)
            .ok_or_else(|| DexError::UnknownSort(key.to_string()))
    }
}

/// Locale-style string ordering.
///
/// Compares in three levels, the way typical collations do:
///
/// 1. base letters, with case and diacritics folded away (`"é"` sorts with `"e"`)
/// 2. diacritics, unaccented first (`"e"` before `"é"`)
/// 3. case, lower case first (`"a"` before `"A"`)
///
/// # Examples
///
/// ```
/// use dexplorer::domain::collate;
/// use std::cmp::Ordering;
///
/// assert_eq!(collate("abra", "Bulba"), Ordering::Less);
/// assert_eq!(collate("mew", "Mew"), Ordering::Less);
/// assert_eq!(collate("Flabébé", "Flareon"), Ordering::Less);
/// ```
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let base = |s: &str| -> Vec<char> {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    };
    let accented = |s: &str| -> Vec<char> { s.nfd().flat_map(char::to_lowercase).collect() };

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => x.cmp(&y),
                    }
                })
        })
}

/// Returns a new vector with `records` ordered by `option`.
///
/// The input is left untouched.
#[must_use]
pub fn sort_records(records: &[Record], option: SortOption) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| option.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_and_blank_means_default() {
        assert_eq!("speed".parse::<SortOption>().unwrap(), SortOption::Speed);
        assert_eq!("".parse::<SortOption>().unwrap(), SortOption::Id);
        assert!(matches!(
            "weight".parse::<SortOption>(),
            Err(DexError::UnknownSort(_))
        ));
    }

    #[test]
    fn next_cycles_through_every_option() {
        let mut option = SortOption::Id;
        for _ in 0..SortOption::ALL.len() {
            option = option.next();
        }
        assert_eq!(option, SortOption::Id);
        assert_eq!(SortOption::Speed.next(), SortOption::Id);
    }

    #[test]
    fn collate_ignores_case_for_primary_order() {
        assert_eq!(collate("eevee", "Charm"), Ordering::Greater);
        assert_eq!(collate("Abra", "abra"), Ordering::Greater);
        assert_eq!(collate("Pidgey", "Pidgey"), Ordering::Equal);
        assert_eq!(collate("Nido", "Nidoran"), Ordering::Less);
    }

    #[test]
    fn collate_folds_diacritics_before_comparing() {
        assert_eq!(collate("é", "f"), Ordering::Less);
        assert_eq!(collate("e", "é"), Ordering::Less);
        assert_eq!(collate("Flabébé", "Flabebe"), Ordering::Greater);
        assert_eq!(collate("É", "é"), Ordering::Greater);
    }
}
