//! Catalog record model.
//!
//! A [`Record`] is one creature as delivered by the collection endpoint.
//! Records are read-only once loaded; the store only ever replaces the whole
//! collection. The sprite reference is the one field that arrives in more
//! than one shape, so it gets a lenient deserializer that never fails.

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry.
///
/// Field names match the endpoint's JSON keys. `type2` is `None` when the
/// wire value is missing, `null` or blank. Numeric and flag fields read a
/// missing or `null` value as zero / `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub type1: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub type2: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hp: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attack: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub defense: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sp_atk: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sp_def: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_experience: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub generation: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub legendary: bool,
    #[serde(default, deserialize_with = "Sprites::deserialize_lenient")]
    pub sprites: Sprites,
}

impl Record {
    /// Creates a record with the given identity and zeroed attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexplorer::Record;
    ///
    /// let mut record = Record::new(25, "Pikachu", "Electric");
    /// record.speed = 90;
    /// assert_eq!(record.display_id(), "#025");
    /// assert!(record.type2.is_none());
    /// ```
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, type1: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type1: type1.into(),
            type2: None,
            hp: 0,
            attack: 0,
            defense: 0,
            sp_atk: 0,
            sp_def: 0,
            speed: 0,
            height: 0.0,
            weight: 0.0,
            base_experience: 0,
            generation: 0,
            legendary: false,
            sprites: Sprites::default(),
        }
    }

    /// Identifier zero-padded to three digits, prefixed with `#`.
    #[must_use]
    pub fn display_id(&self) -> String {
        format!("#{:03}", self.id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Sprite image references for a record.
///
/// Empty strings are treated the same as absent URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub normal: Option<String>,
    #[serde(default)]
    pub animated: Option<String>,
}

/// Every shape the sprite field has been seen in.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpritesWire {
    Structured(Sprites),
    Text(String),
    Other(serde_json::Value),
}

impl Sprites {
    /// URL used for list rows: the static sprite, or `""`.
    #[must_use]
    pub fn list_url(&self) -> &str {
        non_empty(self.normal.as_deref()).unwrap_or("")
    }

    /// URL used for the detail panel: animated, then static, then `""`.
    #[must_use]
    pub fn detail_url(&self) -> &str {
        non_empty(self.animated.as_deref())
            .or_else(|| non_empty(self.normal.as_deref()))
            .unwrap_or("")
    }

    /// Parses the serialized text form of a sprite reference.
    ///
    /// Accepts JSON objects and Python-literal dicts (single quotes, `None`).
    /// Anything else falls back to empty URLs.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexplorer::domain::Sprites;
    ///
    /// let sprites = Sprites::parse_text("{'normal': 'a.png', 'animated': None}");
    /// assert_eq!(sprites.list_url(), "a.png");
    /// assert_eq!(sprites.detail_url(), "a.png");
    ///
    /// assert_eq!(Sprites::parse_text("<<garbage>>"), Sprites::default());
    /// ```
    #[must_use]
    pub fn parse_text(text: &str) -> Self {
        if let Ok(sprites) = serde_json::from_str::<Self>(text) {
            return sprites;
        }

        match serde_json::from_str::<Self>(&python_literal_to_json(text)) {
            Ok(sprites) => sprites,
            Err(e) => {
                tracing::warn!(error = %e, text_len = text.len(), "unparsable sprite data, using empty urls");
                Self::default()
            }
        }
    }

    /// Deserializes a sprite field from a structure, text, or anything else.
    ///
    /// # Errors
    ///
    /// Only fails when the underlying deserializer itself is broken; malformed
    /// sprite values resolve to [`Sprites::default`].
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match SpritesWire::deserialize(deserializer)? {
            SpritesWire::Structured(sprites) => sprites,
            SpritesWire::Text(text) => Self::parse_text(&text),
            SpritesWire::Other(value) => {
                if !value.is_null() {
                    tracing::warn!(value = %value, "unexpected sprite shape, using empty urls");
                }
                Self::default()
            }
        })
    }
}

fn non_empty(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.is_empty())
}

/// Rewrites a Python dict literal into JSON text.
///
/// Handles single- and double-quoted strings and the `None`/`True`/`False`
/// keywords. The output is only guaranteed to be JSON when the input is a
/// simple literal.
fn python_literal_to_json(text: &str) -> String {
    fn flush(word: &mut String, out: &mut String) {
        match word.as_str() {
            "None" => out.push_str("null"),
            "True" => out.push_str("true"),
            "False" => out.push_str("false"),
            other => out.push_str(other),
        }
        word.clear();
    }

    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            match c {
                '\\' => match chars.next() {
                    Some('\'') => out.push('\''),
                    Some(next) => {
                        out.push('\\');
                        out.push(next);
                    }
                    None => out.push('\\'),
                },
                c if c == q => {
                    out.push('"');
                    quote = None;
                }
                '"' => out.push_str("\\\""),
                c => out.push(c),
            }
            continue;
        }

        match c {
            '\'' | '"' => {
                flush(&mut word, &mut out);
                out.push('"');
                quote = Some(c);
            }
            c if c.is_alphanumeric() || c == '_' => word.push(c),
            c => {
                flush(&mut word, &mut out);
                out.push(c);
            }
        }
    }
    flush(&mut word, &mut out);

    out
}
