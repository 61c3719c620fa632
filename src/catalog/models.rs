//! Raw dataset row model.
//!
//! The bundled dataset file uses spreadsheet-style column names (`"#"`,
//! `"Type 1"`, `"Sp. Atk"`, ...). [`RawRecord`] mirrors that layout and
//! converts into the domain [`Record`] the rest of the crate works with.

use crate::domain::{Record, Sprites};
use serde::Deserialize;

/// One row of the raw dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "#")]
    pub number: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type 1")]
    pub type1: String,
    #[serde(rename = "Type 2", default)]
    pub type2: Option<String>,
    #[serde(rename = "HP")]
    pub hp: u32,
    #[serde(rename = "Attack")]
    pub attack: u32,
    #[serde(rename = "Defense")]
    pub defense: u32,
    #[serde(rename = "Sp. Atk")]
    pub sp_atk: u32,
    #[serde(rename = "Sp. Def")]
    pub sp_def: u32,
    #[serde(rename = "Speed")]
    pub speed: u32,
    #[serde(rename = "Generation", default)]
    pub generation: u32,
    #[serde(rename = "Legendary", default)]
    pub legendary: bool,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub base_experience: i64,
    #[serde(default, deserialize_with = "Sprites::deserialize_lenient")]
    pub sprites: Sprites,
}

impl RawRecord {
    /// Converts the row into a catalog record.
    ///
    /// The dataset fills `"Type 2"` with `"Normal"` for single-typed
    /// creatures, so that value (like a blank one) becomes no secondary type.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexplorer::catalog::RawRecord;
    ///
    /// let raw: RawRecord = serde_json::from_value(serde_json::json!({
    ///     "#": 4, "Name": "Charmander", "Type 1": "Fire", "Type 2": "Normal",
    ///     "HP": 39, "Attack": 52, "Defense": 43, "Sp. Atk": 60, "Sp. Def": 50,
    ///     "Speed": 65, "Generation": 1, "Legendary": false,
    ///     "sprites": "{'normal': 'charmander.png', 'animated': 'charmander.gif'}"
    /// })).unwrap();
    ///
    /// let record = raw.into_record();
    /// assert_eq!(record.id, 4);
    /// assert!(record.type2.is_none());
    /// assert_eq!(record.sprites.detail_url(), "charmander.gif");
    /// ```
    #[must_use]
    pub fn into_record(self) -> Record {
        let type2 = self
            .type2
            .filter(|t| !t.trim().is_empty() && t != "Normal");

        Record {
            id: self.number,
            name: self.name,
            type1: self.type1,
            type2,
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            sp_atk: self.sp_atk,
            sp_def: self.sp_def,
            speed: self.speed,
            height: self.height,
            weight: self.weight,
            base_experience: self.base_experience,
            generation: self.generation,
            legendary: self.legendary,
            sprites: self.sprites,
        }
    }
}
