use serde::{Deserialize, Serialize};

/// An item as returned by the `item` search index with the
/// `ID,Name,Bonuses,Name_*` columns.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name_en", default)]
    pub name_en: Option<String>,
    #[serde(rename = "Name_de", default)]
    pub name_de: Option<String>,
    #[serde(rename = "Name_fr", default)]
    pub name_fr: Option<String>,
    #[serde(rename = "Name_ja", default)]
    pub name_ja: Option<String>,
    #[serde(default)]
    pub bonuses: Option<Bonuses>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bonuses {
    #[serde(rename = "CP", default)]
    pub cp: Option<Bonus>,
    #[serde(default)]
    pub control: Option<Bonus>,
    #[serde(default)]
    pub craftsmanship: Option<Bonus>,
}

/// A stat bonus. `value` is the percentage and `max` is the cap on the flat
/// amount granted. `Relative` and the HQ columns are ignored.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bonus {
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}
