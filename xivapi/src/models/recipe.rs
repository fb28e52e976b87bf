use serde::Deserialize;
use serde::Serialize;

/// A single row of the `/Recipe` sheet, restricted to [`RECIPE_COLUMNS`].
///
/// [`RECIPE_COLUMNS`]: crate::RECIPE_COLUMNS
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name_en")]
    pub name_en: Option<String>,
    #[serde(rename = "Name_de")]
    pub name_de: Option<String>,
    #[serde(rename = "Name_fr")]
    pub name_fr: Option<String>,
    #[serde(rename = "Name_ja")]
    pub name_ja: Option<String>,
    pub class_job: ClassJob,
    pub durability_factor: i64,
    pub quality_factor: i64,
    pub difficulty_factor: i64,
    #[serde(default)]
    pub required_control: i64,
    #[serde(default)]
    pub required_craftsmanship: i64,
    /// Some rows (unused or placeholder recipes) come back without a level table
    pub recipe_level_table: Option<RecipeLevelTable>,
}

/// Only `ClassJob.NameEnglish` is requested from the API
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassJob {
    pub name_english: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeLevelTable {
    #[serde(rename = "ID")]
    pub id: i64,
    pub class_job_level: i64,
    pub difficulty: i64,
    pub durability: i64,
    pub quality: i64,
    pub progress_divider: i64,
    pub progress_modifier: i64,
    pub quality_divider: i64,
    pub quality_modifier: i64,
    pub stars: i64,
    pub suggested_control: i64,
    pub suggested_craftsmanship: i64,
}
