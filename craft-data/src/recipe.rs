use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use xivapi::models::recipe::Recipe;

use crate::locale::LocaleNames;

/// A recipe in the shape the crafting solver reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecipe {
    pub id: i64,
    pub name: LocaleNames,
    pub base_level: i64,
    /// recipe level table id, not the class job level
    pub level: i64,
    pub difficulty: i64,
    pub durability: i64,
    pub max_quality: i64,
    pub suggested_craftsmanship: i64,
    pub suggested_control: i64,
    pub progress_divider: i64,
    pub progress_modifier: i64,
    pub quality_divider: i64,
    pub quality_modifier: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<i64>,
}

/// `floor(base * factor / 100)`. Factors are percentages of the level table value.
pub fn scaled_stat(base: i64, factor: i64) -> i64 {
    (base * factor).div_euclid(100)
}

impl NormalizedRecipe {
    /// Returns `None` for recipes without a level table, these can't be crafted
    pub fn from_recipe(recipe: &Recipe) -> Option<Self> {
        let table = recipe.recipe_level_table.as_ref()?;
        Some(Self {
            id: recipe.id,
            name: LocaleNames::from(recipe),
            base_level: table.class_job_level,
            level: table.id,
            difficulty: scaled_stat(table.difficulty, recipe.difficulty_factor),
            durability: scaled_stat(table.durability, recipe.durability_factor),
            max_quality: scaled_stat(table.quality, recipe.quality_factor),
            suggested_craftsmanship: table.suggested_craftsmanship,
            suggested_control: table.suggested_control,
            progress_divider: table.progress_divider,
            progress_modifier: table.progress_modifier,
            quality_divider: table.quality_divider,
            quality_modifier: table.quality_modifier,
            stars: (table.stars != 0).then_some(table.stars),
        })
    }
}

/// Turns the raw rows of a recipe page into `(class job, recipe)` pairs.
/// Rows that don't parse or have no level table are dropped.
pub fn normalize_rows(rows: Vec<Value>) -> Vec<(String, NormalizedRecipe)> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<Recipe>(row) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                debug!("skipping unreadable recipe row {e}");
                None
            }
        })
        .filter_map(|recipe| {
            NormalizedRecipe::from_recipe(&recipe)
                .map(|normalized| (recipe.class_job.name_english, normalized))
        })
        .collect()
}

/// Recipes grouped by class job name
#[derive(Debug, Default)]
pub struct RecipeBook {
    categories: BTreeMap<String, Vec<NormalizedRecipe>>,
}

impl RecipeBook {
    pub fn extend(&mut self, recipes: impl IntoIterator<Item = (String, NormalizedRecipe)>) {
        for (class_job, recipe) in recipes {
            self.categories.entry(class_job).or_default().push(recipe);
        }
    }

    pub fn class_jobs(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Total number of recipes across all class jobs
    pub fn recipe_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Consumes the book, yielding each class job with its recipes sorted by id
    pub fn into_sorted(self) -> impl Iterator<Item = (String, Vec<NormalizedRecipe>)> {
        self.categories.into_iter().map(|(class_job, mut recipes)| {
            recipes.sort_by_key(|recipe| recipe.id);
            (class_job, recipes)
        })
    }
}
