use serde::Serialize;

/// Localized names keyed by the two letter language code the solver expects.
/// A language missing upstream is left out of the object entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocaleNames {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
}

impl From<&xivapi::models::recipe::Recipe> for LocaleNames {
    fn from(recipe: &xivapi::models::recipe::Recipe) -> Self {
        Self {
            en: recipe.name_en.clone(),
            de: recipe.name_de.clone(),
            fr: recipe.name_fr.clone(),
            ja: recipe.name_ja.clone(),
        }
    }
}

impl From<&xivapi::models::item::Item> for LocaleNames {
    fn from(item: &xivapi::models::item::Item) -> Self {
        Self {
            en: item.name_en.clone(),
            de: item.name_de.clone(),
            fr: item.name_fr.clone(),
            ja: item.name_ja.clone(),
        }
    }
}
