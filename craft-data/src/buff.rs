use serde::Serialize;
use tracing::info;
use xivapi::models::item::{Bonus, Item};
use xivapi::search::{BoolQuery, Match, SearchRequest};
use xivapi::XivApiClient;

use crate::locale::LocaleNames;
use crate::Error;

const BUFF_COLUMNS: &[&str] = &[
    "ID", "Name", "Bonuses", "Name_en", "Name_de", "Name_fr", "Name_ja",
];

const BUFF_SEARCH_SIZE: u32 = 100;

/// A food or medicine as the crafting solver reads it. Bonuses the item
/// doesn't grant are left out instead of written as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedBuff {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub craft_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub craft_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_value: Option<i64>,
    pub hq: bool,
    pub name: LocaleNames,
}

fn percent(bonus: Option<&Bonus>) -> Option<i64> {
    bonus.and_then(|bonus| bonus.value)
}

fn cap(bonus: Option<&Bonus>) -> Option<i64> {
    bonus.and_then(|bonus| bonus.max)
}

impl NormalizedBuff {
    /// Every item is emitted twice, NQ first then HQ. Both carry the same values.
    pub fn variants(item: &Item) -> [NormalizedBuff; 2] {
        let bonuses = item.bonuses.as_ref();
        let cp = bonuses.and_then(|b| b.cp.as_ref());
        let craftsmanship = bonuses.and_then(|b| b.craftsmanship.as_ref());
        let control = bonuses.and_then(|b| b.control.as_ref());
        let nq = NormalizedBuff {
            id: item.id,
            cp_percent: percent(cp),
            cp_value: cap(cp),
            craft_percent: percent(craftsmanship),
            craft_value: cap(craftsmanship),
            control_percent: percent(control),
            control_value: cap(control),
            hq: false,
            name: LocaleNames::from(item),
        };
        let hq = NormalizedBuff {
            hq: true,
            ..nq.clone()
        };
        [nq, hq]
    }
}

/// Items with any relative crafting bonus, minus the ones whose search
/// category is named `buff_type`.
pub fn buff_search(buff_type: &str) -> SearchRequest {
    SearchRequest::new(
        "item",
        BUFF_COLUMNS,
        BoolQuery {
            should: vec![
                Match::new("Bonuses.CP.Relative", "true"),
                Match::new("Bonuses.Control.Relative", "true"),
                Match::new("Bonuses.Craftsmanship.Relative", "true"),
            ],
            must_not: vec![Match::new("ItemSearchCategory.Name_en", buff_type)],
        },
        BUFF_SEARCH_SIZE,
    )
}

pub async fn extract_buffs(
    client: &XivApiClient,
    buff_type: &str,
) -> Result<Vec<NormalizedBuff>, Error> {
    let items = client.search::<Item>(&buff_search(buff_type)).await?.results;
    info!("{buff_type}: {} items found", items.len());
    Ok(items.iter().flat_map(NormalizedBuff::variants).collect())
}

pub fn sort_buffs(buffs: &mut [NormalizedBuff]) {
    buffs.sort_by_key(|buff| (buff.id, buff.hq));
}
