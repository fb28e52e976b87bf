//! Request body for `POST /search`, a thin wrapper over an ElasticSearch query.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub indexes: String,
    pub columns: String,
    pub body: SearchBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBody {
    pub query: Query,
    pub from: u32,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub bool: BoolQuery,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Match>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<Match>,
}

/// `{"match": {"<field>": "<value>"}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "match")]
    pub fields: BTreeMap<String, String>,
}

impl Match {
    pub fn new(field: impl ToString, value: impl ToString) -> Self {
        Self {
            fields: BTreeMap::from([(field.to_string(), value.to_string())]),
        }
    }
}

impl SearchRequest {
    /// Builds a bool query against `indexes`, returning the first `size` hits
    pub fn new(indexes: impl ToString, columns: &[&str], query: BoolQuery, size: u32) -> Self {
        Self {
            indexes: indexes.to_string(),
            columns: columns.join(","),
            body: SearchBody {
                query: Query { bool: query },
                from: 0,
                size,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResults<T> {
    pub results: Vec<T>,
}

#[cfg(test)]
mod test {
    use super::{BoolQuery, Match, SearchRequest};
    use serde_json::json;

    #[test]
    fn search_body_shape() {
        let request = SearchRequest::new(
            "item",
            &["ID", "Name"],
            BoolQuery {
                should: vec![Match::new("Bonuses.CP.Relative", "true")],
                must_not: vec![Match::new("ItemSearchCategory.Name_en", "Meal")],
            },
            100,
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "indexes": "item",
                "columns": "ID,Name",
                "body": {
                    "query": {"bool": {
                        "should": [{"match": {"Bonuses.CP.Relative": "true"}}],
                        "must_not": [{"match": {"ItemSearchCategory.Name_en": "Meal"}}]
                    }},
                    "from": 0,
                    "size": 100
                }
            })
        );
    }
}
