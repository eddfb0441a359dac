use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One element of a flat `["value", count, "value", count]` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlatEntry {
    Value(String),
    Count(u64),
}

/// Discrete value counts for a single field.
///
/// Accepts every list shape a Solr-style backend emits for field facets,
/// depending on its named-list setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldFacetCounts {
    /// `[["red", 3], ["blue", 1]]`
    Pairs(Vec<(String, u64)>),
    /// `["red", 3, "blue", 1]`
    Flat(Vec<FlatEntry>),
    /// `[{"red": 3}, {"blue": 1}]`
    MapList(Vec<BTreeMap<String, u64>>),
    /// `{"red": 3, "blue": 1}`. Iterates in key order, not response order.
    Map(BTreeMap<String, u64>),
}

impl FieldFacetCounts {
    /// Ordered `(value, count)` pairs.
    ///
    /// In the flat shape, an entry that does not form a `value, count` pair is
    /// skipped along with its partner.
    pub fn counts(&self) -> Vec<(String, u64)> {
        match self {
            FieldFacetCounts::Pairs(pairs) => pairs.clone(),
            FieldFacetCounts::Flat(entries) => entries
                .chunks_exact(2)
                .filter_map(|pair| match pair {
                    [FlatEntry::Value(value), FlatEntry::Count(count)] => {
                        Some((value.clone(), *count))
                    }
                    _ => None,
                })
                .collect(),
            FieldFacetCounts::MapList(maps) => maps
                .iter()
                .flat_map(|map| map.iter().map(|(k, v)| (k.clone(), *v)))
                .collect(),
            FieldFacetCounts::Map(map) => map.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FieldFacetCounts::Pairs(pairs) => pairs.len(),
            FieldFacetCounts::Flat(_) => self.counts().len(),
            FieldFacetCounts::MapList(maps) => maps.iter().map(BTreeMap::len).sum(),
            FieldFacetCounts::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count reported for `value`, if the backend returned it.
    pub fn count_of(&self, value: &str) -> Option<u64> {
        match self {
            FieldFacetCounts::Map(map) => map.get(value).copied(),
            _ => self
                .counts()
                .into_iter()
                .find(|(v, _)| v == value)
                .map(|(_, count)| count),
        }
    }
}

/// Date bucket counts for a single field, plus the range metadata the
/// backend reports next to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFacetCounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub between: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardend: Option<bool>,
    /// Raw bucket key to count.
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

impl DateFacetCounts {
    /// Buckets whose keys parse as RFC 3339 timestamps, oldest first.
    pub fn buckets(&self) -> Vec<(DateTime<Utc>, u64)> {
        let mut buckets: Vec<(DateTime<Utc>, u64)> = self
            .counts
            .iter()
            .filter_map(|(key, count)| {
                match DateTime::parse_from_rfc3339(key) {
                    Ok(at) => Some((at.with_timezone(&Utc), *count)),
                    Err(err) => {
                        log::debug!(target: "facet.result", "skipping date bucket {key:?}: {err}");
                        None
                    }
                }
            })
            .collect();

        buckets.sort_by_key(|(at, _)| *at);
        buckets
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn flat_list_pairs_up_values_and_counts() {
        let counts: FieldFacetCounts =
            serde_json::from_str(r#"["red", 3, "blue", 1]"#).unwrap();

        assert!(matches!(counts, FieldFacetCounts::Flat(_)));
        assert_eq!(
            counts.counts(),
            vec![("red".to_string(), 3), ("blue".to_string(), 1)]
        );
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn flat_list_drops_unpaired_tail() {
        let counts: FieldFacetCounts = serde_json::from_str(r#"["red", 3, "blue"]"#).unwrap();
        assert_eq!(counts.counts(), vec![("red".to_string(), 3)]);
    }

    #[test]
    fn pair_list_keeps_response_order() {
        let counts: FieldFacetCounts =
            serde_json::from_str(r#"[["zeta", 9], ["alpha", 2]]"#).unwrap();

        assert!(matches!(counts, FieldFacetCounts::Pairs(_)));
        assert_eq!(counts.count_of("alpha"), Some(2));
        assert_eq!(counts.counts()[0].0, "zeta");
    }

    #[test]
    fn map_list_keeps_response_order() {
        let counts: FieldFacetCounts =
            serde_json::from_str(r#"[{"zeta": 9}, {"alpha": 2}]"#).unwrap();

        assert!(matches!(counts, FieldFacetCounts::MapList(_)));
        assert_eq!(
            counts.counts(),
            vec![("zeta".to_string(), 9), ("alpha".to_string(), 2)]
        );
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn hardend_flag_is_not_a_bucket() {
        let dates: DateFacetCounts = serde_json::from_str(
            r#"{"2020-01-01T00:00:00Z": 1, "gap": "+1YEAR", "hardend": false}"#,
        )
        .unwrap();

        assert_eq!(dates.hardend, Some(false));
        assert_eq!(dates.counts.len(), 1);
    }

    #[test]
    fn map_shape_is_accepted() {
        let counts: FieldFacetCounts = serde_json::from_str(r#"{"red": 3}"#).unwrap();
        assert_eq!(counts.count_of("red"), Some(3));
        assert_eq!(counts.count_of("green"), None);
    }

    #[test]
    fn date_buckets_are_parsed_and_metadata_split_out() {
        let dates: DateFacetCounts = serde_json::from_str(
            r#"{
                "2021-01-01T00:00:00Z": 4,
                "2020-01-01T00:00:00Z": 7,
                "gap": "+1YEAR",
                "start": "2020-01-01T00:00:00Z",
                "end": "2022-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(dates.gap.as_deref(), Some("+1YEAR"));
        assert_eq!(dates.counts.len(), 2);

        let buckets = dates.buckets();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].0, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(buckets[0].1, 7);
    }

    #[test]
    fn malformed_date_keys_are_skipped() {
        let mut dates = DateFacetCounts::default();
        dates.counts.insert("not-a-date".into(), 1);
        dates.counts.insert("2020-06-01T00:00:00Z".into(), 2);

        assert_eq!(dates.buckets().len(), 1);
    }
}
