use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::counts::{DateFacetCounts, FieldFacetCounts};

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Malformed response payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The part of a search response facet widgets care about.
///
/// Everything outside `facet_counts` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetResponse {
    #[serde(default)]
    pub facet_counts: Option<FacetCounts>,
}

/// Facet counts keyed by field name.
///
/// Each field is parsed on its own: an entry in a shape this crate does not
/// understand is dropped (and logged) without affecting its siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    #[serde(default, deserialize_with = "per_field")]
    pub facet_fields: BTreeMap<String, FieldFacetCounts>,
    #[serde(default, deserialize_with = "per_field")]
    pub facet_dates: BTreeMap<String, DateFacetCounts>,
}

fn per_field<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(field, value)| match serde_json::from_value(value) {
            Ok(parsed) => Some((field, parsed)),
            Err(err) => {
                log::warn!(target: "facet.result", "dropping facet data for {field:?}: {err}");
                None
            }
        })
        .collect())
}

impl FacetResponse {
    pub fn from_json(body: &str) -> Result<Self, ResponseError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, ResponseError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Wrap an already parsed section.
    pub fn with_counts(facet_counts: FacetCounts) -> Self {
        Self {
            facet_counts: Some(facet_counts),
        }
    }
}

impl FacetCounts {
    pub fn field(&self, field: &str) -> Option<&FieldFacetCounts> {
        self.facet_fields.get(field)
    }

    pub fn dates(&self, field: &str) -> Option<&DateFacetCounts> {
        self.facet_dates.get(field)
    }
}
