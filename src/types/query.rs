use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::identifiers::{FieldName, WidgetId};

/// How multiple selected values of one field combine in the query.
///
/// Carried on the widget for the constraint serializer; widgets never
/// interpret it themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    #[default]
    And,
    Or,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

/// A single "field must equal value" constraint contributed by a widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterQueryItem {
    pub field: FieldName,
    pub value: String,
    /// Excluded from public "current filters" listings.
    pub hidden: bool,
    pub widget_id: WidgetId,
}

/// The outgoing query every registered widget appends to before a request.
///
/// Widgets only ever push onto `fields` and `fq`; existing entries are never
/// removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Fields requested for faceting.
    pub fields: Vec<String>,
    /// Filter constraints.
    pub fq: Vec<FilterQueryItem>,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content digest of the descriptor, `sha256:<hex>`.
    ///
    /// Two descriptors with the same fields and constraints in the same order
    /// share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        for field in &self.fields {
            hasher.update(b"field");
            update_str(&mut hasher, field);
        }

        for item in &self.fq {
            hasher.update(b"fq");
            update_str(&mut hasher, item.field.as_str());
            update_str(&mut hasher, &item.value);
            hasher.update([u8::from(item.hidden)]);
            update_str(&mut hasher, item.widget_id.as_str());
        }

        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}

// Length prefix keeps ("ab", "c") and ("a", "bc") apart.
fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(field: &str, value: &str) -> FilterQueryItem {
        FilterQueryItem {
            field: FieldName::new(field),
            value: value.to_string(),
            hidden: false,
            widget_id: WidgetId::new("w"),
        }
    }

    #[test]
    fn fingerprint_is_stable_and_prefixed() {
        let mut q = QueryDescriptor::new();
        q.fields.push("color".into());
        q.fq.push(item("color", "red"));

        let a = q.fingerprint();
        let b = q.clone().fingerprint();

        assert_eq!(a, b);
        assert!(a.starts_with("sha256:"));
        assert_eq!(a.len(), "sha256:".len() + 64);
    }

    #[test]
    fn fingerprint_separates_adjacent_strings() {
        let mut left = QueryDescriptor::new();
        left.fq.push(item("ab", "c"));

        let mut right = QueryDescriptor::new();
        right.fq.push(item("a", "bc"));

        assert_ne!(left.fingerprint(), right.fingerprint());
    }

    #[test]
    fn fingerprint_depends_on_hidden_flag() {
        let mut visible = QueryDescriptor::new();
        visible.fq.push(item("color", "red"));

        let mut hidden = visible.clone();
        hidden.fq[0].hidden = true;

        assert_ne!(visible.fingerprint(), hidden.fingerprint());
    }

    #[test]
    fn operator_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Operator::Or).unwrap(), "\"OR\"");
        assert_eq!(Operator::default(), Operator::And);
        assert_eq!(Operator::And.as_str(), "AND");
    }
}
