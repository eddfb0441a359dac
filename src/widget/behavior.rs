use crate::response::{DateFacetCounts, FieldFacetCounts};
use crate::types::FieldName;

/// Read-only view of a widget's freshly extracted facet data.
#[derive(Debug, Clone, Copy)]
pub struct FacetView<'a> {
    pub field: &'a FieldName,
    pub fields: Option<&'a FieldFacetCounts>,
    pub dates: Option<&'a DateFacetCounts>,
    pub selected: &'a [String],
}

/// Per-widget capabilities layered on top of the shared facet logic.
///
/// Every method has a default, so a widget only overrides what it renders
/// differently.
pub trait FacetBehavior {
    /// Runs when a selection mutation leaves fewer items than it started with.
    fn after_change_selection(&mut self, _remaining: &[String]) {}

    /// Runs once per response that carried a facet counts section.
    fn handle_facets(&mut self, _facets: FacetView<'_>) {}

    /// Display text for the "select this value" action.
    fn click_text(&self, value: &str) -> String {
        value.to_string()
    }

    /// Display text for the "deselect this value" action.
    fn unclick_text(&self, value: &str) -> String {
        value.to_string()
    }
}

/// Behavior with every hook left at its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFacet;

impl FacetBehavior for PlainFacet {}

/// Discrete facet whose action texts carry a verb, e.g. `"+ red"` / `"- red"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledFacet {
    pub select_prefix: String,
    pub deselect_prefix: String,
}

impl Default for LabeledFacet {
    fn default() -> Self {
        Self {
            select_prefix: "+".into(),
            deselect_prefix: "-".into(),
        }
    }
}

impl FacetBehavior for LabeledFacet {
    fn click_text(&self, value: &str) -> String {
        format!("{} {value}", self.select_prefix)
    }

    fn unclick_text(&self, value: &str) -> String {
        format!("{} {value}", self.deselect_prefix)
    }
}
