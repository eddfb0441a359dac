pub mod behavior;
pub mod bridge;
pub mod config;
pub mod selection;

use crate::response::{DateFacetCounts, FacetResponse, FieldFacetCounts};
use crate::types::{FieldName, FilterQueryItem, Operator, QueryDescriptor, WidgetId};
pub use behavior::{FacetBehavior, FacetView, LabeledFacet, PlainFacet};
pub use bridge::{
	click_handler, unclick_handler, Coordinator, DefaultAction, SharedWidget, IMMEDIATE,
};
pub use config::{ConfigError, FacetWidgetConfig};
pub use selection::SelectionStore;

/// Selection state and query contribution for one faceted field.
#[derive(Debug)]
pub struct FacetWidget<B = PlainFacet> {
	id: WidgetId,
	config: FacetWidgetConfig,
	selection: SelectionStore,
	facet_fields: Option<FieldFacetCounts>,
	facet_dates: Option<DateFacetCounts>,
	behavior: B,
}

impl FacetWidget<PlainFacet> {
	pub fn new(id: impl Into<WidgetId>, config: FacetWidgetConfig) -> Self {
		Self::with_behavior(id, config, PlainFacet)
	}
}

impl<B> FacetWidget<B>
where
	B: FacetBehavior,
{
	pub fn with_behavior(id: impl Into<WidgetId>, config: FacetWidgetConfig, behavior: B) -> Self {
		Self {
			id: id.into(),
			config,
			selection: SelectionStore::new(),
			facet_fields: None,
			facet_dates: None,
			behavior,
		}
	}

	pub fn id(&self) -> &WidgetId {
		&self.id
	}

	pub fn field_name(&self) -> &FieldName {
		&self.config.field_name
	}

	pub fn limit(&self) -> Option<usize> {
		self.config.limit
	}

	pub fn operator(&self) -> Operator {
		self.config.operator
	}

	pub fn is_hidden(&self) -> bool {
		self.config.hidden
	}

	pub fn replaces(&self) -> bool {
		self.config.replace
	}

	pub fn config(&self) -> &FacetWidgetConfig {
		&self.config
	}

	pub fn selected_items(&self) -> &[String] {
		self.selection.values()
	}

	pub fn is_selected(&self, value: &str) -> bool {
		self.selection.contains(value)
	}

	pub fn behavior(&self) -> &B {
		&self.behavior
	}

	pub fn behavior_mut(&mut self) -> &mut B {
		&mut self.behavior
	}

	/// Discrete counts from the last response that carried a facet section.
	pub fn facet_fields(&self) -> Option<&FieldFacetCounts> {
		self.facet_fields.as_ref()
	}

	/// Date bucket counts from the last response that carried a facet section.
	pub fn facet_dates(&self) -> Option<&DateFacetCounts> {
		self.facet_dates.as_ref()
	}

	/// Discrete counts truncated to the configured limit.
	pub fn visible_counts(&self) -> Vec<(String, u64)> {
		let mut counts = self
			.facet_fields
			.as_ref()
			.map(FieldFacetCounts::counts)
			.unwrap_or_default();
		if let Some(limit) = self.config.limit {
			counts.truncate(limit);
		}
		counts
	}

	/// Add `items` to the selection.
	///
	/// In replace mode the selection is cleared first. Returns whether the
	/// implicit clear removed anything or at least one item was appended.
	pub fn select_items<I>(&mut self, items: I) -> bool
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		let cleared = self.config.replace && self.clear();

		let mut appended = false;
		self.change_selection(|store| {
			for item in items {
				appended |= store.insert(item.into());
			}
		});

		let changed = cleared || appended;
		log::trace!(
			target: "facet.selection",
			"{}: select -> {:?} (changed: {changed})",
			self.id,
			self.selection.values()
		);
		changed
	}

	/// Remove `items` from the selection. Returns whether anything was removed.
	pub fn deselect_items<I>(&mut self, items: I) -> bool
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let changed = self.change_selection(|store| {
			for item in items {
				store.remove(item.as_ref());
			}
		});

		log::trace!(
			target: "facet.selection",
			"{}: deselect -> {:?} (changed: {changed})",
			self.id,
			self.selection.values()
		);
		changed
	}

	/// Empty the selection. Returns whether it held anything.
	pub fn clear(&mut self) -> bool {
		self.change_selection(SelectionStore::remove_all)
	}

	// The hook only ever sees shrinkage; see `SelectionStore::change`.
	fn change_selection<F>(&mut self, body: F) -> bool
	where
		F: FnOnce(&mut SelectionStore),
	{
		let behavior = &mut self.behavior;
		self.selection
			.change(body, |remaining| behavior.after_change_selection(remaining))
	}

	/// The selection as constraint items, in selection order.
	pub fn filter_items(&self) -> Vec<FilterQueryItem> {
		self.selection
			.values()
			.iter()
			.map(|value| FilterQueryItem {
				field: self.config.field_name.clone(),
				value: value.clone(),
				hidden: self.config.hidden,
				widget_id: self.id.clone(),
			})
			.collect()
	}

	/// Request this field for faceting and append one constraint per
	/// selected value.
	pub fn alter_query(&self, query: &mut QueryDescriptor) {
		query.fields.push(self.config.field_name.as_str().to_string());
		query.fq.extend(self.filter_items());

		log::debug!(
			target: "facet.query",
			"{}: contributed field {} with {} constraint(s)",
			self.id,
			self.config.field_name,
			self.selection.len()
		);
	}

	/// Pick this widget's facet data out of a shared response.
	///
	/// A response without a facet section leaves the previous data in place
	/// and does not reach the behavior hook.
	pub fn handle_result(&mut self, response: &FacetResponse) {
		let Some(counts) = response.facet_counts.as_ref() else {
			log::trace!(target: "facet.result", "{}: no facet counts in response", self.id);
			return;
		};

		let field = self.config.field_name.as_str();
		self.facet_fields = counts.field(field).cloned();
		self.facet_dates = counts.dates(field).cloned();

		log::debug!(
			target: "facet.result",
			"{}: {} value(s), {} date bucket(s) for {}",
			self.id,
			self.facet_fields.as_ref().map_or(0, FieldFacetCounts::len),
			self.facet_dates.as_ref().map_or(0, |dates| dates.counts.len()),
			field
		);

		let view = FacetView {
			field: &self.config.field_name,
			fields: self.facet_fields.as_ref(),
			dates: self.facet_dates.as_ref(),
			selected: self.selection.values(),
		};
		self.behavior.handle_facets(view);
	}

	pub fn click_text(&self, value: &str) -> String {
		self.behavior.click_text(value)
	}

	pub fn unclick_text(&self, value: &str) -> String {
		self.behavior.unclick_text(value)
	}
}
