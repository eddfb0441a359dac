//! Selection state and query contribution for faceted-search widgets.
//!
//! `facet-core` holds the logic every facet widget shares: an ordered,
//! duplicate-free selection per field, the constraints that selection adds to
//! an outgoing query, extraction of the widget's own counts from a shared
//! search response, and click handlers that tie UI events to re-queries.
//! Network I/O and rendering stay with the caller.

pub mod response;
pub mod types;
pub mod widget;

pub use response::{FacetResponse, ResponseError};
pub use types::{FieldName, FilterQueryItem, Operator, QueryDescriptor, WidgetId};
pub use widget::{FacetBehavior, FacetWidget, FacetWidgetConfig};
