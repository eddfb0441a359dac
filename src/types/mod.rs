pub mod identifiers;
pub mod query;

pub use identifiers::{FieldName, WidgetId};
pub use query::{FilterQueryItem, Operator, QueryDescriptor};
