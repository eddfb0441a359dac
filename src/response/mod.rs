pub mod counts;
pub mod payload;

pub use counts::{DateFacetCounts, FieldFacetCounts, FlatEntry};
pub use payload::{FacetCounts, FacetResponse, ResponseError};
