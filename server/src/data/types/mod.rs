//! Shared data types
//!
//! Product rows, the request-side query parameters and query results.

mod product;
mod query;

pub use product::{NewProduct, ProductField, ProductRow, Record, validate_company};
pub use query::{QueryParameters, QueryResult, present};
