//! Product filter system
//!
//! Translates untrusted query parameters into typed predicates and renders
//! them as parameterized SQL.
//!
//! ## Usage
//!
//! ```
//! use catalog_server::data::filters::{SqlParams, build_filter_spec};
//! use catalog_server::data::types::QueryParameters;
//!
//! let params = QueryParameters {
//!     numeric_filters: Some("price>50,rating<=4".to_string()),
//!     ..Default::default()
//! };
//! let spec = build_filter_spec(&params);
//! let mut sql_params = SqlParams::default();
//! assert_eq!(spec.to_sql(&mut sql_params), "price > ? AND rating <= ?");
//! ```

mod builder;
mod parser;
mod types;

pub use builder::build_filter_spec;
pub use parser::{ClauseError, NumericFilter, parse_clauses, parse_numeric_filters};
pub use types::{
    FilterPredicate, FilterSpecification, MatchValue, NumberOp, NumericField, SearchField,
    SqlParams, SqlValue,
};
