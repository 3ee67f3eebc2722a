//! Filter specification builder
//!
//! Turns raw query parameters into a [`FilterSpecification`]. Each recognized
//! parameter contributes its predicates independently; all of them are ANDed.

use super::parser::parse_numeric_filters;
use super::types::{FilterPredicate, FilterSpecification, MatchValue, SearchField};
use crate::data::types::{ProductField, QueryParameters, present};

/// Build the filter specification for a product query
pub fn build_filter_spec(params: &QueryParameters) -> FilterSpecification {
    let mut spec = FilterSpecification::match_all();

    if let Some(featured) = present(&params.featured) {
        // Only the literal "true" selects featured products
        spec.push(FilterPredicate::Equality {
            field: ProductField::Featured,
            value: MatchValue::Bool(featured == "true"),
        });
    }

    if let Some(company) = present(&params.company) {
        spec.push(FilterPredicate::Equality {
            field: ProductField::Company,
            value: MatchValue::Text(company.to_string()),
        });
    }

    if let Some(name) = present(&params.name) {
        spec.push(FilterPredicate::Pattern {
            field: SearchField::Name,
            pattern: name.to_string(),
        });
    }

    if let Some(numeric_filters) = present(&params.numeric_filters) {
        for filter in parse_numeric_filters(numeric_filters) {
            spec.push(filter.into());
        }
    }

    tracing::trace!(predicates = spec.predicates().len(), "Built filter specification");
    spec
}
