//! Query shaping policy
//!
//! Sort order, field projection and pagination applied after filtering.
//! Bad input never fails a request: unknown fields are ignored and invalid
//! page numbers fall back to their defaults.

use crate::core::constants::{DEFAULT_LIMIT, DEFAULT_PAGE, FEATURED_LIMIT};
use crate::data::types::{ProductField, QueryParameters, present};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One sort key; keys apply left to right as tie-breakers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: ProductField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn asc(field: ProductField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn to_sql(&self) -> String {
        let dir = match self.direction {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        };
        format!("{} {}", self.field.column(), dir)
    }
}

/// Fields to include in each returned record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    All,
    /// Non-empty, in schema order
    Fields(Vec<ProductField>),
}

impl Projection {
    pub fn fields(&self) -> &[ProductField] {
        match self {
            Self::All => ProductField::ALL,
            Self::Fields(fields) => fields.as_slice(),
        }
    }
}

/// Sort, projection and pagination for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapingPolicy {
    pub sort: Vec<SortKey>,
    pub projection: Projection,
    /// 1-based
    pub page: u32,
    pub limit: u32,
}

impl Default for ShapingPolicy {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            projection: Projection::All,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ShapingPolicy {
    /// Build the policy from the `sort`, `fields`, `page` and `limit` parameters
    pub fn from_params(params: &QueryParameters) -> Self {
        Self {
            sort: present(&params.sort)
                .map(parse_sort)
                .unwrap_or_else(default_sort),
            projection: present(&params.fields)
                .map(parse_projection)
                .unwrap_or(Projection::All),
            page: parse_or_default(present(&params.page), DEFAULT_PAGE),
            limit: parse_or_default(present(&params.limit), DEFAULT_LIMIT),
        }
    }

    /// Fixed policy of the static featured listing: name and price of the first few products
    pub fn featured() -> Self {
        Self {
            projection: Projection::Fields(vec![ProductField::Name, ProductField::Price]),
            limit: FEATURED_LIMIT,
            ..Self::default()
        }
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// ORDER BY expression (without the keywords).
    ///
    /// The record id is appended as a final tie-breaker so that ordering is
    /// total and repeated queries page identically.
    pub fn order_by_sql(&self) -> String {
        let mut keys: Vec<String> = self.sort.iter().map(SortKey::to_sql).collect();
        if !self.sort.iter().any(|k| k.field == ProductField::Id) {
            keys.push(SortKey::asc(ProductField::Id).to_sql());
        }
        keys.join(", ")
    }
}

fn default_sort() -> Vec<SortKey> {
    vec![SortKey::asc(ProductField::CreatedAt)]
}

/// Parse `name,-price` style sort lists. `-` selects descending order.
///
/// Unknown and repeated fields are skipped; an empty result falls back to
/// the default sort.
pub fn parse_sort(input: &str) -> Vec<SortKey> {
    let mut keys: Vec<SortKey> = Vec::new();
    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, direction) = match raw.strip_prefix('-') {
            Some(name) => (name, SortDirection::Desc),
            None => (raw, SortDirection::Asc),
        };
        let Some(field) = ProductField::from_name(name) else {
            tracing::debug!(field = %name, "Ignoring unknown sort field");
            continue;
        };
        if keys.iter().any(|k| k.field == field) {
            continue;
        }
        keys.push(SortKey { field, direction });
    }

    if keys.is_empty() {
        default_sort()
    } else {
        keys
    }
}

/// Parse a comma-separated projection list.
///
/// Unknown fields are skipped; when nothing valid remains every field is
/// projected.
pub fn parse_projection(input: &str) -> Projection {
    let requested: Vec<ProductField> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|name| {
            let field = ProductField::from_name(name);
            if field.is_none() {
                tracing::debug!(field = %name, "Ignoring unknown projection field");
            }
            field
        })
        .collect();

    if requested.is_empty() {
        return Projection::All;
    }
    Projection::Fields(
        ProductField::ALL
            .iter()
            .copied()
            .filter(|f| requested.contains(f))
            .collect(),
    )
}

/// Parse a positive integer, substituting `default` for anything else
pub fn parse_or_default(value: Option<&str>, default: u32) -> u32 {
    let Some(raw) = value else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::debug!(value = %raw, default, "Invalid pagination value, using default");
            default
        }
    }
}
