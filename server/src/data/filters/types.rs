//! Filter type definitions
//!
//! Typed predicates over product fields and their SQL rendering. Field names
//! only ever come from [`ProductField`], so user input reaches SQL as bound
//! parameters and nothing else.

use std::fmt;

use crate::data::types::ProductField;
use crate::utils::sql::contains_pattern;

/// Fields that accept numeric comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Price,
    Rating,
}

impl NumericField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "price" => Some(Self::Price),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    pub const fn field(&self) -> ProductField {
        match self {
            Self::Price => ProductField::Price,
            Self::Rating => ProductField::Rating,
        }
    }
}

/// Fields searchable by case-insensitive substring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
}

impl SearchField {
    pub const fn field(&self) -> ProductField {
        match self {
            Self::Name => ProductField::Name,
        }
    }

    /// Column holding the Unicode-lowercased value
    pub const fn folded_column(&self) -> &'static str {
        match self {
            Self::Name => "name_folded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberOp {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl NumberOp {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

impl fmt::Display for NumberOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Value of an equality match
#[derive(Debug, Clone, PartialEq)]
pub enum MatchValue {
    Bool(bool),
    Text(String),
}

/// A single filter condition on one field
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate {
    Equality {
        field: ProductField,
        value: MatchValue,
    },
    /// Case-insensitive substring match; the pattern is literal text, not a wildcard expression
    Pattern { field: SearchField, pattern: String },
    Numeric {
        field: NumericField,
        operator: NumberOp,
        value: f64,
    },
}

/// Bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Real(f64),
}

/// Collects SQL parameters during query building (maintains insertion order)
#[derive(Debug, Default)]
pub struct SqlParams {
    pub values: Vec<SqlValue>,
}

impl FilterPredicate {
    pub fn field(&self) -> ProductField {
        match self {
            Self::Equality { field, .. } => *field,
            Self::Pattern { field, .. } => field.field(),
            Self::Numeric { field, .. } => field.field(),
        }
    }

    /// Generate SQL WHERE clause fragment
    /// Returns the SQL clause with ? placeholders and updates params
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        let col = self.field().column();
        match self {
            Self::Equality { value, .. } => match value {
                MatchValue::Bool(b) => {
                    let sql_bool = if *b { "TRUE" } else { "FALSE" };
                    format!("{} = {}", col, sql_bool)
                }
                MatchValue::Text(text) => {
                    params.values.push(SqlValue::Text(text.clone()));
                    format!("{} = ?", col)
                }
            },
            Self::Pattern { field, pattern } => {
                params.values.push(SqlValue::Text(contains_pattern(pattern)));
                format!("{} LIKE ? ESCAPE '\\'", field.folded_column())
            }
            Self::Numeric {
                operator, value, ..
            } => {
                params.values.push(SqlValue::Real(*value));
                format!("{} {} ?", col, operator.symbol())
            }
        }
    }
}

/// Conjunction of all predicates for one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpecification {
    predicates: Vec<FilterPredicate>,
}

impl FilterSpecification {
    /// Specification that matches every record
    pub fn match_all() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, predicate: FilterPredicate) {
        self.predicates.push(predicate);
    }

    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Generate the full WHERE expression (without the `WHERE` keyword)
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        if self.predicates.is_empty() {
            return "1=1".to_string();
        }
        self.predicates
            .iter()
            .map(|p| p.to_sql(params))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}
