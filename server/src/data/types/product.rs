//! Product record types
//!
//! The product schema is fixed. API field names (`createdAt`) differ from
//! column names (`created_at`); [`ProductField`] is the only place that maps
//! between the two.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::core::constants::{DEFAULT_PRODUCT_RATING, PRODUCT_COMPANIES};

/// Product serialized for API responses, holding only the projected fields
pub type Record = Map<String, Value>;

// ============================================================================
// Product fields
// ============================================================================

/// Fields of the product schema, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Price,
    Rating,
    Company,
    Featured,
    CreatedAt,
}

impl ProductField {
    pub const ALL: &'static [ProductField] = &[
        ProductField::Id,
        ProductField::Name,
        ProductField::Price,
        ProductField::Rating,
        ProductField::Company,
        ProductField::Featured,
        ProductField::CreatedAt,
    ];

    /// Resolve an API field name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "rating" => Some(Self::Rating),
            "company" => Some(Self::Company),
            "featured" => Some(Self::Featured),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Field name as exposed by the API
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Company => "company",
            Self::Featured => "featured",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Column name in the `products` table
    pub const fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            other => other.name(),
        }
    }
}

// ============================================================================
// Product rows
// ============================================================================

/// Product row from database
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub company: String,
    pub featured: bool,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}

impl ProductRow {
    /// Build a record holding only `fields`, in the order given
    pub fn project(&self, fields: &[ProductField]) -> Record {
        fields
            .iter()
            .map(|field| (field.name().to_string(), self.field_value(*field)))
            .collect()
    }

    fn field_value(&self, field: ProductField) -> Value {
        match field {
            ProductField::Id => Value::from(self.id),
            ProductField::Name => Value::from(self.name.clone()),
            ProductField::Price => Value::from(self.price),
            ProductField::Rating => Value::from(self.rating),
            ProductField::Company => Value::from(self.company.clone()),
            ProductField::Featured => Value::from(self.featured),
            ProductField::CreatedAt => DateTime::from_timestamp_millis(self.created_at)
                .map(|dt| Value::from(dt.to_rfc3339_opts(SecondsFormat::Millis, true)))
                .unwrap_or(Value::Null),
        }
    }
}

/// Product to insert (seed files use this shape)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[validate(custom(function = "validate_company"))]
    pub company: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_rating() -> f64 {
    DEFAULT_PRODUCT_RATING
}

/// Company must be one of the supported vendors
pub fn validate_company(company: &str) -> Result<(), ValidationError> {
    if PRODUCT_COMPANIES.contains(&company) {
        return Ok(());
    }
    Err(ValidationError::new("company_unsupported").with_message(
        format!(
            "{} is not supported (expected one of: {})",
            company,
            PRODUCT_COMPANIES.join(", ")
        )
        .into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ProductRow {
        ProductRow {
            id: 7,
            name: "accent chair".to_string(),
            price: 25.0,
            rating: 4.0,
            company: "marcos".to_string(),
            featured: true,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in ProductField::ALL {
            assert_eq!(ProductField::from_name(field.name()), Some(*field));
        }
        assert_eq!(ProductField::from_name("created_at"), None);
        assert_eq!(ProductField::from_name("Name"), None);
    }

    #[test]
    fn created_at_maps_to_snake_case_column() {
        assert_eq!(ProductField::CreatedAt.column(), "created_at");
        assert_eq!(ProductField::Price.column(), "price");
    }

    #[test]
    fn project_keeps_only_requested_fields() {
        let record = row().project(&[ProductField::Name, ProductField::Price]);
        assert_eq!(record.len(), 2);
        assert_eq!(record["name"], "accent chair");
        assert_eq!(record["price"], 25.0);
    }

    #[test]
    fn project_formats_created_at() {
        let record = row().project(&[ProductField::CreatedAt]);
        assert_eq!(record["createdAt"], "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn new_product_defaults() {
        let product: NewProduct =
            serde_json::from_str(r#"{"name": "sofa", "price": 99, "company": "ikea"}"#).unwrap();
        assert_eq!(product.rating, DEFAULT_PRODUCT_RATING);
        assert!(!product.featured);
        assert!(product.created_at.is_none());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn new_product_requires_price() {
        let result = serde_json::from_str::<NewProduct>(r#"{"name": "sofa", "company": "ikea"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_product_rejects_unknown_company() {
        let product: NewProduct =
            serde_json::from_str(r#"{"name": "sofa", "price": 1, "company": "acme"}"#).unwrap();
        assert!(product.validate().is_err());
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let product: NewProduct =
            serde_json::from_str(r#"{"name": "", "price": 1, "company": "ikea"}"#).unwrap();
        assert!(product.validate().is_err());
    }
}
