//! Data storage layer
//!
//! - `sqlite` - Product store (SQLite via sqlx)
//! - `filters` - Numeric filter grammar and filter specification builder
//! - `shaping` - Sort, projection and pagination policy
//! - `types` - Product and query types shared across layers
//! - `traits` - Repository trait implemented by the store
//! - `error` - Unified error type for the data layer

pub mod error;
pub mod filters;
pub mod shaping;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use shaping::ShapingPolicy;
pub use sqlite::SqliteService;
pub use traits::CatalogRepository;
