//! SQLite repositories
//!
//! Types (ProductRow, NewProduct, etc.) should be imported from `crate::data::types`.

pub mod product;

pub use product::{clear_products, count_products, find_products, insert_products};
