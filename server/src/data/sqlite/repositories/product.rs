//! Product repository for SQLite operations

use sqlx::SqlitePool;
use sqlx::query::QueryAs;
use sqlx::sqlite::SqliteArguments;

use crate::data::filters::{FilterSpecification, SqlParams, SqlValue};
use crate::data::shaping::ShapingPolicy;
use crate::data::sqlite::SqliteError;
use crate::data::types::{NewProduct, ProductRow, Record};

type ProductTuple = (i64, String, f64, f64, String, bool, i64);

const PRODUCT_COLUMNS: &str = "id, name, price, rating, company, featured, created_at";

fn bind_values<'q, O>(
    mut query: QueryAs<'q, sqlx::Sqlite, O, SqliteArguments<'q>>,
    params: &SqlParams,
) -> QueryAs<'q, sqlx::Sqlite, O, SqliteArguments<'q>> {
    for value in &params.values {
        query = match value {
            SqlValue::Text(text) => query.bind(text.clone()),
            SqlValue::Real(number) => query.bind(*number),
        };
    }
    query
}

fn to_row(
    (id, name, price, rating, company, featured, created_at): ProductTuple,
) -> ProductRow {
    ProductRow {
        id,
        name,
        price,
        rating,
        company,
        featured,
        created_at,
    }
}

/// Find products matching `filter`, shaped by `policy`
pub async fn find_products(
    pool: &SqlitePool,
    filter: &FilterSpecification,
    policy: &ShapingPolicy,
) -> Result<Vec<Record>, SqliteError> {
    let mut params = SqlParams::default();
    let where_clause = filter.to_sql(&mut params);
    let sql = format!(
        "SELECT {} FROM products WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
        PRODUCT_COLUMNS,
        where_clause,
        policy.order_by_sql()
    );
    tracing::trace!(%sql, params = params.values.len(), "Finding products");

    let offset = i64::try_from(policy.offset()).unwrap_or(i64::MAX);
    let rows = bind_values(sqlx::query_as::<_, ProductTuple>(&sql), &params)
        .bind(i64::from(policy.limit))
        .bind(offset)
        .fetch_all(pool)
        .await?;

    let fields = policy.projection.fields();
    Ok(rows
        .into_iter()
        .map(|row| to_row(row).project(fields))
        .collect())
}

/// Count products matching `filter`
pub async fn count_products(
    pool: &SqlitePool,
    filter: &FilterSpecification,
) -> Result<u64, SqliteError> {
    let mut params = SqlParams::default();
    let sql = format!(
        "SELECT COUNT(*) FROM products WHERE {}",
        filter.to_sql(&mut params)
    );

    let total: (i64,) = bind_values(sqlx::query_as::<_, (i64,)>(&sql), &params)
        .fetch_one(pool)
        .await?;

    Ok(total.0 as u64)
}

/// Insert products in a single transaction
///
/// Products without `created_at` are stamped with the current time.
pub async fn insert_products(
    pool: &SqlitePool,
    products: &[NewProduct],
) -> Result<u64, SqliteError> {
    let now = chrono::Utc::now().timestamp_millis();
    let mut tx = pool.begin().await?;

    for product in products {
        let created_at = product
            .created_at
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(now);
        sqlx::query(
            "INSERT INTO products (name, name_folded, price, rating, company, featured, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(product.name.to_lowercase())
        .bind(product.price)
        .bind(product.rating)
        .bind(&product.company)
        .bind(product.featured)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::debug!(count = products.len(), "Inserted products");
    Ok(products.len() as u64)
}

/// Delete all products
pub async fn clear_products(pool: &SqlitePool) -> Result<u64, SqliteError> {
    let result = sqlx::query("DELETE FROM products").execute(pool).await?;
    Ok(result.rows_affected())
}
