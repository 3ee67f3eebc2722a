//! Lenient extractors for API routes

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::api::types::ApiError;

/// Query extractor that collects raw `key=value` pairs into `T`.
///
/// Repeated keys and values of any length are accepted; `T` decides which
/// value of a repeated key wins. Only an undecodable query string is rejected.
#[derive(Debug)]
pub struct QueryPairs<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryPairs<T>
where
    S: Send + Sync,
    T: FromIterator<(String, String)>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request("QUERY_PARSE_ERROR", rejection.body_text()))?;
        Ok(Self(pairs.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Vec<(String, String)> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let QueryPairs(pairs) = QueryPairs::<Vec<(String, String)>>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        pairs
    }

    #[tokio::test]
    async fn test_repeated_keys_are_kept_in_order() {
        let pairs = extract("/?page=1&page=2").await;
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("page".to_string(), "2".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_values_are_percent_decoded() {
        let pairs = extract("/?numericFilters=price%3E50%2Crating%3C%3D4&name=bar+stool").await;
        assert_eq!(pairs[0].1, "price>50,rating<=4");
        assert_eq!(pairs[1].1, "bar stool");
    }

    #[tokio::test]
    async fn test_missing_query_is_empty() {
        assert!(extract("/").await.is_empty());
    }
}
