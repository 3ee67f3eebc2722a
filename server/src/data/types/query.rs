//! Product query inputs and results

use super::product::Record;

/// Raw product query parameters as received from the client.
///
/// Every value is an untrusted string. An empty value counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    pub featured: Option<String>,
    pub company: Option<String>,
    pub name: Option<String>,
    pub sort: Option<String>,
    pub fields: Option<String>,
    pub numeric_filters: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl QueryParameters {
    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "featured" => Some(&mut self.featured),
            "company" => Some(&mut self.company),
            "name" => Some(&mut self.name),
            "sort" => Some(&mut self.sort),
            "fields" => Some(&mut self.fields),
            "numericFilters" => Some(&mut self.numeric_filters),
            "page" => Some(&mut self.page),
            "limit" => Some(&mut self.limit),
            _ => None,
        }
    }
}

/// Build from query-string pairs. Unknown keys are ignored and the first
/// value of a repeated key wins.
impl FromIterator<(String, String)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let Some(slot) = params.slot(&key) else {
                continue;
            };
            if slot.is_some() {
                tracing::debug!(%key, "Ignoring repeated query parameter");
            } else {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Returns the value when the parameter is present and non-empty
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Records of one page plus the number of records matching the filter
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub records: Vec<Record>,
    /// Matches for the filter alone, ignoring the page window
    pub total_matched: u64,
}
