//! Client-name search.
//!
//! # Responsibility
//! - Match cases whose client name contains a query, ignoring case.
//!
//! # Invariants
//! - Matching is a plain substring test after lowercasing both sides.
//! - Result order follows input order; no ranking is applied.
//! - An empty query matches every case.

use crate::model::legal_case::LegalCase;

/// Lowercased client-name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientQuery {
    needle: String,
}

impl ClientQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn matches(&self, client_name: &str) -> bool {
        client_name.to_lowercase().contains(self.needle.as_str())
    }
}

/// Returns every case whose client name contains `text`, case-insensitively.
pub fn search_by_client<'a, I>(cases: I, text: &str) -> Vec<&'a LegalCase>
where
    I: IntoIterator<Item = &'a LegalCase>,
{
    let query = ClientQuery::new(text);
    cases
        .into_iter()
        .filter(|case| query.matches(&case.client_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ClientQuery;

    #[test]
    fn query_ignores_case_on_both_sides() {
        let query = ClientQuery::new("JoHn");
        assert!(query.matches("john doe"));
        assert!(query.matches("Elton JOHN"));
        assert!(!query.matches("Jane Smith"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(ClientQuery::new("").matches("Acme Corp"));
    }
}
