// clarity-core/src/domain/filter.rs
//
// Client-side search & filter combinators shared by every page.
// A filter is `matches_text(fields, query) && every facet selector`,
// re-evaluated over the whole in-memory array on each call.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Dropdown value. `"all"` is the sentinel meaning "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Selector {
    #[default]
    All,
    Value(String),
}

impl Selector {
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn value(v: impl Into<String>) -> Self {
        Self::from(v.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Exact equality against the field, `All` accepts anything.
    pub fn matches_equals(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Value(v) => field == v,
        }
    }

    /// Case-insensitive containment (e.g. "postgres" matches "PostgreSQL").
    pub fn matches_contains(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Value(v) => field.to_lowercase().contains(&v.to_lowercase()),
        }
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        if s == Self::ALL_SENTINEL {
            Self::All
        } else {
            Self::Value(s)
        }
    }
}

impl From<Selector> for String {
    fn from(s: Selector) -> Self {
        s.to_string()
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", Self::ALL_SENTINEL),
            Self::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Case-insensitive substring match of `query` against any of `fields`.
/// An empty query matches everything.
pub fn matches_text(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Records that can be searched and faceted by a page.
pub trait Searchable {
    /// Fields the free-text query is matched against.
    fn text_fields(&self) -> Vec<&str>;

    /// Value of a dropdown-filterable field, `None` if the record has no such facet.
    fn facet(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetMatch {
    Equals,
    Contains,
}

#[derive(Debug, Clone)]
struct FacetFilter {
    name: &'static str,
    selector: Selector,
    mode: FacetMatch,
}

/// A per-page predicate: text query AND every facet.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    query: String,
    facets: Vec<FacetFilter>,
}

impl Filter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            facets: Vec::new(),
        }
    }

    pub fn equals(mut self, name: &'static str, selector: Selector) -> Self {
        self.facets.push(FacetFilter {
            name,
            selector,
            mode: FacetMatch::Equals,
        });
        self
    }

    pub fn contains(mut self, name: &'static str, selector: Selector) -> Self {
        self.facets.push(FacetFilter {
            name,
            selector,
            mode: FacetMatch::Contains,
        });
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if !matches_text(&item.text_fields(), &self.query) {
            return false;
        }
        self.facets.iter().all(|facet| {
            if facet.selector.is_all() {
                return true;
            }
            match item.facet(facet.name) {
                Some(value) => match facet.mode {
                    FacetMatch::Equals => facet.selector.matches_equals(value),
                    FacetMatch::Contains => facet.selector.matches_contains(value),
                },
                None => false,
            }
        })
    }

    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        note: &'static str,
        status: &'static str,
        kind: &'static str,
    }

    impl Searchable for Row {
        fn text_fields(&self) -> Vec<&str> {
            vec![self.name, self.note]
        }

        fn facet(&self, name: &str) -> Option<&str> {
            match name {
                "status" => Some(self.status),
                "kind" => Some(self.kind),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha", note: "first", status: "active", kind: "PostgreSQL" },
            Row { name: "Beta", note: "Second ALPHA", status: "paused", kind: "MySQL" },
            Row { name: "Gamma", note: "third", status: "active", kind: "MongoDB" },
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_text(&["anything"], ""));
        assert!(matches_text(&[], ""));
    }

    #[test]
    fn test_text_match_is_case_insensitive_over_any_field() {
        let rows = rows();
        let hits = Filter::new("aLpHa").apply(&rows);
        let names: Vec<&str> = hits.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_all_sentinel_disables_facet() {
        let rows = rows();
        let hits = Filter::new("").equals("status", Selector::All).apply(&rows);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_equals_and_text_are_combined() {
        let rows = rows();
        let hits = Filter::new("alpha")
            .equals("status", Selector::value("active"))
            .apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alpha");
    }

    #[test]
    fn test_equals_is_exact() {
        let rows = rows();
        let hits = Filter::new("")
            .equals("status", Selector::value("Active"))
            .apply(&rows);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_contains_facet_is_case_insensitive() {
        let rows = rows();
        let hits = Filter::new("")
            .contains("kind", Selector::value("postgres"))
            .apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, "PostgreSQL");
    }

    #[test]
    fn test_unknown_facet_only_passes_with_all() {
        let rows = rows();
        assert!(Filter::new("").equals("owner", Selector::value("x")).apply(&rows).is_empty());
        assert_eq!(Filter::new("").equals("owner", Selector::All).apply(&rows).len(), 3);
    }

    #[test]
    fn test_filtered_records_satisfy_every_predicate() {
        let rows = rows();
        let query = "a";
        let selector = Selector::value("active");
        let filter = Filter::new(query).equals("status", selector.clone());
        for row in filter.apply(&rows) {
            assert!(
                row.name.to_lowercase().contains(query) || row.note.to_lowercase().contains(query)
            );
            assert!(selector.matches_equals(row.status));
        }
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("all".parse::<Selector>(), Ok(Selector::All));
        assert_eq!(
            "failed".parse::<Selector>(),
            Ok(Selector::Value("failed".into()))
        );
        assert_eq!(Selector::All.to_string(), "all");
    }
}
