//! Predicate filters shared by every list view.
//!
//! A record kind opts in by implementing [`Searchable`] (the fields free-text
//! search looks at) and, when it has a closed status set, [`HasStatus`].

use serde::{Deserialize, Serialize};

/// Sentinel value of the status select meaning "no status restriction".
pub const STATUS_ALL: &str = "all";

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring test over [`Searchable::search_fields`].
    /// Whitespace-only queries match everything; any other query is matched
    /// as typed, surrounding spaces included.
    fn matches_query(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub trait HasStatus {
    /// Display label of the record's status, compared case-sensitively.
    fn status_label(&self) -> &str;
}

/// Status select value: either "all" or one exact status label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Exact(String),
}

impl StatusFilter {
    /// `"all"` maps to [`StatusFilter::All`], anything else is kept verbatim.
    pub fn parse(value: &str) -> Self {
        if value == STATUS_ALL {
            StatusFilter::All
        } else {
            StatusFilter::Exact(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => STATUS_ALL,
            StatusFilter::Exact(value) => value,
        }
    }

    pub fn matches<T: HasStatus>(&self, record: &T) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Exact(value) => record.status_label() == value,
        }
    }
}

/// Free-text query plus status choice owned by one list view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub status: StatusFilter,
}

impl FilterState {
    pub fn new(query: impl Into<String>, status: &str) -> Self {
        Self {
            query: query.into(),
            status: StatusFilter::parse(status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.status == StatusFilter::All
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply<'a, T: Searchable + HasStatus>(&self, records: &'a [T]) -> Vec<&'a T> {
        filter_records(records, &self.query, &self.status)
    }
}

/// Text AND status filter. Keeps input order.
pub fn filter_records<'a, T: Searchable + HasStatus>(
    records: &'a [T],
    query: &str,
    status: &StatusFilter,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| record.matches_query(query) && status.matches(*record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        city: &'static str,
        status: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.city]
        }
    }

    impl HasStatus for Row {
        fn status_label(&self) -> &str {
            self.status
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alex Kumar", city: "Pune", status: "New" },
            Row { name: "Priya Sharma", city: "Mumbai", status: "Joined" },
            Row { name: "Rahul Mehta", city: "Bangalore", status: "On Hold" },
            Row { name: "Sneha Patel", city: "Pune", status: "New" },
        ]
    }

    fn names(found: &[&Row]) -> Vec<&'static str> {
        found.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let data = rows();
        let found = filter_records(&data, "", &StatusFilter::All);
        assert_eq!(names(&found), vec!["Alex Kumar", "Priya Sharma", "Rahul Mehta", "Sneha Patel"]);
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        let data = rows();
        assert_eq!(filter_records(&data, "   \t", &StatusFilter::All).len(), data.len());
    }

    #[test]
    fn test_query_is_case_insensitive_over_any_field() {
        let data = rows();
        assert_eq!(names(&filter_records(&data, "PUNE", &StatusFilter::All)), vec!["Alex Kumar", "Sneha Patel"]);
        assert_eq!(names(&filter_records(&data, "sharma", &StatusFilter::All)), vec!["Priya Sharma"]);
    }

    #[test]
    fn test_padded_query_is_matched_as_typed() {
        let data = rows();
        assert!(filter_records(&data, "sharma ", &StatusFilter::All).is_empty());
        assert_eq!(names(&filter_records(&data, "priya ", &StatusFilter::All)), vec!["Priya Sharma"]);
        assert_eq!(names(&filter_records(&data, " sharma", &StatusFilter::All)), vec!["Priya Sharma"]);
        for query in ["sharma ", "priya ", " pune", "a "] {
            let needle = query.to_lowercase();
            for row in filter_records(&data, query, &StatusFilter::All) {
                assert!(
                    row.search_fields().iter().any(|f| f.to_lowercase().contains(&needle)),
                    "{:?} returned for {:?}",
                    row.name,
                    query
                );
            }
        }
    }

    #[test]
    fn test_status_is_exact_and_case_sensitive() {
        let data = rows();
        assert_eq!(names(&filter_records(&data, "", &StatusFilter::parse("New"))), vec!["Alex Kumar", "Sneha Patel"]);
        assert!(filter_records(&data, "", &StatusFilter::parse("new")).is_empty());
        assert!(filter_records(&data, "", &StatusFilter::parse("Archived")).is_empty());
    }

    #[test]
    fn test_text_and_status_combine_with_and() {
        let data = rows();
        let found = filter_records(&data, "pune", &StatusFilter::parse("New"));
        assert_eq!(names(&found), vec!["Alex Kumar", "Sneha Patel"]);
        let found = filter_records(&data, "mumbai", &StatusFilter::parse("New"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let data: Vec<Row> = Vec::new();
        assert!(filter_records(&data, "", &StatusFilter::All).is_empty());
        assert!(filter_records(&data, "x", &StatusFilter::parse("New")).is_empty());
    }

    #[test]
    fn test_matches_and_non_matches_partition() {
        let data = rows();
        for query in ["a", "pu", "zzz", "HOLD", "Mehta"] {
            let found = filter_records(&data, query, &StatusFilter::All);
            let needle = query.to_lowercase();
            for row in &data {
                let hit = row.search_fields().iter().any(|f| f.to_lowercase().contains(&needle));
                assert_eq!(found.contains(&row), hit, "query {query:?}, row {:?}", row.name);
            }
        }
    }

    #[test]
    fn test_refiltering_with_empty_filter_is_identity() {
        let data = rows();
        for (query, status) in [("pune", "all"), ("", "New"), ("a", "Joined"), ("zzz", "all")] {
            let once: Vec<Row> = filter_records(&data, query, &StatusFilter::parse(status))
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Row> = filter_records(&once, "", &StatusFilter::All).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_state() {
        let data = rows();
        let mut state = FilterState::new("pune", "New");
        assert!(!state.is_empty());
        assert_eq!(state.apply(&data).len(), 2);
        state.reset();
        assert!(state.is_empty());
        assert_eq!(state.status.as_str(), STATUS_ALL);
        assert_eq!(state.apply(&data).len(), data.len());
    }
}
