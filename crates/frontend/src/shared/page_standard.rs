//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_candidate--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from the
//! DOM inspector, paste it into the IDE search and you land in
//! `domain/a001_candidate/`.

/// List of records with search and status filter.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// KPI cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Team administration.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && ALL_CATEGORIES.contains(&parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_candidate--list"));
        assert!(is_valid_page_id("d400_dashboard_stats--dashboard"));
        assert!(!is_valid_page_id("a001_candidate"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_candidate--popup"));
    }
}
