//! Pagination parameters for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size of every list screen.
pub const ROWS_PER_PAGE: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Page, sort and filter state of a list screen.
///
/// List screens re-fetch whenever this value changes; [`GridParams::refreshed`]
/// produces an equal-but-new value to force a re-fetch after a delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridParams {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub filters: Vec<(String, String)>,
    revision: u32,
}

impl GridParams {
    /// First page, [`ROWS_PER_PAGE`] rows, newest first by `sort_field`.
    pub fn base(sort_field: impl Into<String>) -> Self {
        Self {
            page: 1,
            page_size: ROWS_PER_PAGE,
            sort_field: sort_field.into(),
            sort_order: SortOrder::default(),
            filters: Vec::new(),
            revision: 0,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_field = field.into();
        self.sort_order = order;
        self
    }

    /// Add or replace a filter. A blank value removes the filter.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        self.filters.retain(|(k, _)| *k != key);
        if !value.trim().is_empty() {
            self.filters.push((key, value));
        }
        self.page = 1;
        self
    }

    /// Same parameters, but unequal to `self` so that watchers re-run.
    pub fn refreshed(&self) -> Self {
        Self {
            revision: self.revision.wrapping_add(1),
            ..self.clone()
        }
    }

    /// Number of pages needed for `count` rows.
    pub fn page_count(&self, count: u64) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        count.div_ceil(u64::from(self.page_size))
    }

    /// Query pairs sent to list endpoints.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
            ("sortField".to_string(), self.sort_field.clone()),
            ("sortOrder".to_string(), self.sort_order.as_str().to_string()),
        ];
        query.extend(self.filters.iter().cloned());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_params_build_query() {
        let params = GridParams::base("createdAt");
        assert_eq!(
            params.to_query(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
                ("sortField".to_string(), "createdAt".to_string()),
                ("sortOrder".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn filters_replace_and_reset_page() {
        let params = GridParams::base("name")
            .with_page(3)
            .with_filter("name", "norte")
            .with_filter("name", "sur");
        assert_eq!(params.page, 1);
        assert_eq!(params.filters, vec![("name".to_string(), "sur".to_string())]);

        let cleared = params.with_filter("name", " ");
        assert!(cleared.filters.is_empty());
    }

    #[test]
    fn refreshed_differs_but_keeps_query() {
        let params = GridParams::base("createdAt");
        let again = params.refreshed();
        assert_ne!(params, again);
        assert_eq!(params.to_query(), again.to_query());
    }

    #[test]
    fn page_count_rounds_up() {
        let params = GridParams::base("createdAt");
        assert_eq!(params.page_count(0), 0);
        assert_eq!(params.page_count(10), 1);
        assert_eq!(params.page_count(11), 2);
    }
}
