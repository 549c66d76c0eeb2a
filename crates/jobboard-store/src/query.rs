//! Filter and sort builders for paginated job search.

use mongodb::bson::{doc, Document};

/// Sort direction for the deadline sort.
///
/// Only the literal `asc` token selects ascending order; anything else,
/// including an absent parameter, sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Parse from the `sort` query token, returning default if invalid.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "asc" => Self::Ascending,
            _ => Self::Descending,
        }
    }

    /// Store-level order value.
    pub const fn order(&self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// Parameters for a paginated job search.
#[derive(Debug, Clone)]
pub struct JobSearch {
    /// 1-based page number.
    pub page: u64,
    /// Page size.
    pub size: i64,
    /// Exact category filter, if any.
    pub category: Option<String>,
    /// Deadline sort direction.
    pub sort: SortDirection,
    /// Case-insensitive substring match on the title. Empty matches all.
    pub search: String,
}

impl JobSearch {
    /// Documents to skip before this page.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size as u64)
    }
}

/// Filter document for search and count: case-insensitive regex on
/// `job_title`, optionally narrowed by exact category equality.
pub fn job_search_filter(search: &str, category: Option<&str>) -> Document {
    let mut filter = doc! {
        "job_title": { "$regex": escape_regex(search), "$options": "i" },
    };
    if let Some(category) = category {
        filter.insert("category", category);
    }
    filter
}

/// Sort document for the deadline sort.
pub fn deadline_sort(direction: SortDirection) -> Document {
    doc! { "deadline": direction.order() }
}

/// Escape regex metacharacters so the search term matches literally.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_token_parsing() {
        assert_eq!(SortDirection::from_str_or_default("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::from_str_or_default("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::from_str_or_default(""), SortDirection::Descending);
        assert_eq!(SortDirection::from_str_or_default("ASC"), SortDirection::Descending);
    }

    #[test]
    fn empty_search_matches_all_titles() {
        let filter = job_search_filter("", None);
        let title = filter.get_document("job_title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "");
        assert_eq!(title.get_str("$options").unwrap(), "i");
        assert!(filter.get("category").is_none());
    }

    #[test]
    fn category_narrows_filter() {
        let filter = job_search_filter("logo", Some("design"));
        assert_eq!(filter.get_str("category").unwrap(), "design");
    }

    #[test]
    fn search_term_is_matched_literally() {
        let filter = job_search_filter("c++ (senior)", None);
        let title = filter.get_document("job_title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), r"c\+\+ \(senior\)");
    }

    #[test]
    fn skip_is_page_minus_one_times_size() {
        let search = JobSearch {
            page: 3,
            size: 8,
            category: None,
            sort: SortDirection::default(),
            search: String::new(),
        };
        assert_eq!(search.skip(), 16);
    }

    #[test]
    fn first_page_skips_nothing() {
        let search = JobSearch {
            page: 1,
            size: 20,
            category: None,
            sort: SortDirection::Ascending,
            search: String::new(),
        };
        assert_eq!(search.skip(), 0);
    }

    #[test]
    fn deadline_sort_direction() {
        assert_eq!(
            deadline_sort(SortDirection::Ascending),
            doc! { "deadline": 1 }
        );
        assert_eq!(
            deadline_sort(SortDirection::Descending),
            doc! { "deadline": -1 }
        );
    }
}
