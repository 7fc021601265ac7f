//! Query parameters of a server-paginated list and the request key derived from them.
//!
//! `QueryParameters` is an immutable value: every update returns a new value, and the
//! fields are private so the reset-to-first-page rule cannot be bypassed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryParameters {
    search: String,
    sort: SortDirection,
    page: u32,
    rows: u32,
}

impl QueryParameters {
    pub const FIRST_PAGE: u32 = 1;
    pub const DEFAULT_ROWS: u32 = 10;

    /// Parameters a list starts with: no search, newest first, first page of 10 rows.
    pub fn initial() -> Self {
        Self {
            search: String::new(),
            sort: SortDirection::default(),
            page: Self::FIRST_PAGE,
            rows: Self::DEFAULT_ROWS,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// New search text always starts over from the first page.
    pub fn set_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: Self::FIRST_PAGE,
            ..self.clone()
        }
    }

    /// Sort direction does not reset pagination.
    pub fn set_sort(&self, sort: SortDirection) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// New page size always starts over from the first page. Zero is clamped to 1.
    pub fn set_rows(&self, rows: u32) -> Self {
        Self {
            rows: rows.max(1),
            page: Self::FIRST_PAGE,
            ..self.clone()
        }
    }

    /// Only the page changes. Zero is clamped to the first page; pages past the
    /// server-reported total are passed through, the server decides what they contain.
    pub fn set_page(&self, page: u32) -> Self {
        Self {
            page: page.max(Self::FIRST_PAGE),
            ..self.clone()
        }
    }

    pub fn request_key(&self) -> RequestKey {
        derive_key(self)
    }
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self::initial()
    }
}

/// Stable encoding of [`QueryParameters`] used to decide whether a new fetch is needed.
///
/// The encoding is the query string the list endpoint expects, with parameter names in
/// fixed alphabetical order, so it can be appended to the endpoint URL as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey(String);

impl RequestKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn derive_key(params: &QueryParameters) -> RequestKey {
    RequestKey(format!(
        "keyword={}&limit={}&page={}&sort={}",
        urlencoding::encode(&params.search),
        params.rows,
        params.page,
        params.sort.as_str()
    ))
}
