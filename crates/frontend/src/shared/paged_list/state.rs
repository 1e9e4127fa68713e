use crate::shared::api_utils::FetchError;
use contracts::shared::page::{page_count, Page};

/// Page sizes offered by the pagination controls
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination as the UI sees it (1-based pages)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub item_count: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            item_count: 0,
        }
    }
}

impl Pagination {
    pub fn page_count(&self) -> usize {
        page_count(self.item_count, self.page_size)
    }

    /// `page` and `size` exactly as the API expects them; the API is 1-based too
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.page_size.to_string()),
        ]
    }
}

/// Rows, pagination and filter of one paged resource
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<Row, Filter> {
    pub rows: Vec<Row>,
    pub pagination: Pagination,
    pub filter: Filter,
}

impl<Row, Filter: Default> Default for ListState<Row, Filter> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::default(),
            filter: Filter::default(),
        }
    }
}

impl<Row, Filter: Default> ListState<Row, Filter> {
    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.page = page.max(1);
    }

    /// New page size always starts again from the first page
    pub fn change_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page = 1;
    }

    pub fn apply_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.pagination.page = 1;
    }

    pub fn reset_filter(&mut self) {
        self.apply_filter(Filter::default());
    }

    /// Pagination pairs first, then whatever the filter contributes
    pub fn query_pairs(
        &self,
        filter_pairs: impl Fn(&Filter) -> Vec<(&'static str, String)>,
    ) -> Vec<(&'static str, String)> {
        let mut pairs = self.pagination.query_pairs();
        pairs.extend(filter_pairs(&self.filter));
        pairs
    }

    /// Applies a finished fetch
    ///
    /// On success rows and counters are replaced from the envelope and the
    /// 0-based `number` becomes the 1-based UI page. On failure nothing
    /// changes and the error is handed back.
    pub fn settle(&mut self, outcome: Result<Page<Row>, FetchError>) -> Result<(), FetchError> {
        let page = outcome?;
        self.pagination.item_count = page.total_elements as usize;
        if page.size > 0 {
            self.pagination.page_size = page.size as usize;
        }
        self.pagination.page = page.ui_page();
        self.rows = page.content;
        Ok(())
    }
}
