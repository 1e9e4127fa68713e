//! Reusable loader for paged REST resources
//!
//! One `PagedList<R>` per resource: it owns the list state, the loading
//! flag and the knowledge of how to turn that state into a request.
//! Orders, product sales and shop sales all go through it.

pub mod state;

use crate::shared::api_utils::{fetch_json, ApiConfig, FetchError};
use crate::shared::notify::Notifier;
use contracts::shared::page::Page;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

pub use state::{ListState, Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZES};

/// A paged endpoint together with its row and filter types
pub trait ListResource: 'static {
    type Row: DeserializeOwned + Clone + Send + Sync + 'static;
    type Filter: Default + Clone + PartialEq + Send + Sync + 'static;

    /// Short name used in logs
    const KEY: &'static str;
    const ENDPOINT: &'static str;
    /// Prefix of the notification shown when a load fails
    const FAILURE_MESSAGE: &'static str;

    fn filter_pairs(_filter: &Self::Filter) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

pub type ResourceState<R> = ListState<<R as ListResource>::Row, <R as ListResource>::Filter>;

pub fn list_query<R: ListResource>(state: &ResourceState<R>) -> Vec<(&'static str, String)> {
    state.query_pairs(R::filter_pairs)
}

/// Settles a finished load and returns the text to notify with, if any
pub fn apply_outcome<R: ListResource>(
    state: &mut ResourceState<R>,
    outcome: Result<Page<R::Row>, FetchError>,
) -> Option<String> {
    state
        .settle(outcome)
        .err()
        .map(|e| format!("{}: {}", R::FAILURE_MESSAGE, e))
}

/// Holds the loading flag up for as long as it lives
pub struct LoadingGuard {
    flag: RwSignal<bool>,
    armed: bool,
}

impl LoadingGuard {
    pub fn acquire(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        Self { flag, armed: true }
    }

    /// Lets go without touching the flag, for a request that a newer one
    /// has superseded
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.armed {
            // the owner may already be disposed when a late response lands
            let _ = self.flag.try_set(false);
        }
    }
}

/// Reactive controller of one paged resource
pub struct PagedList<R: ListResource> {
    pub state: RwSignal<ResourceState<R>>,
    pub loading: RwSignal<bool>,
    api: StoredValue<ApiConfig>,
    notifier: Notifier,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> Clone for PagedList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for PagedList<R> {}

impl<R: ListResource> PagedList<R> {
    pub fn new(api: StoredValue<ApiConfig>, notifier: Notifier) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            loading: RwSignal::new(false),
            api,
            notifier,
            _resource: PhantomData,
        }
    }

    /// Fetches the page described by the current state
    ///
    /// Responses are applied in arrival order; a slower earlier request
    /// can overwrite a newer one.
    pub fn load(&self) {
        let query = self.state.with_untracked(list_query::<R>);
        let url = self.api.with_value(|api| api.url(R::ENDPOINT, &query));
        log::debug!("{}: GET {}", R::KEY, url);

        let guard = LoadingGuard::acquire(self.loading);
        let state = self.state;
        let notifier = self.notifier;
        spawn_local(async move {
            let _guard = guard;
            let outcome = fetch_json::<Page<R::Row>>(&url).await;
            let message = state
                .try_update(|s| apply_outcome::<R>(s, outcome))
                .flatten();
            if let Some(message) = message {
                log::error!("{}: {}", R::KEY, message);
                notifier.error(message);
            }
        });
    }

    pub fn go_to_page(&self, page: usize) {
        self.state.update(|s| s.go_to_page(page));
        self.load();
    }

    pub fn change_page_size(&self, page_size: usize) {
        self.state.update(|s| s.change_page_size(page_size));
        self.load();
    }

    pub fn apply_filter(&self, filter: R::Filter) {
        self.state.update(|s| s.apply_filter(filter));
        self.load();
    }

    pub fn reset_filter(&self) {
        self.state.update(|s| s.reset_filter());
        self.load();
    }

    pub fn refresh(&self) {
        self.load();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NameFilter {
        name: String,
    }

    struct Rows;

    impl ListResource for Rows {
        type Row = Row;
        type Filter = NameFilter;
        const KEY: &'static str = "rows";
        const ENDPOINT: &'static str = "/rows";
        const FAILURE_MESSAGE: &'static str = "Failed to load rows";

        fn filter_pairs(filter: &NameFilter) -> Vec<(&'static str, String)> {
            if filter.name.is_empty() {
                Vec::new()
            } else {
                vec![("name", filter.name.clone())]
            }
        }
    }

    fn rows_page(ids: &[i64], total: u64, number: u32) -> Page<Row> {
        Page {
            content: ids.iter().map(|&id| Row { id }).collect(),
            total_elements: total,
            total_pages: 0,
            size: 10,
            number,
        }
    }

    #[test]
    fn test_list_query_defaults() {
        let state = ResourceState::<Rows>::default();
        assert_eq!(
            list_query::<Rows>(&state),
            vec![("page", "1".to_string()), ("size", "10".to_string())]
        );
    }

    #[test]
    fn test_reset_filter_is_idempotent() {
        let mut state = ResourceState::<Rows>::default();
        state.apply_filter(NameFilter { name: "a".into() });
        state.go_to_page(4);

        state.reset_filter();
        let once = list_query::<Rows>(&state);
        state.reset_filter();
        let twice = list_query::<Rows>(&state);

        assert_eq!(once, twice);
        assert_eq!(once, list_query::<Rows>(&ResourceState::<Rows>::default()));
    }

    #[test]
    fn test_http_500_keeps_rows_and_reports_once() {
        let mut state = ResourceState::<Rows>::default();
        assert_eq!(apply_outcome::<Rows>(&mut state, Ok(rows_page(&[1, 2], 2, 0))), None);

        let message = apply_outcome::<Rows>(&mut state, Err(FetchError::Status(500)));
        assert_eq!(
            message.as_deref(),
            Some("Failed to load rows: server responded with HTTP 500")
        );
        assert_eq!(state.rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_later_response_overwrites_earlier() {
        let mut state = ResourceState::<Rows>::default();
        apply_outcome::<Rows>(&mut state, Ok(rows_page(&[11], 21, 1)));
        apply_outcome::<Rows>(&mut state, Ok(rows_page(&[1], 21, 0)));
        assert_eq!(state.rows, vec![Row { id: 1 }]);
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn test_loading_guard_clears_on_drop() {
        let flag = RwSignal::new(false);
        {
            let _guard = LoadingGuard::acquire(flag);
            assert!(flag.get_untracked());
        }
        assert!(!flag.get_untracked());
    }

    #[test]
    fn test_superseded_guard_leaves_flag_to_newer_request() {
        let flag = RwSignal::new(false);
        let first = LoadingGuard::acquire(flag);
        let second = LoadingGuard::acquire(flag);

        first.disarm();
        assert!(flag.get_untracked());

        drop(second);
        assert!(!flag.get_untracked());
    }

    #[test]
    fn test_loading_guard_clears_on_early_return() {
        fn failing(flag: RwSignal<bool>) -> Result<(), FetchError> {
            let _guard = LoadingGuard::acquire(flag);
            let response: Result<u32, FetchError> = Err(FetchError::Network("offline".into()));
            response?;
            Ok(())
        }

        let flag = RwSignal::new(false);
        assert!(failing(flag).is_err());
        assert!(!flag.get_untracked());
    }
}
