//! Loader for statistics that come back whole, without paging
//!
//! Same contract as `paged_list`: the last reply wins, a failure keeps the
//! previous data and posts one notification.

use crate::shared::api_utils::{fetch_json, ApiConfig, FetchError};
use crate::shared::notify::Notifier;
use crate::shared::paged_list::LoadingGuard;
use contracts::shared::period::StatsPeriod;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// An unpaged statistics endpoint that takes a `StatsPeriod`
pub trait ReportResource: 'static {
    type Data: DeserializeOwned + Default + Clone + Send + Sync + 'static;

    /// Short name used in logs
    const KEY: &'static str;
    const ENDPOINT: &'static str;
    const FAILURE_MESSAGE: &'static str;
}

pub fn report_url<R: ReportResource>(api: &ApiConfig, period: &StatsPeriod) -> String {
    api.url(R::ENDPOINT, &period.query_pairs())
}

/// Stores a successful reply, or returns the text to notify with
pub fn apply_report<R: ReportResource>(
    data: &mut R::Data,
    outcome: Result<R::Data, FetchError>,
) -> Option<String> {
    match outcome {
        Ok(fresh) => {
            *data = fresh;
            None
        }
        Err(e) => Some(format!("{}: {}", R::FAILURE_MESSAGE, e)),
    }
}

pub struct Report<R: ReportResource> {
    pub data: RwSignal<R::Data>,
    pub loading: RwSignal<bool>,
    api: StoredValue<ApiConfig>,
    notifier: Notifier,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ReportResource> Clone for Report<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ReportResource> Copy for Report<R> {}

impl<R: ReportResource> Report<R> {
    pub fn new(api: StoredValue<ApiConfig>, notifier: Notifier) -> Self {
        Self {
            data: RwSignal::new(R::Data::default()),
            loading: RwSignal::new(false),
            api,
            notifier,
            _resource: PhantomData,
        }
    }

    pub fn load(&self, period: &StatsPeriod) {
        let url = self.api.with_value(|api| report_url::<R>(api, period));
        log::debug!("{}: GET {}", R::KEY, url);

        let guard = LoadingGuard::acquire(self.loading);
        let data = self.data;
        let notifier = self.notifier;
        spawn_local(async move {
            let _guard = guard;
            let outcome = fetch_json::<R::Data>(&url).await;
            let message = data.try_update(|d| apply_report::<R>(d, outcome)).flatten();
            if let Some(message) = message {
                log::error!("{}: {}", R::KEY, message);
                notifier.error(message);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Counts;

    impl ReportResource for Counts {
        type Data = Vec<u32>;
        const KEY: &'static str = "counts";
        const ENDPOINT: &'static str = "/counts";
        const FAILURE_MESSAGE: &'static str = "Failed to load counts";
    }

    #[test]
    fn test_url_carries_only_set_bounds() {
        let api = ApiConfig::default();
        assert_eq!(report_url::<Counts>(&api, &StatsPeriod::default()), "/counts");

        let period = StatsPeriod {
            start_time: None,
            end_time: NaiveDate::from_ymd_opt(2024, 5, 31).and_then(|d| d.and_hms_opt(23, 59, 59)),
        };
        assert_eq!(
            report_url::<Counts>(&api, &period),
            "/counts?endTime=2024-05-31%2023%3A59%3A59"
        );
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut data = Vec::new();
        assert_eq!(apply_report::<Counts>(&mut data, Ok(vec![1, 2])), None);

        let message = apply_report::<Counts>(&mut data, Err(FetchError::Status(503)));
        assert_eq!(
            message.as_deref(),
            Some("Failed to load counts: server responded with HTTP 503")
        );
        assert_eq!(data, vec![1, 2]);
    }
}
