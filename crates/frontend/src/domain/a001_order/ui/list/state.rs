use crate::shared::date_utils::{parse_datetime_local, to_datetime_local};
use chrono::NaiveDateTime;
use contracts::domain::a001_order::filter::{OrderListFilter, OrderSortField, SortDirection};
use contracts::shared::money::fits_minor_units;
use leptos::prelude::*;

/// Raw values of the filter inputs
///
/// Everything is kept as text the way the inputs hold it; `to_filter`
/// decides what is set. Empty means unset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    pub shop_name: String,
    pub status: String,
    pub is_payed: String,
    pub min_total: String,
    pub max_total: String,
    pub start_time: String,
    pub end_time: String,
    pub sort_field: String,
    pub sort_direction: String,
}

impl Default for FilterDraft {
    fn default() -> Self {
        Self::from_filter(&OrderListFilter::default())
    }
}

/// `Err` when the text is there but is not a number that fits in minor units
fn parse_amount(value: &str) -> Result<Option<f64>, ()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) if fits_minor_units(v) => Ok(Some(v)),
        _ => Err(()),
    }
}

fn parse_time(value: &str) -> Result<Option<NaiveDateTime>, ()> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_datetime_local(value).map(Some).ok_or(())
}

impl FilterDraft {
    pub fn from_filter(filter: &OrderListFilter) -> Self {
        Self {
            shop_name: filter.shop_name.clone().unwrap_or_default(),
            status: filter.status.map(|s| s.to_string()).unwrap_or_default(),
            is_payed: filter.is_payed.map(|p| p.to_string()).unwrap_or_default(),
            min_total: filter.min_total.map(|v| v.to_string()).unwrap_or_default(),
            max_total: filter.max_total.map(|v| v.to_string()).unwrap_or_default(),
            start_time: filter.start_time.as_ref().map(to_datetime_local).unwrap_or_default(),
            end_time: filter.end_time.as_ref().map(to_datetime_local).unwrap_or_default(),
            sort_field: filter.sort_field.code().to_string(),
            sort_direction: filter.sort_direction.code().to_string(),
        }
    }

    /// Builds the filter and names the inputs that were ignored
    ///
    /// Amounts or times that do not parse are treated as unset.
    pub fn to_filter(&self) -> (OrderListFilter, Vec<&'static str>) {
        let mut ignored = Vec::new();

        let shop_name = Some(self.shop_name.trim().to_string()).filter(|s| !s.is_empty());
        let status = self.status.trim().parse::<i32>().ok();
        let is_payed = match self.is_payed.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };

        let min_total = parse_amount(&self.min_total).unwrap_or_else(|_| {
            ignored.push("Min total");
            None
        });
        let max_total = parse_amount(&self.max_total).unwrap_or_else(|_| {
            ignored.push("Max total");
            None
        });
        let start_time = parse_time(&self.start_time).unwrap_or_else(|_| {
            ignored.push("From");
            None
        });
        let end_time = parse_time(&self.end_time).unwrap_or_else(|_| {
            ignored.push("To");
            None
        });

        let filter = OrderListFilter {
            shop_name,
            status,
            is_payed,
            min_total,
            max_total,
            start_time,
            end_time,
            sort_field: OrderSortField::from_code(&self.sort_field).unwrap_or_default(),
            sort_direction: SortDirection::from_code(&self.sort_direction).unwrap_or_default(),
        };
        (filter, ignored)
    }
}

/// One signal per filter input
#[derive(Clone, Copy)]
pub struct FilterForm {
    pub shop_name: RwSignal<String>,
    pub status: RwSignal<String>,
    pub is_payed: RwSignal<String>,
    pub min_total: RwSignal<String>,
    pub max_total: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub sort_field: RwSignal<String>,
    pub sort_direction: RwSignal<String>,
}

impl FilterForm {
    pub fn draft(&self) -> FilterDraft {
        FilterDraft {
            shop_name: self.shop_name.get_untracked(),
            status: self.status.get_untracked(),
            is_payed: self.is_payed.get_untracked(),
            min_total: self.min_total.get_untracked(),
            max_total: self.max_total.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            sort_field: self.sort_field.get_untracked(),
            sort_direction: self.sort_direction.get_untracked(),
        }
    }

    pub fn load(&self, draft: FilterDraft) {
        self.shop_name.set(draft.shop_name);
        self.status.set(draft.status);
        self.is_payed.set(draft.is_payed);
        self.min_total.set(draft.min_total);
        self.max_total.set(draft.max_total);
        self.start_time.set(draft.start_time);
        self.end_time.set(draft.end_time);
        self.sort_field.set(draft.sort_field);
        self.sort_direction.set(draft.sort_direction);
    }
}

pub fn create_form(filter: &OrderListFilter) -> FilterForm {
    let draft = FilterDraft::from_filter(filter);
    FilterForm {
        shop_name: RwSignal::new(draft.shop_name),
        status: RwSignal::new(draft.status),
        is_payed: RwSignal::new(draft.is_payed),
        min_total: RwSignal::new(draft.min_total),
        max_total: RwSignal::new(draft.max_total),
        start_time: RwSignal::new(draft.start_time),
        end_time: RwSignal::new(draft.end_time),
        sort_field: RwSignal::new(draft.sort_field),
        sort_direction: RwSignal::new(draft.sort_direction),
    }
}
