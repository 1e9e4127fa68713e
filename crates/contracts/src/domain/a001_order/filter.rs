use crate::shared::money::to_minor_units;
use crate::shared::period::time_range_pairs;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Поле сортировки списка заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderSortField {
    #[default]
    CreateTime,
    Total,
}

impl OrderSortField {
    pub const ALL: [OrderSortField; 2] = [OrderSortField::CreateTime, OrderSortField::Total];

    /// Имя свойства, которое ждёт API
    pub fn code(&self) -> &'static str {
        match self {
            OrderSortField::CreateTime => "createTime",
            OrderSortField::Total => "total",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderSortField::CreateTime => "Created",
            OrderSortField::Total => "Total",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "createTime" => Some(OrderSortField::CreateTime),
            "total" => Some(OrderSortField::Total),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
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

/// Фильтр списка заказов
///
/// `None` означает "не задано": такие поля не попадают в запрос.
/// Границы суммы задаются в основных единицах и уходят в API в минорных.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderListFilter {
    pub shop_name: Option<String>,
    pub status: Option<i32>,
    pub is_payed: Option<bool>,
    pub min_total: Option<f64>,
    pub max_total: Option<f64>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub sort_field: OrderSortField,
    pub sort_direction: SortDirection,
}

impl OrderListFilter {
    /// Пары query-параметров в фиксированном порядке, без кодирования
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("sortField", self.sort_field.code().to_string()),
            ("sortDirection", self.sort_direction.code().to_string()),
        ];

        if let Some(name) = self.shop_name_trimmed() {
            pairs.push(("shopName", name.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(is_payed) = self.is_payed {
            pairs.push(("isPayed", is_payed.to_string()));
        }
        if let Some(min) = self.min_total {
            pairs.push(("minTotal", to_minor_units(min).to_string()));
        }
        if let Some(max) = self.max_total {
            pairs.push(("maxTotal", to_minor_units(max).to_string()));
        }
        pairs.extend(time_range_pairs(self.start_time, self.end_time));

        pairs
    }

    /// Количество заданных фильтров (период считается одним)
    pub fn active_count(&self) -> usize {
        let mut count = 0usize;
        if self.shop_name_trimmed().is_some() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if self.is_payed.is_some() {
            count += 1;
        }
        if self.min_total.is_some() || self.max_total.is_some() {
            count += 1;
        }
        if self.start_time.is_some() || self.end_time.is_some() {
            count += 1;
        }
        count
    }

    fn shop_name_trimmed(&self) -> Option<&str> {
        self.shop_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
