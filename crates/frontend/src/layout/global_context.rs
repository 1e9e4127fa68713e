use crate::domain::a001_order::api::OrderListResource;
use crate::projections::p900_product_sales::ProductSalesResource;
use crate::projections::p901_shop_sales::ShopSalesResource;
use crate::projections::p902_region_orders::RegionOrdersResource;
use crate::projections::p903_hourly_orders::HourlyOrdersResource;
use crate::shared::api_utils::ApiConfig;
use crate::shared::notify::Notifier;
use crate::shared::paged_list::PagedList;
use crate::shared::report::Report;
use crate::shared::theme::ThemeMode;
use contracts::shared::period::StatsPeriod;
use leptos::prelude::*;

/// Sections of the left menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuKey {
    #[default]
    OrderList,
    SalesStats,
}

impl MenuKey {
    pub const ALL: [MenuKey; 2] = [MenuKey::OrderList, MenuKey::SalesStats];

    pub fn key(&self) -> &'static str {
        match self {
            MenuKey::OrderList => "order-list",
            MenuKey::SalesStats => "sales-stats",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuKey::OrderList => "Orders",
            MenuKey::SalesStats => "Sales statistics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuKey::OrderList => "orders",
            MenuKey::SalesStats => "bar-chart",
        }
    }
}

/// Everything the pages share, built once by `App`
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<MenuKey>,
    pub theme: RwSignal<ThemeMode>,
    pub notifier: Notifier,
    pub api: StoredValue<ApiConfig>,
    pub orders: PagedList<OrderListResource>,
    pub products: PagedList<ProductSalesResource>,
    pub shops: PagedList<ShopSalesResource>,
    pub regions: Report<RegionOrdersResource>,
    pub hourly: Report<HourlyOrdersResource>,
    /// Period shared by every table of the statistics section
    pub stats_period: RwSignal<StatsPeriod>,
}

impl AppGlobalContext {
    pub fn new(config: ApiConfig) -> Self {
        // the sink exists before any list can report into it
        let notifier = Notifier::new();
        let api = StoredValue::new(config);

        Self {
            active: RwSignal::new(MenuKey::default()),
            theme: RwSignal::new(ThemeMode::default()),
            notifier,
            api,
            orders: PagedList::new(api, notifier),
            products: PagedList::new(api, notifier),
            shops: PagedList::new(api, notifier),
            regions: Report::new(api, notifier),
            hourly: Report::new(api, notifier),
            stats_period: RwSignal::new(StatsPeriod::default()),
        }
    }

    /// Switches the section and reloads what it shows
    pub fn select(&self, key: MenuKey) {
        log::debug!("menu: {}", key.key());
        self.active.set(key);
        match key {
            MenuKey::OrderList => self.orders.load(),
            MenuKey::SalesStats => self.load_stats(),
        }
    }

    /// Reloads all four statistics with the current period
    pub fn load_stats(&self) {
        let period = self.stats_period.get_untracked();
        self.products.load();
        self.shops.load();
        self.regions.load(&period);
        self.hourly.load(&period);
    }

    /// Sets the statistics period; paged tables go back to their first page
    pub fn apply_stats_period(&self, period: StatsPeriod) {
        log::debug!("stats period: {:?}", period);
        self.stats_period.set(period.clone());
        self.products.apply_filter(period.clone());
        self.shops.apply_filter(period.clone());
        self.regions.load(&period);
        self.hourly.load(&period);
    }
}
