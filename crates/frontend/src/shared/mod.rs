pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod notify;
pub mod page_frame;
pub mod paged_list;
pub mod report;
pub mod theme;
