//! PageFrame: standard root wrapper for every page of the dashboard.
//!
//! Root element carries:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_order--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it points straight at `domain/a001_order/`.

use leptos::prelude::*;

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard made of several lists.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
    }
}
