//! Light/dark theme switching.
//!
//! The mode drives thaw's `ConfigProvider` theme and a `data-theme`
//! attribute on `<body>` for the app's own stylesheet. It is not persisted:
//! every page load starts light.

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value of the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn thaw_theme(&self) -> thaw::Theme {
        match self {
            ThemeMode::Light => thaw::Theme::light(),
            ThemeMode::Dark => thaw::Theme::dark(),
        }
    }
}

/// Set `data-theme` on body for additional styling hooks.
pub fn apply_theme_attr(mode: ThemeMode) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

/// Header button that flips between light and dark.
#[component]
pub fn ThemeToggle(mode: RwSignal<ThemeMode>) -> impl IntoView {
    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| mode.update(|m| *m = m.toggled())
            title=move || match mode.get() {
                ThemeMode::Light => "Dark theme",
                ThemeMode::Dark => "Light theme",
            }
        >
            {move || match mode.get() {
                ThemeMode::Light => icon("moon"),
                ThemeMode::Dark => icon("sun"),
            }}
        </button>
    }
}
