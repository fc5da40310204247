//! Browser glue: the only module that talks to `web_sys` directly.
//!
//! Failures here are never fatal. They are logged and the page carries on.

use leptos::html;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::navigation::ScrollTarget;
use crate::theme::{self, Theme};

/// Anchor of a rendered `<section>`.
pub type SectionRef = NodeRef<html::Section>;

impl ScrollTarget for SectionRef {
    fn scroll_into_view(&self) {
        if let Some(el) = self.get_untracked() {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
}

/// Put or remove the `dark` class on `<html>`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1(theme::DARK_CLASS)
    } else {
        classes.remove_1(theme::DARK_CLASS)
    };
    if let Err(e) = result {
        tracing::warn!("failed to apply theme {theme}: {e:?}");
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_theme() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(theme::STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = local_storage()
        && let Err(e) = storage.set_item(theme::STORAGE_KEY, theme.as_str())
    {
        tracing::warn!("failed to persist theme: {e:?}");
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!("failed to open {url}: {e:?}");
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
