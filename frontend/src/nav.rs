use log::debug;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::Section;

/// Smoothly scrolls the section with `id` into view. No-op when absent.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub sections: &'static [Section],
    pub active: &'static str,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let sections: &'static [Section] = props.sections;
    let active = props.active;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_OFFSET;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link = |section: &'static Section, mobile: bool| {
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Navigating to #{}", section.id);
                scroll_to_section(section.id);
                menu_open.set(false);
            })
        };
        html! {
            <button
                key={section.id}
                class={classes!(
                    if mobile { "nav-link mobile" } else { "nav-link" },
                    (section.id == active).then(|| "active")
                )}
                onclick={onclick}
            >
                {section.label}
            </button>
        }
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">{config::BRAND}</div>
                <div class="nav-links">
                    { for sections.iter().map(|s| link(s, false)) }
                </div>
                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for sections.iter().map(|s| link(s, true)) }
            </div>
        </nav>
    }
}
