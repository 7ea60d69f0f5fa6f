use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const NAV: [Section; 4] = [
        Section::Home,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Get In Touch",
        }
    }
}

/// Returns false when the section isn't mounted.
pub fn scroll_to_section(section: Section) -> bool {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no #{} to scroll to", section.id());
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

pub fn open_external(url: &str) {
    match window().open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => log::warn!("popup blocked opening {url}"),
        Err(e) => log::warn!("couldn't open {url}: {e:?}"),
    }
}
