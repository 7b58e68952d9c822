use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::portfolio::{MailtoLink, PageState, ScrollRequest, Section, Viewport};

fn section_top(section: Section) -> Option<f64> {
    document()
        .get_element_by_id(section.id())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_top()))
}

fn viewport() -> Option<Viewport> {
    let window = window();
    let scroll_y = window.scroll_y().ok()?;
    let inner_height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport {
        scroll_y,
        inner_height,
    })
}

/// Recomputes the active section on every window scroll. The listener is removed
/// when the calling component is disposed.
pub fn use_scroll_spy(state: RwSignal<PageState>) {
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let Some(vp) = viewport() else {
            log::debug!("scroll spy: viewport unavailable");
            return;
        };
        let offsets = Section::ALL.map(|section| (section, section_top(section)));
        state.maybe_update(|s| {
            let before = s.active;
            s.observe_scroll(vp.probe(), offsets);
            s.active != before
        });
    });
}

pub fn perform_scroll(req: ScrollRequest) {
    match req {
        ScrollRequest::Origin => {
            let opts = ScrollToOptions::new();
            opts.set_left(0.0);
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&opts);
        }
        ScrollRequest::IntoView(section) => {
            let Some(el) = document().get_element_by_id(section.id()) else {
                log::debug!("no element for section {section}");
                return;
            };
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
}

/// Hands the link to the browser. Whether a mail client picks it up is not observable.
pub fn open_mailto(link: &MailtoLink) {
    if let Err(err) = window().location().set_href(link.as_str()) {
        log::warn!("couldn't open mail link: {err:?}");
    }
}
