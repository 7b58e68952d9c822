use leptos::prelude::*;

use crate::portfolio::{NavTarget, PageState, Section};

use super::scroll::perform_scroll;

const LINK_CLASS: &str = "px-3 py-2 rounded-md text-left transition-colors duration-200";

#[component]
pub fn NavBar(state: RwSignal<PageState>, brand: &'static str) -> impl IntoView {
    let active = Memo::new(move |_| state.with(|s| s.active));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open));

    let go = move |target: NavTarget| {
        if let Some(req) = state.try_update(|s| s.navigate(target)) {
            log::debug!("navigating to {target:?}");
            perform_scroll(req);
        }
    };

    view! {
        <nav class="navbar fixed top-0 inset-x-0 z-50 bg-gray-900/90 backdrop-blur shadow-lg">
            <div class="flex flex-wrap items-center justify-between mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-3">
                <button
                    class="nav-name text-xl font-bold hover:text-cyan-400"
                    on:click=move |_| go(NavTarget::Top)
                >
                    {brand}
                </button>
                <button
                    class="mobile-menu-btn md:hidden text-2xl"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| state.update(PageState::toggle_menu)
                >
                    "☰"
                </button>
                <div class=move || {
                    if menu_open.get() {
                        "nav-links open flex flex-col w-full md:flex-row md:w-auto gap-1"
                    } else {
                        "nav-links hidden md:flex md:flex-row gap-1"
                    }
                }>
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || active.get() == section;
                            view! {
                                <button
                                    class=move || {
                                        if is_active() {
                                            format!("active {LINK_CLASS} bg-cyan-500/20 text-cyan-400")
                                        } else {
                                            format!("{LINK_CLASS} hover:bg-gray-700/50")
                                        }
                                    }
                                    aria-current=move || is_active().then_some("true")
                                    on:click=move |_| go(section.into())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(state: PageState) -> String {
        Owner::new().with(|| {
            let state = RwSignal::new(state);
            view! { <NavBar state brand="Daniel Botnarenco" /> }.to_html()
        })
    }

    fn buttons(html: &str) -> Vec<&str> {
        html.split("<button")
            .skip(1)
            .filter_map(|b| b.split("</button>").next())
            .collect()
    }

    #[test]
    fn test_only_active_link_is_marked() {
        for section in Section::ALL {
            let html = render(PageState {
                active: section,
                ..PageState::default()
            });
            let marked = buttons(&html)
                .into_iter()
                .filter(|b| b.contains(r#"aria-current="true""#))
                .collect::<Vec<_>>();
            assert_eq!(marked.len(), 1, "{html}");
            assert!(marked[0].contains(section.label()));
            assert!(marked[0].contains(r#"class="active "#));
            assert_eq!(html.matches(r#"class="active "#).count(), 1);
        }
    }

    #[test]
    fn test_brand_and_links_rendered() {
        let html = render(PageState::default());
        let buttons = buttons(&html);
        // brand, toggle, then one per section
        assert_eq!(buttons.len(), 2 + Section::ALL.len());
        assert!(buttons[0].contains("Daniel Botnarenco"));
        for section in Section::ALL {
            assert!(html.contains(section.label()));
        }
    }

    #[test]
    fn test_menu_state_reflected() {
        let closed = render(PageState::default());
        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(!closed.contains("nav-links open"));

        let open = render(PageState {
            menu_open: true,
            ..PageState::default()
        });
        assert!(open.contains(r#"aria-expanded="true""#));
        assert!(open.contains("nav-links open"));
    }
}
