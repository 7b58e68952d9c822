use leptos::prelude::*;
use leptos_meta::Title;

use crate::portfolio::{profile, PageState};

use super::{
    contact::Contact,
    header::NavBar,
    resume::{Education, Experience, Projects},
    scroll::use_scroll_spy,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = profile();
    let state = RwSignal::new(PageState::new());
    use_scroll_spy(state);

    view! {
        <Title text="Portfolio" />
        <NavBar state brand=profile.name.as_str() />
        <main class="mx-auto w-full max-w-5xl px-4 sm:px-6 lg:px-8 pt-20 page-content">
            <section class="section hero fade-in flex flex-col items-center text-center py-16">
                <h1 class="hero-title text-4xl lg:text-5xl font-bold mb-4">
                    {profile.headline.as_str()}
                </h1>
                <p class="location text-cyan-400 mb-6">{profile.location.as_str()}</p>
                <p class="about max-w-2xl text-base leading-relaxed">{profile.about.as_str()}</p>
            </section>
            <Education />
            <Experience />
            <Projects />
            <Contact state />
        </main>
    }
}
