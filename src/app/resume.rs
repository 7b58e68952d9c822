use leptos::prelude::*;

use crate::portfolio::{profile, Section};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="section fade-in py-12">
            <h2 class="mb-6 border-b border-gray-700 pb-1 text-2xl font-bold">
                {Section::Education.label()}
            </h2>
            <div class="grid gap-y-6">
                {profile()
                    .education
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="item space-y-1">
                                <h3 class="text-lg font-bold">{entry.title.as_str()}</h3>
                                <span class="text-sm text-gray-400">
                                    {format!("{} · {}", entry.period, entry.institution)}
                                </span>
                                <p class="text-sm">{entry.location.as_str()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="section fade-in py-12">
            <h2 class="mb-6 border-b border-gray-700 pb-1 text-2xl font-bold">
                {Section::Experience.label()}
            </h2>
            <div class="grid gap-y-8">
                {profile()
                    .experience
                    .iter()
                    .map(|entry| {
                        let tech = entry.tech_line();
                        view! {
                            <div class="item space-y-2">
                                <h3 class="text-lg font-bold">{entry.role.as_str()}</h3>
                                <span class="text-sm text-gray-400">{entry.period.as_str()}</span>
                                <ul class="list-disc pl-5 space-y-1 text-sm leading-relaxed">
                                    {entry
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>{h.as_str()}</li> })
                                        .collect_view()}
                                </ul>
                                {(!tech.is_empty())
                                    .then(|| {
                                        view! { <p class="tech text-sm text-cyan-400">{tech}</p> }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section fade-in py-12">
            <h2 class="mb-6 border-b border-gray-700 pb-1 text-2xl font-bold">
                {Section::Projects.label()}
            </h2>
            <ul class="list-disc pl-5 space-y-2 leading-relaxed">
                {profile()
                    .projects
                    .iter()
                    .map(|p| view! { <li>{p.as_str()}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
