use leptos::prelude::*;

use super::data::PROJECTS;
use super::reveal_class;
use crate::reveal::use_reveal;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (section_ref, visible) = use_reveal(0.2);

    view! {
        <section node_ref=section_ref id="projects" class="py-12 px-8 bg-card/30">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal_class("", "translate-y-8", visible.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"Projects"</h2>
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let delay = match index {
                                0 => "delay-200",
                                1 => "delay-400",
                                _ => "delay-600",
                            };
                            view! {
                                <div class=move || {
                                    reveal_class(delay, "translate-y-8", visible.get())
                                }>
                                    <div class="h-full flex flex-col p-4 rounded-lg border border-muted/30 bg-brightBlack/20">
                                        <div class="flex items-start gap-4 mb-4">
                                            <div class=format!(
                                                "p-2 rounded-lg bg-gradient-to-r {} flex items-center justify-center",
                                                project.accent,
                                            )>
                                                <i class=format!("{} text-white", project.icon)></i>
                                            </div>
                                            <div class="flex-1">
                                                <h3 class="text-lg font-semibold mb-2">{project.title}</h3>
                                                <p class="text-sm text-muted">{project.description}</p>
                                            </div>
                                        </div>

                                        <div class="flex flex-wrap gap-2 mb-4 p-2">
                                            {project
                                                .technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="text-xs px-2 py-1 rounded-md border border-muted/30">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>

                                        <div class="flex gap-3 mt-auto">
                                            <a
                                                href=project.github_url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex-1 inline-flex items-center justify-center gap-2 px-3 py-2 rounded-md border border-muted/30 hover:border-muted text-sm transition-colors duration-200"
                                            >
                                                <i class="devicon-github-plain"></i>
                                                "Code"
                                            </a>
                                            {project
                                                .live_url
                                                .map(|url| {
                                                    view! {
                                                        <a
                                                            href=url
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="flex-1 inline-flex items-center justify-center gap-2 px-3 py-2 rounded-md bg-blue-800 hover:bg-blue-700 text-white text-sm transition-colors duration-200"
                                                        >
                                                            <i class="extra-link"></i>
                                                            "Live Demo"
                                                        </a>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
