use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::{reveal::use_reveal, use_content, SectionBadge};
use crate::content::Project;
use crate::nav::Section;
use crate::reveal::{reveal_class, Slide, SECTION_THRESHOLD};

const CARD_STAGGER_MS: usize = 100;

#[component]
pub fn Projects() -> impl IntoView {
    let content = use_content();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, SECTION_THRESHOLD);
    let selected = RwSignal::new(None::<u32>);

    // listener lives as long as the section, no need to keep the cleanup handle
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            selected.set(None);
        }
    });

    view! {
        <section node_ref=section_ref id=Section::Projects.id() class="relative py-24 md:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-hollow-dark via-hollow-blue to-hollow-dark" />
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-hollow-gold/30 to-transparent" />
            <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-hollow-gold/30 to-transparent" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=move || {
                    reveal_class("text-center mb-16 transition-all duration-1000", Slide::Up, visible.get())
                }>
                    <SectionBadge label="Proyectos" />
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-cinzel font-bold text-hollow-white mb-4">
                        "Reliquias del " <span class="gradient-text">"Conocimiento"</span>
                    </h2>
                    <p class="text-hollow-blue-accent/70 max-w-2xl mx-auto">
                        "Cada proyecto es una reliquia forjada con dedicación, representando los desafíos superados y las habilidades adquiridas en mi viaje."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {content
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard index project visible selected /> }
                        })
                        .collect_view()}
                </div>

                <div class=move || {
                    reveal_class(
                        "text-center mt-12 transition-all duration-1000 delay-700",
                        Slide::Up,
                        visible.get(),
                    )
                }>
                    <a
                        href=content.site.github_profile.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-3 rounded-md border border-hollow-gold/30 text-hollow-gold hover:bg-hollow-gold/10 font-cinzel transition-all duration-300"
                    >
                        <i class="devicon-github-plain text-xl" />
                        "Ver más en GitHub"
                    </a>
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(|id| content.project(id))
                    .map(|project| view! { <ProjectDialog project selected /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    index: usize,
    project: &'static Project,
    visible: Signal<bool>,
    selected: RwSignal<Option<u32>>,
) -> impl IntoView {
    let open = move || selected.set(Some(project.id));

    view! {
        <div
            role="button"
            tabindex="0"
            aria-haspopup="dialog"
            style=format!("transition-delay: {}ms", index * CARD_STAGGER_MS)
            class=move || {
                reveal_class(
                    "group relative bg-hollow-blue/60 backdrop-blur-sm border border-hollow-gold/20 rounded-xl p-6 cursor-pointer hover:border-hollow-gold/50 hover:bg-hollow-blue/80 transition-all duration-500",
                    Slide::UpFar,
                    visible.get(),
                )
            }
            on:click=move |_| open()
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <div class=format!(
                "absolute -inset-px bg-gradient-to-r {} rounded-xl opacity-0 group-hover:opacity-20 blur-lg transition-opacity duration-500",
                project.color,
            ) />

            <div class="relative">
                <div class="flex items-start justify-between mb-4">
                    <ProjectIcon project size="w-12 h-12 text-xl" />
                    <CategoryBadge category=project.category.as_str() />
                </div>

                <h3 class="text-xl font-cinzel font-bold text-hollow-white mb-2 group-hover:text-hollow-gold transition-colors">
                    {project.title.as_str()}
                </h3>
                <p class="text-hollow-blue-accent/70 text-sm mb-4 line-clamp-2">
                    {project.description.as_str()}
                </p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .preview_technologies()
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded bg-hollow-dark/50 text-hollow-blue-accent/60">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                    {project
                        .hidden_technologies()
                        .map(|n| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded bg-hollow-dark/50 text-hollow-blue-accent/60">
                                    {format!("+{n}")}
                                </span>
                            }
                        })}
                </div>

                <div class="absolute top-0 right-0 opacity-0 group-hover:opacity-100 transition-opacity text-hollow-gold">
                    "↗"
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectDialog(project: &'static Project, selected: RwSignal<Option<u32>>) -> impl IntoView {
    let close = move || selected.set(None);
    let title_id = format!("project-{}-title", project.id);

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm"
            on:click=move |_| close()
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id.clone()
                class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-xl p-6 bg-hollow-blue/95 backdrop-blur-xl border border-hollow-gold/30"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-hollow-blue-accent/60 hover:text-hollow-gold transition-colors"
                    aria-label="Cerrar"
                    on:click=move |_| close()
                >
                    "✕"
                </button>

                <div class="flex items-center gap-4 mb-4">
                    <ProjectIcon project size="w-14 h-14 text-2xl" />
                    <div>
                        <h2 id=title_id class="text-2xl font-cinzel text-hollow-white">
                            {project.title.as_str()}
                        </h2>
                        <div class="mt-1">
                            <CategoryBadge category=project.category.as_str() />
                        </div>
                    </div>
                </div>
                <p class="text-hollow-blue-accent/80 text-base leading-relaxed">
                    {project.full_description.as_str()}
                </p>

                <div class="mt-6">
                    <h4 class="text-sm font-cinzel text-hollow-gold mb-3">"Tecnologías Utilizadas"</h4>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1.5 rounded-full bg-hollow-dark/70 border border-hollow-gold/20 text-hollow-blue-accent text-sm">
                                        {tech.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="flex gap-4 mt-8">
                    {project
                        .github_url
                        .as_deref()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md border border-hollow-gold/30 text-hollow-gold hover:bg-hollow-gold/10"
                                >
                                    <i class="devicon-github-plain" />
                                    "Ver Código"
                                </a>
                            }
                        })}
                    {project
                        .demo_url
                        .as_deref()
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md bg-hollow-gold/20 border border-hollow-gold/50 text-hollow-gold hover:bg-hollow-gold/30"
                                >
                                    "↗ Ver Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectIcon(project: &'static Project, size: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "{size} rounded-lg bg-gradient-to-br {} flex items-center justify-center text-white",
            project.color,
        )>
            <i class=project.icon.as_str() />
        </div>
    }
}

#[component]
fn CategoryBadge(category: &'static str) -> impl IntoView {
    view! {
        <span class="inline-block rounded-full border border-hollow-gold/30 px-2.5 py-0.5 text-xs text-hollow-gold">
            {category}
        </span>
    }
}
