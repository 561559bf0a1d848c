use leptos::{html, prelude::*};

use super::{reveal::use_reveal, use_content, SectionBadge};
use crate::nav::Section;
use crate::reveal::{reveal_class, Slide, ABOUT_THRESHOLD};

#[component]
pub fn About() -> impl IntoView {
    let content = use_content();
    let site = &content.site;
    let about = &site.about;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, ABOUT_THRESHOLD);

    view! {
        <section node_ref=section_ref id=Section::About.id() class="relative py-24 md:py-32 overflow-hidden">
            <div class="absolute inset-0 opacity-5 dot-grid" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <div class=move || {
                        reveal_class("transition-all duration-1000", Slide::FromLeft, visible.get())
                    }>
                        <SectionBadge label="Sobre Mí" />

                        <h2 class="text-3xl md:text-4xl lg:text-5xl font-cinzel font-bold text-hollow-white mb-6">
                            "Forjando mi camino en el "
                            <span class="gradient-text">"reino del código"</span>
                        </h2>

                        <div class="space-y-4 text-hollow-blue-accent/80 leading-relaxed">
                            {about.paragraphs.iter().map(|p| view! { <p>{p.as_str()}</p> }).collect_view()}
                        </div>

                        <div class="grid grid-cols-2 sm:grid-cols-4 gap-4 mt-10">
                            {about
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center p-4 rounded-lg bg-hollow-blue/50 border border-hollow-gold/20 hover:border-hollow-gold/50 transition-all duration-300 group">
                                            <i class=format!(
                                                "{} block text-xl mb-2 text-hollow-gold group-hover:scale-110 transition-transform",
                                                stat.icon.as_deref().unwrap_or_default(),
                                            ) />
                                            <div class="text-2xl font-cinzel font-bold text-hollow-white">
                                                {stat.value.as_str()}
                                            </div>
                                            <div class="text-xs text-hollow-blue-accent/60">
                                                {stat.label.as_str()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class=move || {
                        reveal_class(
                            "relative transition-all duration-1000 delay-300",
                            Slide::FromRight,
                            visible.get(),
                        )
                    }>
                        <div class="relative">
                            <div class="absolute -inset-4 bg-gradient-to-r from-hollow-gold/20 to-hollow-blue-light/20 rounded-2xl blur-2xl" />

                            <div class="relative bg-hollow-blue/80 backdrop-blur-sm border border-hollow-gold/30 rounded-2xl p-8 gradient-border">
                                <div class="space-y-6">
                                    <div class="flex items-center gap-4">
                                        <div class="w-16 h-16 rounded-full bg-gradient-to-br from-hollow-gold to-hollow-gold-light flex items-center justify-center">
                                            <span class="text-2xl font-cinzel font-bold text-hollow-dark">
                                                {site.initials.as_str()}
                                            </span>
                                        </div>
                                        <div>
                                            <h3 class="text-xl font-cinzel font-bold text-hollow-white">
                                                {about.role.as_str()}
                                            </h3>
                                            <p class="text-hollow-blue-accent/60">{about.school.as_str()}</p>
                                        </div>
                                    </div>

                                    <div class="space-y-3">
                                        <div class="flex justify-between text-sm">
                                            <span class="text-hollow-blue-accent/60">"Progreso de Carrera"</span>
                                            <span class="text-hollow-gold">{format!("{}%", about.career_progress)}</span>
                                        </div>
                                        <div class="h-2 bg-hollow-dark rounded-full overflow-hidden">
                                            <div
                                                class="h-full bg-gradient-to-r from-hollow-gold to-hollow-gold-light rounded-full"
                                                style=format!("width: {}%", about.career_progress)
                                            />
                                        </div>
                                    </div>

                                    <div class="grid grid-cols-2 gap-4">
                                        <Fact label="Especialidad" value=about.speciality.as_str() />
                                        <Fact label="Enfoque" value=about.focus.as_str() />
                                    </div>

                                    <div class="p-4 rounded-lg bg-hollow-gold/10 border border-hollow-gold/30">
                                        <p class="text-sm text-hollow-blue-accent/80 italic">
                                            {format!("\"{}\"", about.quote)}
                                        </p>
                                    </div>
                                </div>
                            </div>

                            <div class="absolute -top-2 -left-2 w-8 h-8 border-t-2 border-l-2 border-hollow-gold" />
                            <div class="absolute -bottom-2 -right-2 w-8 h-8 border-b-2 border-r-2 border-hollow-gold" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Fact(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg bg-hollow-dark/50 border border-hollow-blue-light/20">
            <div class="text-hollow-gold text-sm mb-1">{label}</div>
            <div class="text-hollow-white font-cinzel">{value}</div>
        </div>
    }
}
