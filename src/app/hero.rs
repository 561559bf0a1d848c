use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::{scroll_to, use_content};
use crate::content::{SocialLink, HERO_BACKGROUND, HERO_KNIGHT};
use crate::nav::{ScrollTarget, Section};
use crate::particles::{ParticleField, SPAWN_INTERVAL_MS};

#[component]
pub fn Hero() -> impl IntoView {
    let content = use_content();
    let hero = &content.site.hero;

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div
                class="absolute inset-0 bg-cover bg-center bg-no-repeat"
                style=format!("background-image: url('{HERO_BACKGROUND}')")
            >
                <div class="absolute inset-0 bg-gradient-to-b from-hollow-dark/60 via-hollow-dark/40 to-hollow-dark" />
            </div>

            <Particles />

            <div class="relative z-10 container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="animate-fade-in-up">
                    <div class="mb-8 flex justify-center">
                        <img
                            src=HERO_KNIGHT
                            alt="Knight"
                            class="h-48 md:h-64 w-auto object-contain drop-shadow-2xl animate-float"
                        />
                    </div>

                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-cinzel font-bold mb-4">
                        <span class="gradient-text text-glow">{hero.title_accent.as_str()}</span>
                        <br />
                        <span class="text-hollow-white">{hero.title.as_str()}</span>
                    </h1>

                    <p class="text-lg md:text-xl text-hollow-blue-accent/80 max-w-2xl mx-auto mb-8 font-light">
                        {hero.subtitle.as_str()}
                        <span class="text-hollow-gold">{hero.subtitle_accent.as_str()}</span>
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                        <button
                            class="px-8 py-3 rounded-md bg-hollow-gold/20 border border-hollow-gold/50 text-hollow-gold hover:bg-hollow-gold/30 hover:border-hollow-gold transition-all duration-300 font-cinzel"
                            on:click=move |_| scroll_to(ScrollTarget::Section(Section::Projects))
                        >
                            "Ver Proyectos"
                        </button>
                        <button
                            class="px-8 py-3 rounded-md border border-hollow-blue-light/50 text-hollow-blue-light hover:bg-hollow-blue-light/10 transition-all duration-300 font-cinzel"
                            on:click=move |_| scroll_to(ScrollTarget::Section(Section::Contact))
                        >
                            "Contactar"
                        </button>
                    </div>

                    <div class="flex justify-center gap-6">
                        {content.site.hero_socials.iter().map(social_icon).collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-3xl text-hollow-gold/60">
                "⌄"
            </div>

            <div class="absolute top-20 left-10 w-32 h-32 border border-hollow-gold/20 rounded-full animate-pulse-glow" />
            <div class="absolute bottom-32 right-16 w-24 h-24 border border-hollow-blue-light/20 rounded-full animate-pulse-glow [animation-delay:1s]" />
        </section>
    }
}

fn social_icon(social: &'static SocialLink) -> impl IntoView {
    view! {
        <a
            href=social.href.as_str()
            target="_blank"
            rel="noopener noreferrer"
            aria-label=social.label.as_str()
            class="text-2xl text-hollow-blue-accent/60 hover:text-hollow-gold transition-colors duration-300"
        >
            <i class=social.icon.as_str() />
        </a>
    }
}

/// Floating motes behind the hero text. The first batch is part of the
/// server render; the browser keeps spawning new ones and retires the oldest.
#[component]
fn Particles() -> impl IntoView {
    let field = RwSignal::new(ParticleField::default());
    use_interval_fn(move || field.update(ParticleField::spawn), SPAWN_INTERVAL_MS);

    view! {
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            <For
                each=move || field.with(|f| f.particles().copied().collect::<Vec<_>>())
                key=|p| p.id
                children=|p| {
                    view! {
                        <div
                            class="absolute w-1 h-1 bg-hollow-blue-light rounded-full animate-float"
                            style=p.style()
                        />
                    }
                }
            />
        </div>
    }
}
