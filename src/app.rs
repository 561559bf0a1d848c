mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod toaster;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{content, Content, FAVICON};
use crate::nav::ScrollTarget;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use toaster::{provide_toasts, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portafolio.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-hollow-dark text-hollow-white overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toasts();

    view! {
        <Title formatter=|title| format!("Portafolio - {title}") />
        <Meta
            name="description"
            content="Portafolio de un estudiante de Ingeniería en Software: proyectos, habilidades y contacto."
        />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
        <Toaster />
    }
}

/// The page content, provided by [`HomePage`] to every section below it.
pub(crate) fn use_content() -> &'static Content {
    expect_context::<&'static Content>()
}

pub(crate) fn scroll_to(target: ScrollTarget) {
    match target {
        ScrollTarget::Top => window().scroll_to_with_x_and_y(0.0, 0.0),
        ScrollTarget::Section(section) => {
            // smoothness comes from `scroll-behavior` in input.css
            if let Some(el) = document().get_element_by_id(section.id()) {
                el.scroll_into_view();
            } else {
                log::warn!("section #{} is not on the page", section.id());
            }
        }
    }
}

pub(crate) fn scroll_to_href(href: &str) {
    match ScrollTarget::try_from(href) {
        Ok(target) => scroll_to(target),
        Err(e) => log::warn!("ignoring navigation: {e}"),
    }
}

/// Pill shown above each section heading.
#[component]
pub(crate) fn SectionBadge(label: &'static str) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-hollow-gold/10 border border-hollow-gold/30 mb-6">
            <span class="w-2 h-2 rounded-full bg-hollow-gold animate-pulse" />
            <span class="text-hollow-gold text-sm font-cinzel">{label}</span>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match content() {
        Ok(content) => {
            provide_context(content);
            Either::Left(view! {
                <Title text="Ingeniería en Software" />
                <Navbar />
                <main>
                    <Hero />
                    <About />
                    <Projects />
                    <Skills />
                    <Contact />
                </main>
                <Footer />
            })
        }
        Err(e) => {
            log::error!("couldn't load page content: {e}");
            Either::Right(view! {
                <Title text="Error" />
                <main class="min-h-screen flex flex-col items-center justify-center gap-4 px-4 text-center">
                    <h1 class="text-3xl font-cinzel font-bold text-hollow-gold">
                        "El contenido no está disponible"
                    </h1>
                    <p class="text-hollow-blue-accent/70">{e.to_string()}</p>
                </main>
            })
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página no encontrada" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-center">
            <h1 class="text-6xl font-cinzel font-bold gradient-text">"404"</h1>
            <p class="text-hollow-blue-accent/70">"Este camino no lleva a ninguna parte."</p>
            <a
                href="/"
                class="px-6 py-3 rounded-lg border border-hollow-gold/50 bg-hollow-gold/20 text-hollow-gold hover:bg-hollow-gold/30 transition-all duration-300 font-cinzel"
            >
                "Volver al inicio"
            </a>
        </main>
    }
}
