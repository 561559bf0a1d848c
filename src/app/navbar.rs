use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{scroll_to, scroll_to_href, use_content};
use crate::nav::{is_scrolled, ScrollTarget};

#[component]
pub fn Navbar() -> impl IntoView {
    let content = use_content();
    let site = &content.site;
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || is_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    let follow = move |href: &str| {
        set_menu_open.set(false);
        scroll_to_href(href);
    };

    let links = move |class: &'static str| {
        site.nav
            .iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href.as_str()
                        class=class
                        on:click=move |ev| {
                            ev.prevent_default();
                            follow(&link.href);
                        }
                    >
                        {link.label.as_str()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-hollow-dark/90 backdrop-blur-md border-b border-hollow-gold/20 py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent py-5"
            }
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <a
                        href="#"
                        class="flex items-center gap-2 group"
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_menu_open.set(false);
                            scroll_to(ScrollTarget::Top);
                        }
                    >
                        <div class="w-8 h-8 rounded bg-gradient-to-br from-hollow-gold to-hollow-gold-light flex items-center justify-center group-hover:shadow-glow transition-shadow duration-300">
                            <span class="text-sm font-cinzel font-bold text-hollow-dark">
                                {site.initials.as_str()}
                            </span>
                        </div>
                        <span class=move || {
                            if scrolled.get() {
                                "font-cinzel font-bold transition-colors duration-300 text-hollow-white"
                            } else {
                                "font-cinzel font-bold transition-colors duration-300 text-hollow-white/90"
                            }
                        }>{site.brand.as_str()}</span>
                    </a>

                    <div class="hidden md:flex items-center gap-1">
                        {links(
                            "px-4 py-2 text-sm text-hollow-blue-accent/80 hover:text-hollow-gold rounded-lg hover:bg-hollow-gold/10 transition-all duration-300",
                        )}
                    </div>

                    <button
                        class="md:hidden w-10 h-10 rounded-lg bg-hollow-blue/50 border border-hollow-gold/20 flex items-center justify-center hover:border-hollow-gold/50 transition-colors"
                        aria-label="Menú"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class=move || {
                            if menu_open.get() {
                                "text-xl leading-none text-hollow-gold"
                            } else {
                                "text-xl leading-none text-hollow-blue-accent"
                            }
                        }>{move || if menu_open.get() { "✕" } else { "☰" }}</span>
                    </button>
                </div>

                <div class=move || {
                    if menu_open.get() {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-80 mt-4"
                    } else {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-0"
                    }
                }>
                    <div class="py-4 space-y-2 border-t border-hollow-gold/20">
                        {links(
                            "block px-4 py-3 text-hollow-blue-accent/80 hover:text-hollow-gold hover:bg-hollow-gold/10 rounded-lg transition-all duration-300",
                        )}
                    </div>
                </div>
            </div>
        </nav>
    }
}
