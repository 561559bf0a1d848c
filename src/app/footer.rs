use chrono::prelude::*;
use leptos::prelude::*;

use super::{scroll_to, scroll_to_href, use_content};
use crate::nav::ScrollTarget;

#[component]
pub fn Footer() -> impl IntoView {
    let content = use_content();
    let site = &content.site;
    let footer = &site.footer;
    let year = Utc::now().year();

    view! {
        <footer class="relative py-12 overflow-hidden">
            <div class="absolute inset-0 bg-hollow-darker" />
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-hollow-gold/20 to-transparent" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8">
                    <div class="flex flex-col items-center md:items-start gap-2">
                        <a
                            href="#"
                            class="flex items-center gap-2 group"
                            on:click=|ev| {
                                ev.prevent_default();
                                scroll_to(ScrollTarget::Top);
                            }
                        >
                            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-hollow-gold to-hollow-gold-light flex items-center justify-center">
                                <span class="text-sm font-cinzel font-bold text-hollow-dark">
                                    {site.initials.as_str()}
                                </span>
                            </div>
                            <span class="font-cinzel text-lg text-hollow-white group-hover:text-hollow-gold transition-colors">
                                {site.brand.as_str()}
                            </span>
                        </a>
                        <p class="text-sm text-hollow-blue-accent/50">{footer.tagline.as_str()}</p>
                    </div>

                    <nav class="flex flex-wrap justify-center gap-6">
                        {site
                            .nav
                            .iter()
                            .map(|link| {
                                let href = link.href.as_str();
                                view! {
                                    <a
                                        href=href
                                        class="text-sm text-hollow-blue-accent/60 hover:text-hollow-gold transition-colors"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_href(href);
                                        }
                                    >
                                        {link.label.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex gap-3">
                        {site
                            .footer_socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=social.label.as_str()
                                        class="w-10 h-10 rounded-full bg-hollow-blue/50 border border-hollow-gold/20 flex items-center justify-center hover:border-hollow-gold/50 hover:bg-hollow-gold/10 transition-all duration-300 group"
                                    >
                                        <i class=format!(
                                            "{} text-hollow-blue-accent/60 group-hover:text-hollow-gold transition-colors",
                                            social.icon,
                                        ) />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="my-8 h-px bg-gradient-to-r from-transparent via-hollow-gold/10 to-transparent" />

                <div class="flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-hollow-blue-accent/40">
                    <p>{footer.motto.as_str()}</p>
                    <p>{format!("© {year} {}", footer.copyright)}</p>
                </div>

                <div class="mt-8 text-center">
                    <p class="text-xs text-hollow-blue-accent/20 italic hover:text-hollow-gold/40 transition-colors duration-1000 cursor-default">
                        {footer.easter_egg.as_str()}
                    </p>
                </div>
            </div>
        </footer>
    }
}
