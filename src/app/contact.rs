use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{reveal::use_reveal, toaster::use_toasts, use_content, SectionBadge};
use crate::contact::{ContactForm, Field, SUBMIT_DELAY};
use crate::nav::Section;
use crate::reveal::{reveal_class, Slide, SECTION_THRESHOLD};
use crate::toast::Toast;

const INPUT_CLASS: &str = "w-full rounded-md px-3 py-2 bg-hollow-blue/50 border border-hollow-gold/20 text-hollow-white placeholder:text-hollow-blue-accent/40 focus:outline-none focus:border-hollow-gold/50 focus:ring-2 focus:ring-hollow-gold/20";

#[component]
pub fn Contact() -> impl IntoView {
    let content = use_content();
    let site = &content.site;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, SECTION_THRESHOLD);
    let form = RwSignal::new(ContactForm::default());
    let toasts = use_toasts();

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if let Some(toast) = form.try_update(ContactForm::complete).flatten() {
                log::debug!("simulated contact submission finished");
                toasts.push(toast);
            }
        },
        SUBMIT_DELAY.as_millis() as f64,
    );

    view! {
        <section node_ref=section_ref id=Section::Contact.id() class="relative py-24 md:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-hollow-blue via-hollow-dark to-hollow-darker" />
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-hollow-gold/30 to-transparent" />
            <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-hollow-blue-light/20 to-transparent" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class=move || {
                    reveal_class("text-center mb-16 transition-all duration-1000", Slide::Up, visible.get())
                }>
                    <SectionBadge label="Contacto" />
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-cinzel font-bold text-hollow-white mb-4">
                        "Envía tu " <span class="gradient-text">"Mensaje"</span>
                    </h2>
                    <p class="text-hollow-blue-accent/70 max-w-2xl mx-auto">
                        "¿Tienes un proyecto en mente o quieres colaborar? Envíame un mensaje y comencemos esta aventura juntos."
                    </p>
                </div>

                <div class="grid lg:grid-cols-5 gap-12 max-w-6xl mx-auto">
                    <div class=move || {
                        reveal_class(
                            "lg:col-span-2 space-y-8 transition-all duration-1000 delay-200",
                            Slide::FromLeft,
                            visible.get(),
                        )
                    }>
                        <div class="space-y-6">
                            {site
                                .contact_info
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a href=item.href.as_str() class="flex items-center gap-4 group">
                                            <div class="w-12 h-12 rounded-lg bg-hollow-blue/50 border border-hollow-gold/20 flex items-center justify-center group-hover:border-hollow-gold/50 group-hover:bg-hollow-gold/10 transition-all duration-300">
                                                <i class=format!(
                                                    "{} text-lg text-hollow-gold/70 group-hover:text-hollow-gold transition-colors",
                                                    item.icon,
                                                ) />
                                            </div>
                                            <div>
                                                <div class="text-sm text-hollow-blue-accent/60">{item.label.as_str()}</div>
                                                <div class="text-hollow-white group-hover:text-hollow-gold transition-colors">
                                                    {item.value.as_str()}
                                                </div>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="pt-8 border-t border-hollow-gold/10">
                            <h4 class="text-sm font-cinzel text-hollow-gold mb-4">"Sígueme"</h4>
                            <div class="flex gap-3">
                                {site
                                    .contact_socials
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href.as_str()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                title=social.label.as_str()
                                                class="w-10 h-10 rounded-lg bg-hollow-blue/50 border border-hollow-gold/20 flex items-center justify-center hover:border-hollow-gold/50 hover:bg-hollow-gold/10 transition-all duration-300 group"
                                            >
                                                <i class=format!(
                                                    "{} text-lg text-hollow-blue-accent/60 group-hover:text-hollow-gold transition-colors",
                                                    social.icon,
                                                ) />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="p-6 rounded-xl bg-hollow-gold/5 border border-hollow-gold/20">
                            <p class="text-sm text-hollow-blue-accent/70 italic">
                                {format!("\"{}\"", site.contact_quote)}
                            </p>
                        </div>
                    </div>

                    <div class=move || {
                        reveal_class(
                            "lg:col-span-3 transition-all duration-1000 delay-400",
                            Slide::FromRight,
                            visible.get(),
                        )
                    }>
                        <form
                            class="space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                match form.try_update(ContactForm::begin) {
                                    Some(Ok(())) => {
                                        log::info!(
                                            "contact form submitted (subject: {})",
                                            form.with_untracked(|f| f.draft.subject.clone())
                                        );
                                        start(());
                                    }
                                    Some(Err(e)) => {
                                        log::warn!("contact form refused: {e}");
                                        toasts.push(Toast::error("No se pudo enviar", e.to_string()));
                                    }
                                    None => {}
                                }
                            }
                        >
                            <div class="grid sm:grid-cols-2 gap-6">
                                <FormInput field=Field::Name kind="text" form />
                                <FormInput field=Field::Email kind="email" form />
                            </div>
                            <FormInput field=Field::Subject kind="text" form />

                            <div class="space-y-2">
                                <label for="contact-message" class="text-sm text-hollow-blue-accent/70">
                                    {Field::Message.label()}
                                </label>
                                <textarea
                                    id="contact-message"
                                    name="message"
                                    rows="6"
                                    required
                                    placeholder=Field::Message.placeholder()
                                    class=format!("{INPUT_CLASS} resize-none")
                                    prop:value=move || form.with(|f| f.draft.message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.draft.set(Field::Message, event_target_value(&ev)))
                                    }
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=move || form.with(ContactForm::is_sending)
                                class="w-full flex justify-center rounded-md bg-hollow-gold/20 border border-hollow-gold/50 text-hollow-gold hover:bg-hollow-gold/30 disabled:opacity-50 disabled:cursor-not-allowed font-cinzel py-4 transition-all duration-300"
                            >
                                {move || {
                                    if form.with(ContactForm::is_sending) {
                                        view! {
                                            <span class="flex items-center gap-2">
                                                <span class="w-4 h-4 border-2 border-hollow-gold/30 border-t-hollow-gold rounded-full animate-spin" />
                                                "Enviando..."
                                            </span>
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <span class="flex items-center gap-2">"➤ Enviar Mensaje"</span>
                                        }
                                        .into_any()
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormInput(field: Field, kind: &'static str, form: RwSignal<ContactForm>) -> impl IntoView {
    let id = format!("contact-{}", kind_id(field));

    view! {
        <div class="space-y-2">
            <label for=id.clone() class="text-sm text-hollow-blue-accent/70">
                {field.label()}
            </label>
            <input
                id=id
                name=kind_id(field)
                type=kind
                required
                placeholder=field.placeholder()
                class=INPUT_CLASS
                prop:value=move || form.with(|f| f.draft.get(field).to_string())
                on:input=move |ev| form.update(|f| f.draft.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

fn kind_id(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Subject => "subject",
        Field::Message => "message",
    }
}
