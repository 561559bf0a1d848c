use leptos::prelude::*;

use crate::toast::{Toast, ToastKind, ToastQueue, TOAST_LIFETIME};

#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    /// Shows `toast` and schedules its dismissal.
    pub fn push(self, toast: Toast) {
        if let Some(id) = self.0.try_update(|q| q.push(toast)) {
            set_timeout(move || self.dismiss(id), TOAST_LIFETIME);
        }
    }

    pub fn dismiss(self, id: u64) {
        self.0.try_update(|q| q.dismiss(id));
    }
}

pub fn provide_toasts() {
    provide_context(Toasts(RwSignal::new(ToastQueue::default())));
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-3 w-80 max-w-[calc(100vw-2rem)]" aria-live="polite">
            <For
                each=move || toasts.0.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let (icon, title_class) = match toast.kind {
                        ToastKind::Success => ("✓", "text-hollow-gold"),
                        ToastKind::Error => ("!", "text-red-400"),
                    };
                    view! {
                        <div
                            role="status"
                            class="animate-toast-enter cursor-pointer flex gap-3 p-4 rounded-lg bg-hollow-darker border border-hollow-gold/30 shadow-glow"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <span class=format!("font-bold {title_class}")>{icon}</span>
                            <div>
                                <p class=format!("font-cinzel font-bold {title_class}")>
                                    {toast.title}
                                </p>
                                <p class="text-sm text-hollow-blue-accent/80">{toast.description}</p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
