use leptos::prelude::*;

use crate::sections::{self, NAV_ITEMS};

use super::hooks::ScrollSpy;

/// Floating dock of section anchors. Following an anchor changes the location
/// fragment, which is what replays the target section's animations.
#[component]
pub fn Navigation() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<&'static str>);
    let spy = use_context::<ScrollSpy>();
    let active = move || spy.and_then(|s| s.active()).unwrap_or(sections::HOME);

    view! {
        <nav
            class="fixed bottom-4 sm:bottom-6 left-1/2 -translate-x-1/2 z-50"
            aria-label="Sections"
        >
            <div class="flex gap-1 sm:gap-2 p-1.5 sm:p-2 rounded-full bg-background/90 backdrop-blur-md border border-muted/50 shadow-lg">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        view! {
                            <div
                                class="relative"
                                on:mouseenter=move |_| set_hovered.set(Some(item.id))
                                on:mouseleave=move |_| set_hovered.set(None)
                            >
                                <a
                                    href=item.href()
                                    aria-label=item.label
                                    class=move || {
                                        if active() == item.id {
                                            "nav-item is-active"
                                        } else {
                                            "nav-item"
                                        }
                                    }
                                    on:click=move |_| {
                                        if let Some(spy) = spy {
                                            spy.mark(item.id);
                                        }
                                    }
                                >
                                    <i class=item.icon />
                                </a>
                                <Show when=move || hovered.get() == Some(item.id)>
                                    <span class="nav-tooltip">{item.label}</span>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
