//! Tooltip overlay component

use leptos::prelude::*;

/// Background of the tooltip overlay
pub const TOOLTIP_BACKGROUND: &str = "#3e4771";

/// Overlay placed below its trigger, linked to it through `id`.
///
/// The trigger owns the `visible` signal; the overlay only renders it.
#[component]
pub fn Tooltip(
    /// Attachment key shared with the trigger's `data-for`
    #[prop(into)]
    id: String,
    #[prop(into)] visible: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let style = move || {
        format!(
            "position: absolute; top: 100%; left: 50%; transform: translateX(-50%); \
             margin-top: 0.5rem; z-index: 10; padding: 0.5rem 0.75rem; \
             border-radius: 0.25rem; font-size: 0.8em; white-space: nowrap; \
             color: #fff; background-color: {}; display: {};",
            TOOLTIP_BACKGROUND,
            if visible.get() { "block" } else { "none" }
        )
    };

    view! {
        <div
            id=id
            role="tooltip"
            class="data-table__tooltip data-table__tooltip--bottom"
            aria-hidden=move || (!visible.get()).to_string()
            style=style
        >
            {children()}
        </div>
    }
}
