//! Performance impact pill with hover tooltip

use leptos::prelude::*;

use crate::components::tooltip::Tooltip;
use crate::pill::{Pill, PillId, PillView};

/// Badge for a query's performance impact.
///
/// Known impacts (other than Denylisted) open a tooltip explaining the
/// label on hover or focus. Anything else renders as a plain badge.
#[component]
pub fn PillCell(
    #[prop(into)] label: String,
    /// Row identifier; a random one is generated when absent
    #[prop(optional, into)]
    id: Option<PillId>,
    /// Replaces the default `pill` prefix of the attachment key
    #[prop(optional, into)]
    custom_id_prefix: Option<String>,
    /// Set on a single host's page to word the copy for that host
    #[prop(optional)]
    host_details: bool,
) -> impl IntoView {
    let mut pill = Pill::new(label, id).with_host_details(host_details);
    if let Some(prefix) = custom_id_prefix {
        pill = pill.with_id_prefix(prefix);
    }
    let PillView {
        label,
        class_name,
        tooltip_class,
        tooltip_enabled: enabled,
        tooltip_lines,
        attachment_key,
    } = pill.render();

    let (visible, set_visible) = signal(false);
    let show = move || {
        if enabled {
            set_visible.set(true);
        }
    };
    let hide = move || set_visible.set(false);

    let lines = tooltip_lines
        .into_iter()
        .map(|line| view! { <span style="display: block;">{line}</span> })
        .collect::<Vec<_>>();

    view! {
        <div style="position: relative; display: inline-block;">
            <span
                data-tip=""
                data-for=attachment_key.clone()
                data-tip-disable=(!enabled).to_string()
                aria-describedby=enabled.then(|| attachment_key.clone())
                tabindex=enabled.then_some("0")
                on:mouseenter=move |_| show()
                on:mouseleave=move |_| hide()
                on:focus=move |_| show()
                on:blur=move |_| hide()
            >
                <span class=class_name>{label}</span>
            </span>
            <Tooltip id=attachment_key visible=visible>
                <span class=tooltip_class>{lines}</span>
            </Tooltip>
        </div>
    }
}
