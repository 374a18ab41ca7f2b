use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    /// Fragment identifier of the target element, without the `#`.
    pub target: String,

    #[props(optional)]
    pub class: Option<String>,

    pub children: Element,
}

/// A same-page anchor that scrolls smoothly instead of jumping.
///
/// A target missing from the current page (e.g. swapped out with its page) is
/// skipped silently. Clicking also closes the mobile menu.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let mut menu_open = use_context::<AppStateMut>().menu_open;
    let target = props.target.clone();

    rsx! {
        a {
            href: "#{props.target}",
            class: props.class.clone().unwrap_or_default(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if menu_open() {
                    menu_open.set(false);
                }
                if !compat::scroll_to_element(&target) {
                    dioxus_logger::tracing::debug!("anchor #{} is not on this page", target);
                }
            },
            {props.children}
        }
    }
}
