use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::feedback::NoticeKind;

/// Shows the current advisory, if any. Non-blocking: the page stays usable.
#[component]
pub fn NoticeBar() -> Element {
    let notice = use_context::<AppStateMut>().notice;
    let current = notice.read().current().clone();

    rsx! {
        if let Some(notice) = current {
            div {
                class: match notice.kind {
                    NoticeKind::Info => "notice notice-info",
                    NoticeKind::Error => "notice notice-error",
                },
                role: "status",
                "aria-live": "polite",
                "{notice.text}"
            }
        }
    }
}
