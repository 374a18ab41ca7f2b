//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::copy::copy_with_feedback;
use crate::copy::CopyLabel;
use crate::feedback::Transient;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let variant = match props.button_type {
        ButtonType::Primary => "",
        ButtonType::Secondary => "secondary",
    };
    let outline = if props.outline { "outline" } else { "" };
    let class_str = format!("{variant} {outline}");

    rsx! {
        button {
            class: "{class_str.trim()}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}

/// Copies `text_to_copy` and flashes `Copied` or `Error` on its own label.
#[component]
pub fn CopyButton(text_to_copy: String) -> Element {
    let window = use_context::<AppState>().config.copy_feedback;
    let label = use_signal(|| Transient::new(CopyLabel::default()));

    rsx! {
        button {
            class: "secondary outline copy-btn",
            onclick: move |_| copy_with_feedback(label, &text_to_copy, window),
            "{label.read().current().text()}"
        }
    }
}
