use dioxus::prelude::*;

use crate::hooks::use_wallet::use_wallet;

/// A wallet connect/disconnect button.
///
/// Any number can be on screen at once (the header button and a page's hero
/// button); all of them render from the one shared session.
#[component]
pub fn WalletButton(#[props(default = false)] hero: bool) -> Element {
    let wallet = use_wallet();
    let display = wallet.display();

    let mut class = String::from("wallet-btn");
    if hero {
        class.push_str(" hero-wallet-btn");
    }
    if let Some(style) = display.style {
        class.push(' ');
        class.push_str(style);
    }
    let title = if wallet.is_connected() {
        "Click to disconnect"
    } else {
        "Connect a Solana wallet"
    };

    rsx! {
        button {
            class: "{class}",
            title: "{title}",
            onclick: move |_| wallet.toggle(),
            "{display.label}"
        }
    }
}
