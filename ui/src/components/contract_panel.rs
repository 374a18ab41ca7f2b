use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::pico::CopyButton;

/// The contract address with its copy button.
#[component]
pub fn ContractPanel() -> Element {
    let address = use_context::<AppState>().config.contract_address;

    rsx! {
        div {
            class: "contract-panel",
            code {
                class: "contract-address",
                title: "{address}",
                "{address}"
            }
            CopyButton { text_to_copy: address.to_string() }
        }
    }
}
