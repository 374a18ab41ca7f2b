use api::asset::AssetRecord;
use dioxus::prelude::*;

use crate::components::pico::Modal;

/// A clickable summary card for one lending-market asset.
#[component]
pub fn AssetCard(asset: AssetRecord, wallet_connected: bool, on_open: EventHandler<AssetRecord>) -> Element {
    let balance = asset.balance(wallet_connected);
    let opened = asset.clone();

    rsx! {
        article {
            class: "asset-card",
            onclick: move |_| on_open.call(opened.clone()),
            div {
                class: "asset-header",
                div { class: "asset-icon", "{asset.icon}" }
                div {
                    div {
                        class: "asset-name",
                        "{asset.name}"
                        span { class: "asset-symbol", "{asset.symbol}" }
                    }
                    div { class: "asset-price", "{asset.price}" }
                }
            }
            div {
                class: "asset-stats",
                div {
                    class: "stat",
                    div { class: "stat-label", "Supply APY" }
                    div { class: "stat-value", "{asset.supply_apy}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-label", "Your Balance" }
                    div { class: "stat-value", "{balance} {asset.symbol}" }
                }
            }
        }
    }
}

/// Modal with everything known about one asset.
#[component]
pub fn AssetDetails(is_open: Signal<bool>, asset: AssetRecord, wallet_connected: bool) -> Element {
    let balance = asset.balance(wallet_connected);
    let not_available = "N/A".to_string();
    let rows = [
        ("Price", asset.price.clone()),
        ("Supply APY", asset.supply_apy.clone()),
        ("Borrow APY", asset.borrow_apy.clone()),
        ("Your Balance", format!("{balance} {}", asset.symbol)),
        ("Utilization", asset.utilization_rate.clone().unwrap_or(not_available.clone())),
        ("Total Supply", asset.total_supply.clone().unwrap_or(not_available.clone())),
        ("Total Borrow", asset.total_borrow.clone().unwrap_or(not_available.clone())),
        ("Mint", asset.mint_address.clone().unwrap_or(not_available)),
    ];

    rsx! {
        Modal {
            is_open,
            title: format!("{} {}", asset.icon, asset.name),
            table {
                tbody {
                    for (label, value) in rows {
                        tr {
                            th { scope: "row", "{label}" }
                            td { code { "{value}" } }
                        }
                    }
                }
            }
        }
    }
}
