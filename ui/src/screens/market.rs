//=============================================================================
// File: src/screens/market.rs
//=============================================================================
use api::asset::AssetRecord;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::asset_card::AssetCard;
use crate::components::asset_card::AssetDetails;

/// The lending-market asset grid.
#[component]
pub fn MarketAssets() -> Element {
    let state = use_context::<AppStateMut>();
    let wallet_connected = state.wallet.read().is_connected();
    let mut is_modal_open = use_signal(|| false);
    let mut selected = use_signal::<Option<AssetRecord>>(|| None);

    let snapshot = state.market.read().clone();

    rsx! {
        match snapshot {
            None => rsx! {
                div {
                    class: "assets-grid",
                    div { class: "loading", "Loading Solend market data..." }
                    progress {}
                }
            },
            Some(snapshot) => rsx! {
                div {
                    class: "assets-grid",
                    for asset in snapshot.assets {
                        AssetCard {
                            key: "{asset.symbol}",
                            asset: asset.clone(),
                            wallet_connected,
                            on_open: move |asset: AssetRecord| {
                                selected.set(Some(asset));
                                is_modal_open.set(true);
                            },
                        }
                    }
                }
            },
        }
        if let Some(asset) = selected() {
            AssetDetails {
                is_open: is_modal_open,
                asset,
                wallet_connected,
            }
        }
    }
}
