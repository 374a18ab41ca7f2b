//=============================================================================
// File: src/screens/page.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::contract_panel::ContractPanel;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::wallet_button::WalletButton;
use crate::pages::Block;
use crate::pages::PageId;
use crate::pages::Section;
use crate::screens::market::MarketAssets;

/// Renders one page of the registry.
///
/// Every page goes through this one component; pages differ only in their
/// registry entry. The hero wallet button is created fresh with the page, so
/// it is always bound to the current session.
#[component]
pub fn PageView(page: PageId) -> Element {
    let content = use_context::<AppState>().registry.get(page);

    rsx! {
        section {
            class: "hero",
            id: "top",
            p { class: "eyebrow", "{content.eyebrow}" }
            h1 { "{content.title}" }
            p { class: "tagline", "{content.tagline}" }
            if content.hero_connect {
                WalletButton { hero: true }
            }
        }
        for section in content.sections.iter() {
            SectionView { key: "{section.anchor}", section }
        }
    }
}

#[component]
fn SectionView(section: &'static Section) -> Element {
    rsx! {
        section {
            id: "{section.anchor}",
            class: "page-section",
            h2 { "{section.heading}" }
            match &section.body {
                Block::Text(text) => rsx! {
                    p { "{text}" }
                },
                Block::Features(features) => rsx! {
                    Grid {
                        for feature in features.iter() {
                            Card {
                                div { class: "feature-icon", "{feature.icon}" }
                                h3 { "{feature.title}" }
                                p { "{feature.text}" }
                            }
                        }
                    }
                },
                Block::Steps(steps) => rsx! {
                    ol {
                        for step in steps.iter() {
                            li { "{step}" }
                        }
                    }
                },
                Block::MarketAssets => rsx! {
                    MarketAssets {}
                },
                Block::ContractAddress => rsx! {
                    ContractPanel {}
                },
            }
        }
    }
}
