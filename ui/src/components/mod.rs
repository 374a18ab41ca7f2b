//! The components module contains all shared components for the site: wallet
//! buttons, anchor links, the copy helper and the Pico.css building blocks.
pub mod anchor_link;
pub mod asset_card;
pub mod contract_panel;
pub mod notice_bar;
pub mod pico;
pub mod wallet_button;
