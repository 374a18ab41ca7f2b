//! Defines the mutable, reactive state for the application's UI.

use api::market_data::MarketSnapshot;
use dioxus::prelude::*;

use crate::feedback::Notice;
use crate::feedback::Transient;
use crate::renderer::PageRenderer;
use crate::wallet::session::WalletSession;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This is the single view binding of the app: it is built once by the root
/// component and every component reaches the session, the renderer and the
/// feedback channels through it rather than through ambient globals.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The visitor's wallet connection. Every wallet button renders from it.
    pub wallet: Signal<WalletSession>,
    /// The visible page, the fade in flight and the highlighted nav entry.
    pub renderer: Signal<PageRenderer>,
    /// The latest lending-market snapshot. `None` while loading.
    pub market: Signal<Option<MarketSnapshot>>,
    /// The advisory currently shown in the notice bar.
    pub notice: Signal<Transient<Option<Notice>>>,
    /// Whether the slide-out mobile menu is open.
    pub menu_open: Signal<bool>,
}
