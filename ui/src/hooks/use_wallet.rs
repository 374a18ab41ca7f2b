use api::prefs::site_prefs::SiteConfig;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::feedback;
use crate::feedback::Notice;
use crate::feedback::Transient;
use crate::wallet::provider;
use crate::wallet::provider::BrowserProvider;
use crate::wallet::session;
use crate::wallet::session::ConnectOutcome;
use crate::wallet::session::WalletDisplay;
use crate::wallet::session::WalletSession;

/// Binds wallet buttons to the shared session.
#[derive(Clone, Copy)]
pub struct WalletHandle {
    session: Signal<WalletSession>,
    notice: Signal<Transient<Option<Notice>>>,
    config: SiteConfig,
}

impl WalletHandle {
    /// Label and style for a wallet button. Subscribes the caller to the session.
    pub fn display(&self) -> WalletDisplay {
        self.session.read().display()
    }

    pub fn is_connected(&self) -> bool {
        self.session.read().is_connected()
    }

    /// Connects, or disconnects when already connected.
    ///
    /// Runs in the background; every wallet button repaints once the outcome
    /// is applied.
    pub fn toggle(&self) {
        let handle = *self;
        spawn(async move {
            handle.run_toggle().await;
        });
    }

    async fn run_toggle(mut self) {
        let snapshot = self.session.peek().clone();
        let provider = provider::detect();
        let outcome = session::toggle::<BrowserProvider>(
            &snapshot,
            provider.as_ref(),
            compat::viewport_width(),
            &self.config,
        )
        .await;

        match &outcome {
            ConnectOutcome::Connected(address) => {
                dioxus_logger::tracing::info!("wallet connected: {}", address)
            }
            ConnectOutcome::Disconnected => dioxus_logger::tracing::info!("wallet disconnected"),
            ConnectOutcome::Guided(guidance) => {
                dioxus_logger::tracing::info!("no wallet provider: {:?}", guidance)
            }
            ConnectOutcome::Failed(e) => {
                dioxus_logger::tracing::warn!("wallet connection failed: {}", e)
            }
        }

        if let Some(notice) = outcome.notice() {
            feedback::flash(self.notice, Some(notice), self.config.notice_duration);
        }
        self.session.write().apply(&outcome);

        if outcome == ConnectOutcome::Disconnected {
            if let Some(provider) = provider {
                spawn(async move {
                    session::release(&provider).await;
                });
            }
        }
    }

    /// Adopts an already-authorized provider connection without prompting.
    pub fn check_existing(&self) {
        let mut session = self.session;
        let provider = provider::detect();
        if let Some(address) = session::existing_connection::<BrowserProvider>(provider.as_ref()) {
            dioxus_logger::tracing::info!("adopting existing wallet connection: {}", address);
            session.write().adopt(address);
        }
    }
}

pub fn use_wallet() -> WalletHandle {
    let state = use_context::<AppStateMut>();
    let config = use_context::<AppState>().config;
    WalletHandle {
        session: state.wallet,
        notice: state.notice,
        config,
    }
}
