//! The wallet session: the connected address and the connect/disconnect toggle.

use api::prefs::site_prefs::SiteConfig;

use super::provider::WalletError;
use super::provider::WalletProvider;
use crate::feedback::Notice;

/// Shown in place of an address that is missing or too short to abbreviate.
pub const ADDRESS_PLACEHOLDER: &str = "N/A";

/// Label of a wallet button while disconnected.
pub const LOGIN_LABEL: &str = "Login";

/// Style tag applied to wallet buttons while connected.
pub const CONNECTED_STYLE: &str = "connected";

/// Abbreviates an address to its first and last four characters.
pub fn truncate(address: Option<&str>) -> String {
    let Some(address) = address else {
        return ADDRESS_PLACEHOLDER.to_string();
    };
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 8 {
        return ADDRESS_PLACEHOLDER.to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// What every wallet button shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletDisplay {
    pub label: String,
    pub style: Option<&'static str>,
}

/// Advice given when no wallet provider is installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guidance {
    /// Narrow viewport: probably a phone, where wallets ship an in-app browser.
    OpenInWalletBrowser,
    /// Wide viewport: probably a desktop browser without the extension.
    InstallExtension,
}

impl Guidance {
    pub fn for_viewport(width: Option<f64>, config: &SiteConfig) -> Self {
        match width {
            Some(width) if config.is_mobile_width(width) => Guidance::OpenInWalletBrowser,
            _ => Guidance::InstallExtension,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Guidance::OpenInWalletBrowser => {
                "No wallet found. Open this site inside your wallet app's browser (Phantom, Solflare or Backpack) to connect."
            }
            Guidance::InstallExtension => {
                "No wallet found. Install the Phantom, Solflare or Backpack browser extension, then reload this page."
            }
        }
    }
}

/// The result of one press of a wallet button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(String),
    Disconnected,
    Guided(Guidance),
    Failed(WalletError),
}

impl ConnectOutcome {
    /// The advisory to show the visitor, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ConnectOutcome::Connected(_) | ConnectOutcome::Disconnected => None,
            ConnectOutcome::Guided(guidance) => Some(Notice::info(guidance.message())),
            ConnectOutcome::Failed(_) => Some(Notice::error(
                "Failed to connect wallet. Approve the request in your wallet and try again.",
            )),
        }
    }
}

/// The visitor's wallet connection. Lives only as long as the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletSession {
    address: Option<String>,
}

impl WalletSession {
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn adopt(&mut self, address: String) {
        self.address = Some(address);
    }

    pub fn clear(&mut self) {
        self.address = None;
    }

    /// Label and style for the wallet buttons.
    pub fn display(&self) -> WalletDisplay {
        match self.address() {
            None => WalletDisplay {
                label: LOGIN_LABEL.to_string(),
                style: None,
            },
            Some(address) => WalletDisplay {
                label: truncate(Some(address)),
                style: Some(CONNECTED_STYLE),
            },
        }
    }

    /// Applies the outcome of a toggle. Failures leave the session untouched.
    pub fn apply(&mut self, outcome: &ConnectOutcome) {
        match outcome {
            ConnectOutcome::Connected(address) => self.adopt(address.clone()),
            ConnectOutcome::Disconnected => self.clear(),
            ConnectOutcome::Guided(_) | ConnectOutcome::Failed(_) => {}
        }
    }
}

/// Works out what a press of a wallet button does for `session`.
///
/// Connected sessions disconnect at once without waiting on the provider;
/// the caller tells the provider afterwards with [`release`]. Otherwise the
/// provider is asked to connect, or the visitor is guided to install one. The
/// session itself is not touched; the caller applies the returned outcome.
pub async fn toggle<P: WalletProvider>(
    session: &WalletSession,
    provider: Option<&P>,
    viewport_width: Option<f64>,
    config: &SiteConfig,
) -> ConnectOutcome {
    if session.is_connected() {
        return ConnectOutcome::Disconnected;
    }

    let Some(provider) = provider else {
        return ConnectOutcome::Guided(Guidance::for_viewport(viewport_width, config));
    };

    match provider.connect().await {
        Ok(address) => ConnectOutcome::Connected(address),
        Err(e) => ConnectOutcome::Failed(e),
    }
}

/// Tells the provider the site disconnected. Best effort: failures are logged.
pub async fn release<P: WalletProvider>(provider: &P) {
    if let Err(e) = provider.disconnect().await {
        dioxus_logger::tracing::debug!("provider disconnect failed: {}", e);
    }
}

/// The address of an already-authorized provider, adopted on startup.
pub fn existing_connection<P: WalletProvider>(provider: Option<&P>) -> Option<String> {
    let provider = provider?;
    if !provider.is_connected() {
        return None;
    }
    provider.public_key()
}
