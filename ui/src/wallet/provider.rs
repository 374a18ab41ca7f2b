//! The browser-injected wallet provider.
//!
//! `detect()` returns the provider for the current platform. On wasm32 that is
//! the object injected at `window.solana` by Phantom, Solflare or Backpack.
//! Other platforms have no injected provider and `detect()` always returns
//! `None`.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::non_wasm32::*;

use thiserror::Error;

/// An error reported by a wallet provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("connection request was rejected: {0}")]
    Rejected(String),
    #[error("wallet returned no public key")]
    MissingPublicKey,
    #[error("wallet provider does not support `{0}`")]
    Unsupported(&'static str),
}

/// The capability surface of a browser wallet that the session relies on.
pub trait WalletProvider {
    /// Asks the user to authorize the site and returns the public key.
    async fn connect(&self) -> Result<String, WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;

    /// True when the site is already authorized.
    fn is_connected(&self) -> bool;

    fn public_key(&self) -> Option<String>;
}

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use super::WalletError;
    use super::WalletProvider;
    use js_sys::Function;
    use js_sys::Promise;
    use js_sys::Reflect;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    /// The window property wallets inject themselves under.
    const INJECTION_KEY: &str = "solana";

    /// Flags identifying the wallets this site supports.
    const SUPPORTED_FLAGS: [&str; 3] = ["isPhantom", "isSolflare", "isBackpack"];

    pub type BrowserProvider = InjectedProvider;

    /// Wrapper for the browser-injected `window.solana` object.
    pub struct InjectedProvider {
        object: JsValue,
    }

    /// Returns the injected provider, if a supported wallet is installed.
    pub fn detect() -> Option<InjectedProvider> {
        let window = web_sys::window()?;
        let object = Reflect::get(&window, &JsValue::from_str(INJECTION_KEY)).ok()?;
        if object.is_undefined() || object.is_null() {
            return None;
        }

        let provider = InjectedProvider { object };
        SUPPORTED_FLAGS
            .iter()
            .any(|flag| provider.flag(flag))
            .then_some(provider)
    }

    impl InjectedProvider {
        fn property(&self, key: &str) -> JsValue {
            Reflect::get(&self.object, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
        }

        fn flag(&self, key: &str) -> bool {
            self.property(key).as_bool().unwrap_or(false)
        }

        /// Calls a method on the injected object, awaiting it if it returns a promise.
        async fn call_method(&self, method: &'static str) -> Result<JsValue, WalletError> {
            let function = self
                .property(method)
                .dyn_into::<Function>()
                .map_err(|_| WalletError::Unsupported(method))?;

            let result = function
                .call0(&self.object)
                .map_err(|e| WalletError::Rejected(describe(&e)))?;

            match result.dyn_into::<Promise>() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .map_err(|e| WalletError::Rejected(describe(&e))),
                Err(value) => Ok(value),
            }
        }
    }

    /// Renders a public key object (or string) through its `toString`.
    fn key_to_string(key: &JsValue) -> Option<String> {
        if key.is_undefined() || key.is_null() {
            return None;
        }
        if let Some(s) = key.as_string() {
            return Some(s);
        }
        let to_string = Reflect::get(key, &JsValue::from_str("toString"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        to_string.call0(key).ok()?.as_string()
    }

    /// Extracts a readable message from a thrown JS value.
    fn describe(error: &JsValue) -> String {
        error
            .as_string()
            .or_else(|| {
                Reflect::get(error, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{error:?}"))
    }

    impl WalletProvider for InjectedProvider {
        async fn connect(&self) -> Result<String, WalletError> {
            let response = self.call_method("connect").await?;

            // Phantom resolves with `{ publicKey }`; others only update the provider.
            Reflect::get(&response, &JsValue::from_str("publicKey"))
                .ok()
                .and_then(|key| key_to_string(&key))
                .or_else(|| self.public_key())
                .ok_or(WalletError::MissingPublicKey)
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            self.call_method("disconnect").await.map(|_| ())
        }

        fn is_connected(&self) -> bool {
            self.flag("isConnected")
        }

        fn public_key(&self) -> Option<String> {
            key_to_string(&self.property("publicKey"))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm32 {
    use super::WalletError;
    use super::WalletProvider;

    pub type BrowserProvider = NoProvider;

    /// No wallet can be injected outside a browser; this type has no values.
    pub enum NoProvider {}

    pub fn detect() -> Option<NoProvider> {
        None
    }

    impl WalletProvider for NoProvider {
        async fn connect(&self) -> Result<String, WalletError> {
            match *self {}
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            match *self {}
        }

        fn is_connected(&self) -> bool {
            match *self {}
        }

        fn public_key(&self) -> Option<String> {
            match *self {}
        }
    }
}
