//! This crate contains the platform-independent domain of the site: asset
//! records, market-data providers, price formatting and site configuration.

pub mod asset;
pub mod market_data;
pub mod prefs;
pub mod usd_price;

use market_data::solend::Solend;
use market_data::MarketSnapshot;
use prefs::site_prefs::SiteConfig;

/// Retrieves the lending-market snapshot from the configured endpoint.
///
/// Falls back to the fixed asset set on any failure; the returned snapshot
/// records which source was used.
pub async fn market_assets(config: &SiteConfig) -> MarketSnapshot {
    let provider = Solend::new(config.market_url);
    let snapshot = market_data::market_snapshot(&provider).await;

    dioxus_logger::tracing::debug!(
        "market snapshot from {}: {} assets",
        config.market_url,
        snapshot.assets.len()
    );

    snapshot
}
