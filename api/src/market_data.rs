//! Defines traits and implementations for external lending-market data providers.

use crate::asset::asset_icon;
use crate::asset::fallback_assets;
use crate::asset::AssetRecord;
use crate::usd_price::format_rate;
use crate::usd_price::UsdPrice;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur while fetching or decoding market data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("market request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed market document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("market document lists no reserves")]
    NoReserves,
    #[error("reserve {symbol}: field `{field}` is not a usable number")]
    InvalidNumber { symbol: String, field: &'static str },
}

/// A trait for any service that can provide the lending-market asset list.
pub trait MarketDataProvider {
    /// Fetches the latest asset records.
    async fn get_assets(&self) -> Result<Vec<AssetRecord>, MarketDataError>;
}

/// Where the assets of a [`MarketSnapshot`] came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::EnumIs)]
pub enum MarketSource {
    Live,
    /// The fixed fallback set, with the reason live data was not used.
    Fallback { reason: String },
}

/// The asset list the lending page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub assets: Vec<AssetRecord>,
    pub source: MarketSource,
}

impl MarketSnapshot {
    pub fn live(assets: Vec<AssetRecord>) -> Self {
        Self {
            assets,
            source: MarketSource::Live,
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            assets: fallback_assets(),
            source: MarketSource::Fallback {
                reason: reason.into(),
            },
        }
    }
}

/// Asks `provider` for assets, substituting the fallback set on any failure.
///
/// Never fails; callers inspect [`MarketSnapshot::source`] to decide whether to
/// log the fallback.
pub async fn market_snapshot<P: MarketDataProvider>(provider: &P) -> MarketSnapshot {
    match provider.get_assets().await {
        Ok(assets) => MarketSnapshot::live(assets),
        Err(e) => MarketSnapshot::fallback(e.to_string()),
    }
}

/// A JSON value the market API sends either as a number or as a numeric string.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(*n),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
    }

    fn into_display(self) -> String {
        match self {
            Numeric::Number(n) => n.to_string(),
            Numeric::Text(s) => s,
        }
    }
}

/// Provides market data from the public Solend API.
pub mod solend {
    use super::*;

    /// The structure of the JSON document served by Solend's market endpoint.
    #[derive(Deserialize, Debug)]
    struct MarketResponse {
        reserves: Vec<Reserve>,
    }

    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    struct Reserve {
        asset: ReserveAsset,
        rates: ReserveRates,
        total_supply: Option<Numeric>,
        total_borrow: Option<Numeric>,
        utilization_rate: Option<Numeric>,
    }

    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    struct ReserveAsset {
        symbol: String,
        name: String,
        price: Numeric,
        mint_address: Option<String>,
    }

    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    struct ReserveRates {
        supply_interest: Numeric,
        borrow_interest: Numeric,
    }

    impl Reserve {
        fn into_record(self) -> Result<AssetRecord, MarketDataError> {
            let symbol = self.asset.symbol;
            let number = |value: &Numeric, field: &'static str| {
                value.as_f64().ok_or_else(|| MarketDataError::InvalidNumber {
                    symbol: symbol.clone(),
                    field,
                })
            };

            let price = UsdPrice::from_float(number(&self.asset.price, "price")?).ok_or_else(|| {
                MarketDataError::InvalidNumber {
                    symbol: symbol.clone(),
                    field: "price",
                }
            })?;
            let supply = number(&self.rates.supply_interest, "supplyInterest")?;
            let borrow = number(&self.rates.borrow_interest, "borrowInterest")?;
            let utilization = match &self.utilization_rate {
                Some(value) => Some(format_rate(number(value, "utilizationRate")?)),
                None => None,
            };

            Ok(AssetRecord {
                icon: asset_icon(&symbol).to_string(),
                name: self.asset.name,
                supply_apy: format_rate(supply),
                borrow_apy: format_rate(borrow),
                price: price.to_string(),
                mint_address: self.asset.mint_address,
                total_supply: self.total_supply.map(Numeric::into_display),
                total_borrow: self.total_borrow.map(Numeric::into_display),
                utilization_rate: utilization,
                symbol,
            })
        }
    }

    /// Decodes a market document into display records.
    pub fn parse_market(json: &str) -> Result<Vec<AssetRecord>, MarketDataError> {
        let response: MarketResponse = serde_json::from_str(json)?;
        if response.reserves.is_empty() {
            return Err(MarketDataError::NoReserves);
        }
        response
            .reserves
            .into_iter()
            .map(Reserve::into_record)
            .collect()
    }

    /// An implementation of the `MarketDataProvider` trait for Solend.
    pub struct Solend {
        url: String,
    }

    impl Solend {
        pub fn new(url: impl Into<String>) -> Self {
            Self { url: url.into() }
        }
    }

    impl MarketDataProvider for Solend {
        async fn get_assets(&self) -> Result<Vec<AssetRecord>, MarketDataError> {
            let client = reqwest::Client::new();
            let body = client
                .get(&self.url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            parse_market(&body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::solend::parse_market;
    use super::*;

    const SAMPLE: &str = r#"{
        "reserves": [
            {
                "asset": { "symbol": "SOL", "name": "Solana", "price": 24.5, "mintAddress": "So11111111111111111111111111111111111111112" },
                "rates": { "supplyInterest": 0.042, "borrowInterest": "0.068" },
                "totalSupply": "1200345.5",
                "totalBorrow": 800000,
                "utilizationRate": 0.6664
            },
            {
                "asset": { "symbol": "BONK", "name": "Bonk", "price": "0.00002" },
                "rates": { "supplyInterest": "0.1", "borrowInterest": 0.2 }
            }
        ]
    }"#;

    #[test]
    fn parses_reserves_into_records() {
        let assets = parse_market(SAMPLE).unwrap();
        assert_eq!(assets.len(), 2);

        let sol = &assets[0];
        assert_eq!(sol.symbol, "SOL");
        assert_eq!(sol.icon, "◎");
        assert_eq!(sol.price, "$24.50");
        assert_eq!(sol.supply_apy, "4.20%");
        assert_eq!(sol.borrow_apy, "6.80%");
        assert_eq!(sol.total_supply.as_deref(), Some("1200345.5"));
        assert_eq!(sol.total_borrow.as_deref(), Some("800000"));
        assert_eq!(sol.utilization_rate.as_deref(), Some("66.64%"));

        let bonk = &assets[1];
        assert_eq!(bonk.icon, "●");
        assert_eq!(bonk.price, "$0.0000");
        assert!(bonk.mint_address.is_none());
        assert!(bonk.utilization_rate.is_none());
    }

    #[test]
    fn missing_reserves_is_a_parse_error() {
        let err = parse_market(r#"{ "markets": [] }"#).unwrap_err();
        assert!(matches!(err, MarketDataError::Parse(_)));
    }

    #[test]
    fn empty_reserves_is_rejected() {
        let err = parse_market(r#"{ "reserves": [] }"#).unwrap_err();
        assert!(matches!(err, MarketDataError::NoReserves));
    }

    #[test]
    fn non_numeric_price_names_the_field() {
        let json = r#"{ "reserves": [ {
            "asset": { "symbol": "SOL", "name": "Solana", "price": "n/a" },
            "rates": { "supplyInterest": 0.1, "borrowInterest": 0.2 }
        } ] }"#;
        match parse_market(json).unwrap_err() {
            MarketDataError::InvalidNumber { symbol, field } => {
                assert_eq!(symbol, "SOL");
                assert_eq!(field, "price");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn absurd_price_is_rejected() {
        for price in ["1e15", "-3", "\"NaN\""] {
            let json = format!(
                r#"{{ "reserves": [ {{
                    "asset": {{ "symbol": "SOL", "name": "Solana", "price": {price} }},
                    "rates": {{ "supplyInterest": 0.1, "borrowInterest": 0.2 }}
                }} ] }}"#
            );
            assert!(
                matches!(
                    parse_market(&json),
                    Err(MarketDataError::InvalidNumber { field: "price", .. })
                ),
                "price {price} accepted"
            );
        }
    }

    #[tokio::test]
    async fn absurd_price_falls_back_to_fixed_set() {
        struct Huge;

        impl MarketDataProvider for Huge {
            async fn get_assets(&self) -> Result<Vec<AssetRecord>, MarketDataError> {
                parse_market(
                    r#"{ "reserves": [ {
                        "asset": { "symbol": "SOL", "name": "Solana", "price": 1e15 },
                        "rates": { "supplyInterest": 0.1, "borrowInterest": 0.2 }
                    } ] }"#,
                )
            }
        }

        let snapshot = market_snapshot(&Huge).await;
        assert!(snapshot.source.is_fallback());
        assert_eq!(snapshot.assets, fallback_assets());
    }

    struct Canned(&'static str);

    impl MarketDataProvider for Canned {
        async fn get_assets(&self) -> Result<Vec<AssetRecord>, MarketDataError> {
            parse_market(self.0)
        }
    }

    #[tokio::test]
    async fn malformed_document_falls_back_to_fixed_set() {
        let snapshot = market_snapshot(&Canned("{}")).await;
        assert!(snapshot.source.is_fallback());
        assert_eq!(snapshot.assets, fallback_assets());
    }

    #[tokio::test]
    async fn invalid_json_falls_back_to_fixed_set() {
        let snapshot = market_snapshot(&Canned("<html>502</html>")).await;
        assert_eq!(snapshot.assets, fallback_assets());
    }

    #[tokio::test]
    async fn good_document_is_live() {
        let snapshot = market_snapshot(&Canned(SAMPLE)).await;
        assert!(snapshot.source.is_live());
        assert_eq!(snapshot.assets.len(), 2);
    }
}
