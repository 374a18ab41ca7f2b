//! Display records for the lending-market assets shown on the site.

use serde::Deserialize;
use serde::Serialize;

/// One lending-market asset, already formatted for display.
///
/// The optional fields are only known for live market data; the fallback set
/// leaves them empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub symbol: String,
    pub name: String,
    pub icon: String,
    pub supply_apy: String,
    pub borrow_apy: String,
    pub price: String,
    pub mint_address: Option<String>,
    pub total_supply: Option<String>,
    pub total_borrow: Option<String>,
    pub utilization_rate: Option<String>,
}

impl AssetRecord {
    /// The balance to show for this asset.
    pub fn balance(&self, wallet_connected: bool) -> &'static str {
        placeholder_balance(&self.symbol, wallet_connected)
    }
}

/// Returns the glyph used as an asset's icon, `●` for unknown symbols.
pub fn asset_icon(symbol: &str) -> &'static str {
    match symbol {
        "SOL" | "mSOL" | "stSOL" => "◎",
        "USDC" => "$",
        "ETH" => "Ξ",
        "BTC" => "₿",
        "USDT" => "₮",
        "RAY" => "☀",
        "SRM" => "🌊",
        "FTT" => "🔥",
        _ => "●",
    }
}

/// Placeholder balance for a symbol. Always `0.00` without a connected wallet.
pub fn placeholder_balance(symbol: &str, wallet_connected: bool) -> &'static str {
    if !wallet_connected {
        return "0.00";
    }
    match symbol {
        "SOL" => "12.45",
        "USDC" => "1,250.00",
        "ETH" => "2.18",
        "BTC" => "0.156",
        "USDT" => "500.00",
        _ => "0.00",
    }
}

fn fallback(symbol: &str, name: &str, supply_apy: &str, borrow_apy: &str, price: &str) -> AssetRecord {
    AssetRecord {
        symbol: symbol.to_string(),
        name: name.to_string(),
        icon: asset_icon(symbol).to_string(),
        supply_apy: supply_apy.to_string(),
        borrow_apy: borrow_apy.to_string(),
        price: price.to_string(),
        mint_address: None,
        total_supply: None,
        total_borrow: None,
        utilization_rate: None,
    }
}

/// The fixed asset set shown whenever live market data is unavailable.
pub fn fallback_assets() -> Vec<AssetRecord> {
    vec![
        fallback("SOL", "Solana", "4.2%", "6.8%", "$24.50"),
        fallback("USDC", "USD Coin", "8.1%", "12.3%", "$1.00"),
        fallback("ETH", "Ethereum", "3.8%", "5.9%", "$1,650.00"),
        fallback("BTC", "Bitcoin", "2.1%", "4.5%", "$43,200.00"),
    ]
}
