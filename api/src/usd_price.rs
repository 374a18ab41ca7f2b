//! Provides a self-contained type for displaying asset prices in US dollars.

use std::fmt;

/// Largest price accepted from a market feed, in dollars.
pub const MAX_PRICE: f64 = 1e12;

/// Prices at or above this many dollars are shown with grouped thousands.
const GROUPING_THRESHOLD: f64 = 1_000.0;

/// How a price is written out, chosen from the unrounded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceBand {
    /// Below one dollar: four decimals.
    SubDollar,
    /// Below one thousand dollars: two decimals.
    Plain,
    /// Two decimals with `,` between groups of three digits.
    Grouped,
}

impl PriceBand {
    fn of(value: f64) -> Self {
        if value < 1.0 {
            PriceBand::SubDollar
        } else if value < GROUPING_THRESHOLD {
            PriceBand::Plain
        } else {
            PriceBand::Grouped
        }
    }

    fn decimals(&self) -> u32 {
        match self {
            PriceBand::SubDollar => 4,
            PriceBand::Plain | PriceBand::Grouped => 2,
        }
    }
}

/// Represents an asset price in US dollars.
///
/// The amount is kept as an unsigned count of the smallest displayed unit
/// (ten-thousandths below one dollar, cents otherwise). The band is picked
/// before rounding, so `0.99996` stays a sub-dollar price ("$1.0000") and
/// `999.996` stays ungrouped ("$1000.00").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsdPrice {
    minor: u64,
    band: PriceBand,
}

impl UsdPrice {
    /// Creates a new `UsdPrice` from a floating-point value, typically from an API.
    ///
    /// Returns `None` for values that are not finite, negative, or above
    /// [`MAX_PRICE`].
    ///
    /// # Examples
    /// ```
    /// use api::usd_price::UsdPrice;
    /// let price = UsdPrice::from_float(0.123456).unwrap();
    /// assert_eq!(price.to_string(), "$0.1235");
    /// assert!(UsdPrice::from_float(f64::NAN).is_none());
    /// ```
    pub fn from_float(value: f64) -> Option<Self> {
        if !value.is_finite() || !(0.0..=MAX_PRICE).contains(&value) {
            return None;
        }

        let band = PriceBand::of(value);
        let multiplier = 10_f64.powi(band.decimals() as i32);
        let minor = (value * multiplier).round() as u64;

        Some(Self { minor, band })
    }
}

/// Inserts `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats the price with a leading `$` (e.g. "$0.0421", "$24.50", "$43,200.00").
impl fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.band.decimals();
        let divisor = 10_u64.pow(decimals);
        let major_units = self.minor / divisor;
        let minor_units = self.minor % divisor;

        let major = match self.band {
            PriceBand::Grouped => group_thousands(&major_units.to_string()),
            PriceBand::SubDollar | PriceBand::Plain => major_units.to_string(),
        };

        write!(
            f,
            "${}.{:0width$}",
            major,
            minor_units,
            width = decimals as usize
        )
    }
}

/// Formats a fractional rate (e.g. `0.0421`) as a percentage with two decimals ("4.21%").
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(value: f64) -> String {
        UsdPrice::from_float(value).unwrap().to_string()
    }

    #[test]
    fn sub_dollar_prices_show_four_decimals() {
        assert_eq!(shown(0.5), "$0.5000");
        assert_eq!(shown(0.123456), "$0.1235");
        assert_eq!(shown(0.0), "$0.0000");
    }

    #[test]
    fn mid_range_prices_show_two_decimals() {
        assert_eq!(shown(1.0), "$1.00");
        assert_eq!(shown(24.5), "$24.50");
        assert_eq!(shown(999.994), "$999.99");
    }

    #[test]
    fn large_prices_are_grouped() {
        assert_eq!(shown(1650.0), "$1,650.00");
        assert_eq!(shown(43200.0), "$43,200.00");
        assert_eq!(shown(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn band_follows_the_unrounded_price() {
        assert_eq!(shown(0.99996), "$1.0000");
        assert_eq!(shown(999.996), "$1000.00");
    }

    #[test]
    fn out_of_range_prices_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.5, -1e30, 1e15] {
            assert!(UsdPrice::from_float(value).is_none(), "{value} accepted");
        }
        assert_eq!(shown(MAX_PRICE), "$1,000,000,000,000.00");
    }

    #[test]
    fn rates_are_percentages() {
        assert_eq!(format_rate(0.042), "4.20%");
        assert_eq!(format_rate(0.1234), "12.34%");
        assert_eq!(format_rate(0.0), "0.00%");
    }
}
