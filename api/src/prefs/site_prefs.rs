use std::str::FromStr;
use std::time::Duration;

/// Default lending-market endpoint.
pub const DEFAULT_MARKET_URL: &str = "https://api.solend.fi/v1/markets/main";

/// Placeholder token mint shown in the contract-address panel.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "MCUmeme7xq2Fh1Vd9ePLzQ4tRkY3bWnJcA8sGuXo5pump";

/// Represents every tunable constant of the site.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SiteConfig {
    /// Endpoint queried for lending-market reserves.
    pub market_url: &'static str,
    /// Interval between market-data refreshes.
    pub market_refresh: Duration,
    /// Viewports at most this wide (logical px) are treated as mobile.
    pub mobile_breakpoint_px: f64,
    /// How long the copy button shows its `Copied` / `Error` label.
    pub copy_feedback: Duration,
    /// How long an advisory notice stays visible.
    pub notice_duration: Duration,
    /// Fade-out time before the content region swaps pages.
    pub fade_delay: Duration,
    /// Address shown and copied by the contract panel.
    pub contract_address: &'static str,
}

impl SiteConfig {
    /// Creates a SiteConfig from build-time environment variables,
    /// with in-code defaults.
    ///
    /// The site runs in a browser, so there is no runtime environment to read.
    /// Overrides are baked in when the bundle is built.
    ///
    /// # Environment Variables
    /// - `MCU_MARKET_URL`: market endpoint.
    /// - `MCU_MARKET_REFRESH_SECS`: refresh interval in whole seconds.
    /// - `MCU_MOBILE_BREAKPOINT_PX`: mobile viewport threshold.
    /// - `MCU_CONTRACT_ADDRESS`: address shown in the contract panel.
    pub fn from_build_env() -> Self {
        let market_refresh_secs = parse_or(option_env!("MCU_MARKET_REFRESH_SECS"), 30u64);

        Self {
            market_url: non_empty_or(option_env!("MCU_MARKET_URL"), DEFAULT_MARKET_URL),
            market_refresh: Duration::from_secs(market_refresh_secs.max(1)),
            mobile_breakpoint_px: parse_or(option_env!("MCU_MOBILE_BREAKPOINT_PX"), 768.0),
            copy_feedback: Duration::from_secs(2),
            notice_duration: Duration::from_secs(5),
            fade_delay: Duration::from_millis(150),
            contract_address: non_empty_or(
                option_env!("MCU_CONTRACT_ADDRESS"),
                DEFAULT_CONTRACT_ADDRESS,
            ),
        }
    }

    /// True when a viewport of `width` logical pixels counts as mobile.
    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.mobile_breakpoint_px
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Parses an optional override, falling back to `default` when it is absent or invalid.
fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn non_empty_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_parse_or_fall_back() {
        assert_eq!(parse_or(Some("45"), 30u64), 45);
        assert_eq!(parse_or(Some(" 600 "), 768.0), 600.0);
        assert_eq!(parse_or(Some("wide"), 768.0), 768.0);
        assert_eq!(parse_or::<u64>(None, 30), 30);
    }

    #[test]
    fn blank_strings_use_default() {
        assert_eq!(non_empty_or(Some("  "), "x"), "x");
        assert_eq!(non_empty_or(None, "x"), "x");
        assert_eq!(non_empty_or(Some("y"), "x"), "y");
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let config = SiteConfig {
            mobile_breakpoint_px: 768.0,
            ..SiteConfig::default()
        };
        assert!(config.is_mobile_width(768.0));
        assert!(config.is_mobile_width(375.0));
        assert!(!config.is_mobile_width(769.0));
    }

    #[test]
    fn fixed_windows() {
        let config = SiteConfig::default();
        assert_eq!(config.copy_feedback, Duration::from_secs(2));
        assert!(config.market_refresh >= Duration::from_secs(1));
    }
}
