//! The fixed registry of content pages.

/// Identifies one content page.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PageId {
    #[default]
    Home,
    Lending,
    Dex,
    Flywheel,
    Staking,
}

impl PageId {
    /// Resolves a page identifier. Anything unrecognized is `Home`.
    pub fn resolve(id: &str) -> Self {
        id.trim().parse().unwrap_or_default()
    }

    /// The identifier carried by navigation items (e.g. `"lending"`).
    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    /// Helper to get the display name for each page.
    pub fn name(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Lending => "Lending",
            PageId::Dex => "DEX",
            PageId::Flywheel => "Flywheel",
            PageId::Staking => "Staking",
        }
    }
}

/// One headline feature in a feature grid.
#[derive(Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// The body of a page section.
#[derive(Debug, PartialEq, Eq)]
pub enum Block {
    Text(&'static str),
    Features(&'static [Feature]),
    Steps(&'static [&'static str]),
    /// The live lending-market asset grid.
    MarketAssets,
    /// The contract address with its copy button.
    ContractAddress,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    /// Element id targeted by same-page anchor links.
    pub anchor: &'static str,
    pub heading: &'static str,
    pub body: Block,
}

/// The static content fragment of one page.
#[derive(Debug, PartialEq, Eq)]
pub struct PageContent {
    pub id: PageId,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Whether the hero carries its own wallet connect button.
    pub hero_connect: bool,
    pub sections: &'static [Section],
}

/// Immutable mapping from [`PageId`] to its content.
#[derive(Debug)]
pub struct ContentRegistry {
    pages: [PageContent; 5],
}

impl ContentRegistry {
    /// The content for `page`.
    pub fn get(&self, page: PageId) -> &PageContent {
        self.pages
            .iter()
            .find(|content| content.id == page)
            .unwrap_or(&self.pages[0])
    }
}

/// The site's page table.
pub fn registry() -> &'static ContentRegistry {
    &REGISTRY
}

static REGISTRY: ContentRegistry = ContentRegistry {
    pages: [
        PageContent {
            id: PageId::Home,
            eyebrow: "Meme Credit Union",
            title: "Banking for the Degens, by the Degens",
            tagline: "Deposit memes, borrow against vibes, and earn yield in a credit union owned by its members.",
            hero_connect: true,
            sections: &[
                Section {
                    anchor: "about",
                    heading: "What is Meme Credit Union?",
                    body: Block::Text(
                        "A member-owned lending co-op on Solana. Every holder is a member, every member has a vote, and every fee flows back to the treasury that pays the yield.",
                    ),
                },
                Section {
                    anchor: "features",
                    heading: "Why members stay",
                    body: Block::Features(&[
                        Feature {
                            icon: "🏦",
                            title: "Lending",
                            text: "Supply blue chips and stables to earn interest from real borrowers.",
                        },
                        Feature {
                            icon: "🔁",
                            title: "DEX",
                            text: "Swap straight from your member dashboard with routed liquidity.",
                        },
                        Feature {
                            icon: "🌀",
                            title: "Flywheel",
                            text: "Protocol revenue buys back and burns, tightening supply every epoch.",
                        },
                        Feature {
                            icon: "🔒",
                            title: "Staking",
                            text: "Lock tokens to boost your share of fees and your governance weight.",
                        },
                    ]),
                },
                Section {
                    anchor: "contract",
                    heading: "Contract address",
                    body: Block::ContractAddress,
                },
            ],
        },
        PageContent {
            id: PageId::Lending,
            eyebrow: "Lending",
            title: "Put your bags to work",
            tagline: "Supply assets to earn interest or borrow against your collateral. Rates come straight from the market.",
            hero_connect: true,
            sections: &[
                Section {
                    anchor: "markets",
                    heading: "Markets",
                    body: Block::MarketAssets,
                },
                Section {
                    anchor: "how-lending-works",
                    heading: "How it works",
                    body: Block::Steps(&[
                        "Connect your wallet.",
                        "Pick an asset and supply it to the pool.",
                        "Interest accrues every block and is yours to withdraw at any time.",
                    ]),
                },
            ],
        },
        PageContent {
            id: PageId::Dex,
            eyebrow: "DEX",
            title: "Swap without leaving the union",
            tagline: "Routed swaps across Solana liquidity with member fee rebates.",
            hero_connect: false,
            sections: &[
                Section {
                    anchor: "routing",
                    heading: "Best route, every time",
                    body: Block::Text(
                        "Orders are split across pools to minimise price impact. Members pay reduced fees and a share of every swap flows to the treasury.",
                    ),
                },
                Section {
                    anchor: "dex-contract",
                    heading: "Trade the token",
                    body: Block::ContractAddress,
                },
            ],
        },
        PageContent {
            id: PageId::Flywheel,
            eyebrow: "Flywheel",
            title: "Fees in, supply out",
            tagline: "Every swap, loan and liquidation feeds the buyback engine.",
            hero_connect: false,
            sections: &[Section {
                anchor: "cycle",
                heading: "The cycle",
                body: Block::Steps(&[
                    "Borrowers and traders pay fees to the protocol.",
                    "The treasury market-buys the token with those fees.",
                    "Bought tokens are burned, and holders own a larger share of the union.",
                ]),
            }],
        },
        PageContent {
            id: PageId::Staking,
            eyebrow: "Staking",
            title: "Lock in, level up",
            tagline: "Stake to earn a cut of protocol revenue and steer the union's treasury.",
            hero_connect: true,
            sections: &[
                Section {
                    anchor: "tiers",
                    heading: "Reward tiers",
                    body: Block::Features(&[
                        Feature {
                            icon: "🥉",
                            title: "30 days",
                            text: "Base share of fees.",
                        },
                        Feature {
                            icon: "🥈",
                            title: "90 days",
                            text: "1.5x fee share and proposal rights.",
                        },
                        Feature {
                            icon: "🥇",
                            title: "365 days",
                            text: "3x fee share and a seat on the treasury council.",
                        },
                    ]),
                },
                Section {
                    anchor: "governance",
                    heading: "Governance",
                    body: Block::Text(
                        "Staked members vote on listed assets, interest-rate curves and treasury spending. One staked token, one vote.",
                    ),
                },
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_page_has_its_own_entry() {
        for page in PageId::iter() {
            assert_eq!(registry().get(page).id, page);
        }
        assert_eq!(PageId::iter().count(), 5);
    }

    #[test]
    fn identifiers_round_trip_through_resolve() {
        for page in PageId::iter() {
            assert_eq!(PageId::resolve(page.id()), page);
        }
        assert_eq!(PageId::resolve("LENDING"), PageId::Lending);
        assert_eq!(PageId::Dex.id(), "dex");
    }

    #[test]
    fn unknown_identifiers_resolve_to_home() {
        let home = registry().get(PageId::resolve("home"));
        for id in ["", "casino", "home2", "../lending"] {
            assert_eq!(PageId::resolve(id), PageId::Home);
            assert!(std::ptr::eq(registry().get(PageId::resolve(id)), home));
        }
    }

    #[test]
    fn section_anchors_are_unique() {
        let mut anchors: Vec<_> = PageId::iter()
            .flat_map(|page| registry().get(page).sections.iter().map(|s| s.anchor))
            .collect();
        let total = anchors.len();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), total);
    }

    #[test]
    fn lending_shows_the_market() {
        let lending = registry().get(PageId::Lending);
        assert!(lending
            .sections
            .iter()
            .any(|s| s.body == Block::MarketAssets));
    }
}
