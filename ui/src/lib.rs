// The client-side Dioxus application logic.

use dioxus::prelude::*;
use strum::IntoEnumIterator;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod copy;
pub mod feedback;
pub mod hooks;
pub mod pages;
pub mod renderer;
mod screens;
pub mod wallet;

use api::market_data::MarketSource;
use api::prefs::site_prefs::SiteConfig;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::anchor_link::AnchorLink;
use components::notice_bar::NoticeBar;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use components::wallet_button::WalletButton;
use feedback::Transient;
use hooks::use_wallet::use_wallet;
use pages::PageId;
use renderer::PageRenderer;
use screens::page::PageView;
use wallet::session::WalletSession;

/// The desktop navigation tabs component.
#[component]
fn Tabs() -> Element {
    let state = use_context::<AppStateMut>();
    let fade_delay = use_context::<AppState>().config.fade_delay;
    let nav = state.renderer.read().nav();

    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for page in PageId::iter() {
                    li {
                        a {
                            href: "#",
                            "data-page": page.id(),
                            class: if nav.is_active(page) { "active-tab" } else { "" },
                            "aria-current": if nav.is_active(page) { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                renderer::navigate(state.renderer, page.id(), fade_delay);
                            },
                            "{page.name()}"
                        }
                    }
                }
            }
        }
    }
}

/// The mobile slide-out menu component.
#[component]
fn HamburgerMenu() -> Element {
    let state = use_context::<AppStateMut>();
    let fade_delay = use_context::<AppState>().config.fade_delay;
    let mut is_open = state.menu_open;
    let nav = state.renderer.read().nav();

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for page in PageId::iter() {
                        a {
                            class: if nav.is_active(page) { "custom-dropdown-item active-tab" } else { "custom-dropdown-item" },
                            href: "#",
                            "data-page": page.id(),
                            onclick: move |event| {
                                event.prevent_default();
                                renderer::navigate(state.renderer, page.id(), fade_delay);
                                is_open.set(false);
                            },
                            "{page.name()}"
                        }
                    }
                    hr {}
                    AnchorLink {
                        target: "about",
                        class: "custom-dropdown-item",
                        "About"
                    }
                    AnchorLink {
                        target: "contract",
                        class: "custom-dropdown-item",
                        "Contract"
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        scroll-behavior: smooth;
    }

    /* --- HEADER --- */
    .site-header {
        position: sticky;
        top: 0;
        z-index: 100;
        background-color: var(--pico-background-color);
        border-bottom: 1px solid var(--pico-muted-border-color);
        padding: 0 1rem;
    }
    .brand { font-weight: 800; font-size: 1.25rem; margin: 0; }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- WALLET BUTTONS --- */
    .wallet-btn { margin: 0; white-space: nowrap; }
    .wallet-btn.connected {
        background-color: var(--pico-ins-color);
        border-color: var(--pico-ins-color);
        font-family: var(--pico-font-family-monospace);
    }
    .hero-wallet-btn { margin-top: 1rem; font-size: 1.15rem; }

    /* --- CONTENT --- */
    .content { transition: opacity 150ms ease; }
    .content.fading { opacity: 0; }
    .hero { padding: 4rem 0 2rem 0; text-align: center; }
    .eyebrow { text-transform: uppercase; letter-spacing: 0.1em; color: var(--pico-primary); }
    .tagline { max-width: 40rem; margin: 0 auto; color: var(--pico-muted-color); }
    .page-section { padding: 2rem 0; }
    .feature-icon { font-size: 2rem; }

    /* --- CONTRACT --- */
    .contract-panel { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
    .contract-address { word-break: break-all; }
    .copy-btn { margin: 0; min-width: 6rem; }

    /* --- MARKETS --- */
    .assets-grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
    .asset-card { cursor: pointer; margin: 0; }
    .asset-header { display: flex; gap: 0.75rem; align-items: center; }
    .asset-icon { font-size: 2rem; width: 2.5rem; text-align: center; }
    .asset-symbol { margin-left: 0.5rem; color: var(--pico-muted-color); font-size: 0.85em; }
    .asset-stats { display: flex; justify-content: space-between; margin-top: 1rem; }
    .stat-label { font-size: 0.8em; color: var(--pico-muted-color); }

    /* --- NOTICES --- */
    .notice { position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 200;
              max-width: 32rem; padding: 0.75rem 1rem; border-radius: var(--pico-border-radius); }
    .notice-info { background-color: var(--pico-card-background-color); border: 1px solid var(--pico-primary); }
    .notice-error { background-color: var(--pico-del-color); color: white; }

    /* --- MOBILE MENU --- */
    .hamburger-menu-container { display: none; position: relative; }
    .menu-backdrop { position: fixed; inset: 0; z-index: 150; }
    .custom-dropdown-menu { position: absolute; right: 0; z-index: 160; min-width: 12rem; }
    .custom-dropdown-item { display: block; padding: 0.5rem 1rem; }
    .custom-dropdown-item.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(1rem - 4px);
    }
    @media (max-width: 768px) {
        .tab-menu, .header-anchors { display: none; }
        .hamburger-menu-container { display: block; }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Meme Credit Union" }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        LoadedApp {
            app_state: AppState::new(SiteConfig::default()),
        }
    }
}

/// This component owns all site state and lays out the page.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());
    let config = app_state.config;

    // Create signals for mutable state at the top level of the component.
    let wallet_signal = use_signal(WalletSession::default);
    let renderer_signal = use_signal(|| {
        let mut renderer = PageRenderer::default();
        renderer.render_now(PageId::default().id());
        renderer
    });
    let market_signal = use_signal(|| None);
    let notice_signal = use_signal(|| Transient::new(None));
    let menu_signal = use_signal(|| false);

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        wallet: wallet_signal,
        renderer: renderer_signal,
        market: market_signal,
        notice: notice_signal,
        menu_open: menu_signal,
    });
    let mut app_state_mut = use_context::<AppStateMut>();

    // Adopt a wallet that already authorized this site, once, on startup.
    let wallet = use_wallet();
    use_effect(move || wallet.check_existing());

    let market_resource = use_resource(move || async move { api::market_assets(&config).await });

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = market_resource;
        async move {
            loop {
                compat::sleep(config.market_refresh).await;
                res.restart();
            }
        }
    });

    use_effect(move || {
        if let Some(snapshot) = market_resource.read().as_ref() {
            if let MarketSource::Fallback { reason } = &snapshot.source {
                dioxus_logger::tracing::warn!("using fallback market data: {}", reason);
            }
            // This check prevents needless re-renders when a refresh returns the same data.
            if app_state_mut.market.peek().as_ref() != Some(snapshot) {
                app_state_mut.market.set(Some(snapshot.clone()));
            }
        }
    });

    let renderer = app_state_mut.renderer.read().clone();
    let content_class = if renderer.is_fading() {
        "content fading"
    } else {
        "content"
    };

    rsx! {
        header {
            class: "site-header",
            nav {
                ul {
                    li {
                        p { class: "brand", "Meme Credit Union" }
                    }
                }
                ul {
                    li {
                        Tabs {}
                    }
                }
                ul {
                    class: "header-anchors",
                    li {
                        AnchorLink { target: "about", "About" }
                    }
                    li {
                        AnchorLink { target: "contract", "Contract" }
                    }
                }
                ul {
                    li {
                        WalletButton {}
                    }
                    li {
                        HamburgerMenu {}
                    }
                }
            }
        }
        Container {
            div {
                class: "{content_class}",
                PageView {
                    key: "{renderer.visible().id()}",
                    page: renderer.visible(),
                }
            }
        }
        footer {
            class: "container",
            small { "Meme Credit Union is a meme. Nothing here is financial advice." }
        }
        NoticeBar {}
    }
}
