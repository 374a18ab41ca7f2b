//! Page renderer state: the visible page, the fade in flight and nav highlighting.

use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;
use crate::pages::PageId;

/// Which single navigation entry is highlighted. `None` before the first render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveNav(Option<PageId>);

impl ActiveNav {
    /// Marks exactly `page` as active.
    pub fn update(&mut self, page: PageId) {
        self.0 = Some(page);
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.0 == Some(page)
    }
}

/// Identifies one `begin` call; only the latest ticket may settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderTicket(u64);

/// Swaps the visible page behind a short fade.
///
/// A render is split in two: `begin` records the requested page and starts the
/// fade, `settle` performs the swap once the fade delay has passed. Only the
/// most recent `begin` can settle, so rapid renders are last-write-wins and a
/// single page is ever visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRenderer {
    visible: PageId,
    pending: Option<PageId>,
    latest: u64,
    nav: ActiveNav,
}

impl PageRenderer {
    /// Starts rendering `requested`, resolving unknown ids to `home`.
    pub fn begin(&mut self, requested: &str) -> RenderTicket {
        let page = PageId::resolve(requested);
        self.latest += 1;
        self.pending = Some(page);
        self.nav.update(page);
        RenderTicket(self.latest)
    }

    /// Swaps in the pending page if `ticket` is the latest render.
    pub fn settle(&mut self, ticket: RenderTicket) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        match self.pending.take() {
            Some(page) => {
                self.visible = page;
                true
            }
            None => false,
        }
    }

    /// Renders `requested` without a fade.
    pub fn render_now(&mut self, requested: &str) -> PageId {
        let ticket = self.begin(requested);
        self.settle(ticket);
        self.visible
    }

    pub fn visible(&self) -> PageId {
        self.visible
    }

    /// True while a render is waiting for its fade to finish.
    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn nav(&self) -> ActiveNav {
        self.nav
    }
}

/// Renders `requested` with the fade transition, then scrolls to the top.
pub fn navigate(mut renderer: Signal<PageRenderer>, requested: &str, fade_delay: Duration) {
    let ticket = renderer.write().begin(requested);
    dioxus_logger::tracing::debug!("render {} ({:?})", requested, ticket);

    spawn(async move {
        compat::sleep(fade_delay).await;
        if renderer.write().settle(ticket) {
            compat::scroll_to_top();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::registry;
    use strum::IntoEnumIterator;

    fn active_count(renderer: &PageRenderer) -> usize {
        PageId::iter()
            .filter(|page| renderer.nav().is_active(*page))
            .count()
    }

    #[test]
    fn nothing_is_active_before_first_render() {
        let renderer = PageRenderer::default();
        assert_eq!(active_count(&renderer), 0);
    }

    #[test]
    fn render_marks_exactly_one_nav_entry() {
        let mut renderer = PageRenderer::default();
        for page in PageId::iter() {
            renderer.render_now(page.id());
            assert_eq!(active_count(&renderer), 1);
            assert!(renderer.nav().is_active(page));
            assert_eq!(renderer.visible(), page);
        }
    }

    #[test]
    fn update_active_nav_is_idempotent() {
        let mut nav = ActiveNav::default();
        nav.update(PageId::Dex);
        let once = nav;
        nav.update(PageId::Dex);
        assert_eq!(nav, once);
    }

    #[test]
    fn unknown_page_renders_like_home() {
        let mut unknown = PageRenderer::default();
        unknown.render_now("casino");

        let mut home = PageRenderer::default();
        home.render_now("home");

        assert_eq!(unknown, home);
        assert!(std::ptr::eq(
            registry().get(unknown.visible()),
            registry().get(home.visible())
        ));
    }

    #[test]
    fn last_render_wins_when_fades_overlap() {
        let mut renderer = PageRenderer::default();
        let lending = renderer.begin("lending");
        let dex = renderer.begin("dex");

        // The earlier fade finishing first must not show lending.
        assert!(!renderer.settle(lending));
        assert_eq!(renderer.visible(), PageId::Home);
        assert!(renderer.is_fading());

        assert!(renderer.settle(dex));
        assert_eq!(renderer.visible(), PageId::Dex);
        assert!(!renderer.is_fading());
        assert!(renderer.nav().is_active(PageId::Dex));
    }

    #[test]
    fn last_render_wins_in_either_settle_order() {
        let mut renderer = PageRenderer::default();
        let lending = renderer.begin("lending");
        let dex = renderer.begin("dex");

        assert!(renderer.settle(dex));
        assert!(!renderer.settle(lending));
        assert_eq!(renderer.visible(), PageId::Dex);
        assert_eq!(active_count(&renderer), 1);
    }
}
