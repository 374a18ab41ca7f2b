use api::prefs::site_prefs::SiteConfig;
use std::ops::Deref;
use std::sync::Arc;

use crate::pages::registry;
use crate::pages::ContentRegistry;

#[derive(Debug)]
pub struct AppStateData {
    pub config: SiteConfig,
    pub registry: &'static ContentRegistry,
}

/// The stable, non-reactive state shared by every component.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self(Arc::new(AppStateData {
            config,
            registry: registry(),
        }))
    }
}
