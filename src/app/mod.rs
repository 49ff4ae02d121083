mod locale;
mod plugins;

pub use locale::{Locale, en_us, zh_cn};
pub use plugins::{ComponentRegistry, Route, Router, StateStore};

use crate::{Error, Result};
use tracing::info;

/// Staged application wiring. Each step consumes the builder and returns it
/// with one more collaborator installed, so initialization order and failure
/// points stay visible. The builder is the "not started" state; the mounted
/// [`App`] is terminal and there is no transition back.
#[derive(Debug, Default)]
pub struct AppBuilder {
    store: Option<StateStore>,
    router: Option<Router>,
    components: Option<ComponentRegistry>,
    locale: Option<Locale>,
}

impl AppBuilder {
    pub fn with_store(mut self, store: StateStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn with_components(mut self, components: ComponentRegistry) -> Self {
        self.components = Some(components);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Attaches the application to the named anchor. A locale must have been
    /// installed; store, router, and component registry default to empty.
    /// Runs once; any failure here terminates startup.
    pub fn mount(self, anchor: &str) -> Result<App> {
        if anchor.is_empty() {
            return Err(Error::bootstrap("Mount anchor must not be empty"));
        }

        let locale = self
            .locale
            .ok_or_else(|| Error::bootstrap("No locale installed"))?;

        let app = App {
            store: self.store.unwrap_or_default(),
            router: self.router.unwrap_or_default(),
            components: self.components.unwrap_or_default(),
            locale,
            anchor: anchor.to_string(),
        };

        info!("Application mounted to {}", app.anchor);

        Ok(app)
    }
}

/// A mounted application. Holds the installed collaborators and the locale
/// pack; components receive the locale from here instead of reading global
/// configuration.
#[derive(Debug)]
pub struct App {
    store: StateStore,
    router: Router,
    components: ComponentRegistry,
    locale: Locale,
    anchor: String,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }
}
