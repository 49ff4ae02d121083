use serde_json::Value;
use std::collections::HashMap;

/// Application-wide key/value state shared by UI components. The contents
/// are owned by the components themselves; the bootstrap only installs the
/// store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStore {
    values: HashMap<String, Value>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: String,
    pub name: String,
}

/// Route table wired in at bootstrap. Route definitions come from the
/// caller; this layer only carries them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }
}

/// Names of the UI components contributed by the component library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentRegistry {
    components: Vec<String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.components.push(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
