//! Route definitions and the flattened route table.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::compiler::CompiledPath;
use crate::error::LoadError;
use crate::options::read_file;

/// A user-authored route definition.
///
/// `T` carries application fields (component name, page title, guards)
/// that pass through to the [`ExtendedRoute`] untouched.
///
/// # Example
///
/// ```rust
/// use turbo_routes::RouteConfig;
///
/// let routes = vec![
///     RouteConfig::new("home", "/"),
///     RouteConfig::new("product", "/product/:id")
///         .with_routes(vec![RouteConfig::new("reviews", "/product/:id/reviews")]),
/// ];
/// # assert_eq!(routes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig<T = ()> {
    /// Unique route name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path template (e.g., "/product/:id").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Nested routes.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteConfig<T>>,
    /// Application-defined fields.
    #[serde(flatten)]
    pub extra: T,
}

impl RouteConfig<()> {
    /// A named route with a path.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::from_parts(Some(name.into()), Some(path.into()), ())
    }

    /// A named route without a path of its own.
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_parts(Some(name.into()), None, ())
    }

    /// An unnamed, pathless group. It adds nothing to the route table but
    /// its children are still registered.
    pub fn group(routes: Vec<RouteConfig>) -> Self {
        Self::from_parts(None, None, ()).with_routes(routes)
    }
}

impl<T> RouteConfig<T> {
    /// Build a route from its parts.
    pub fn from_parts(name: Option<String>, path: Option<String>, extra: T) -> Self {
        Self {
            name,
            path,
            routes: Vec::new(),
            extra,
        }
    }

    /// Replace the nested routes.
    pub fn with_routes(mut self, routes: Vec<RouteConfig<T>>) -> Self {
        self.routes = routes;
        self
    }

    /// Append a nested route.
    pub fn route(mut self, route: RouteConfig<T>) -> Self {
        self.routes.push(route);
        self
    }

    /// Attach application data. Nested routes already present get
    /// `U::default()`.
    pub fn with_extra<U: Default>(self, extra: U) -> RouteConfig<U> {
        let mut route = self.map_extra(&mut |_| U::default());
        route.extra = extra;
        route
    }

    /// Convert the application data of this route and all nested routes.
    pub fn map_extra<U>(self, f: &mut impl FnMut(T) -> U) -> RouteConfig<U> {
        let extra = f(self.extra);
        RouteConfig {
            name: self.name,
            path: self.path,
            routes: self.routes.into_iter().map(|r| r.map_extra(&mut *f)).collect(),
            extra,
        }
    }
}

/// Top-level document shape for route trees stored in files.
#[derive(Debug, Deserialize)]
struct RouteTable<T> {
    #[serde(default = "Vec::new")]
    routes: Vec<RouteConfig<T>>,
}

impl<T: DeserializeOwned> RouteConfig<T> {
    /// Parse a route tree from JSON: either an array of routes or an
    /// object with a `routes` array.
    pub fn tree_from_json(content: &str) -> Result<Vec<Self>, LoadError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else {
            let table: RouteTable<T> = serde_json::from_value(value)?;
            Ok(table.routes)
        }
    }

    /// Parse a route tree from TOML `[[routes]]` tables.
    pub fn tree_from_toml(content: &str) -> Result<Vec<Self>, LoadError> {
        let table: RouteTable<T> = toml::from_str(content)?;
        Ok(table.routes)
    }

    /// Load a route tree from a `.json` or TOML file.
    pub fn load_tree(path: &str) -> Result<Vec<Self>, LoadError> {
        let content = read_file(path)?;

        if path.ends_with(".json") {
            Self::tree_from_json(&content)
        } else {
            Self::tree_from_toml(&content)
        }
    }
}

/// A flattened route: the original definition plus its ancestry and
/// compiled matcher.
#[derive(Debug, Clone)]
pub struct ExtendedRoute<T = ()> {
    pub(crate) name: String,
    pub(crate) path: Option<String>,
    pub(crate) parents: Vec<String>,
    pub(crate) children: Vec<String>,
    pub(crate) matcher: Option<CompiledPath>,
    pub(crate) extra: T,
}

impl<T> ExtendedRoute<T> {
    /// Route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path template, if the route has one.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Ancestor route names, root first.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Names of the named routes directly beneath this one.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Compiled matcher; `None` for routes without a path.
    pub fn matcher(&self) -> Option<&CompiledPath> {
        self.matcher.as_ref()
    }

    /// Application-defined data.
    pub fn extra(&self) -> &T {
        &self.extra
    }

    /// Whether this route's matcher accepts `pathname`.
    pub fn is_match(&self, pathname: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(pathname))
    }
}

/// Route name to [`ExtendedRoute`], iterated in registration order.
#[derive(Debug, Clone)]
pub struct RouteMap<T = ()> {
    entries: Vec<ExtendedRoute<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for RouteMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> RouteMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Returns the route back if the name is taken.
    pub(crate) fn insert(&mut self, route: ExtendedRoute<T>) -> Result<(), ExtendedRoute<T>> {
        if self.index.contains_key(&route.name) {
            return Err(route);
        }
        self.index.insert(route.name.clone(), self.entries.len());
        self.entries.push(route);
        Ok(())
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut ExtendedRoute<T>> {
        let idx = *self.index.get(name)?;
        self.entries.get_mut(idx)
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&ExtendedRoute<T>> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate routes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExtendedRoute<T>> {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a RouteMap<T> {
    type Item = &'a ExtendedRoute<T>;
    type IntoIter = std::slice::Iter<'a, ExtendedRoute<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
