//! Routing contexts: name-based path building, lookup, matching and
//! navigation over a flattened [`RouteMap`].

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::error::{RouteError, RouteResult};
use crate::history::History;
use crate::params::RouteParams;
use crate::route::{ExtendedRoute, RouteMap};

/// Build the concrete path of the route registered as `name`.
///
/// Fails with [`RouteError::NotFound`] for unknown names,
/// [`RouteError::MissingPath`] for routes without a path, and
/// [`RouteError::MissingParam`] when a required parameter is absent.
pub fn build_route_path<T>(
    routes: &RouteMap<T>,
    name: &str,
    params: Option<&RouteParams>,
) -> RouteResult<String> {
    let route = routes.get(name).ok_or_else(|| RouteError::not_found(name))?;
    let matcher = route
        .matcher()
        .ok_or_else(|| RouteError::MissingPath(name.to_string()))?;
    matcher.build(params)
}

/// A route matched against a pathname, with the captured parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a, T = ()> {
    pub route: &'a ExtendedRoute<T>,
    pub params: RouteParams,
}

/// Read-only routing context.
#[derive(Debug, Clone)]
pub struct BaseContext<T = ()> {
    routes: RouteMap<T>,
}

impl<T> BaseContext<T> {
    pub fn new(routes: RouteMap<T>) -> Self {
        Self { routes }
    }

    /// Concrete path for the route `name`.
    pub fn get_path(&self, name: &str, params: Option<&RouteParams>) -> RouteResult<String> {
        build_route_path(&self.routes, name, params)
    }

    /// The route registered as `name`.
    pub fn get_route(&self, name: &str) -> RouteResult<&ExtendedRoute<T>> {
        self.routes
            .get(name)
            .ok_or_else(|| RouteError::not_found(name))
    }

    /// First route, in registration order, whose path matches `pathname`.
    pub fn match_path(&self, pathname: &str) -> Option<&ExtendedRoute<T>> {
        self.routes.iter().find(|route| route.is_match(pathname))
    }

    /// Like [`match_path`](Self::match_path), also returning the captured
    /// parameters.
    pub fn resolve(&self, pathname: &str) -> Option<RouteMatch<'_, T>> {
        self.routes.iter().find_map(|route| {
            let params = route.matcher()?.captures(pathname)?;
            Some(RouteMatch { route, params })
        })
    }

    /// The ancestors of `name`, root first.
    pub fn ancestors(&self, name: &str) -> RouteResult<Vec<&ExtendedRoute<T>>> {
        let route = self.get_route(name)?;
        route
            .parents()
            .iter()
            .map(|parent| self.get_route(parent))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The underlying route table.
    pub fn routes(&self) -> &RouteMap<T> {
        &self.routes
    }
}

/// Routing context that can also navigate.
///
/// Dereferences to [`BaseContext`] for the read-only operations.
#[derive(Clone)]
pub struct NavigableContext<T = ()> {
    base: BaseContext<T>,
    history: Rc<dyn History>,
}

impl<T> NavigableContext<T> {
    pub fn new(base: BaseContext<T>, history: Rc<dyn History>) -> Self {
        Self { base, history }
    }

    /// Navigate to `name`, adding a history entry.
    pub fn push(&self, name: &str, params: Option<&RouteParams>) -> RouteResult<()> {
        let path = self.base.get_path(name, params)?;
        tracing::debug!(route = name, path = %path, "push");
        self.history.push(&path);
        Ok(())
    }

    /// Navigate to `name`, replacing the current history entry.
    pub fn replace(&self, name: &str, params: Option<&RouteParams>) -> RouteResult<()> {
        let path = self.base.get_path(name, params)?;
        tracing::debug!(route = name, path = %path, "replace");
        self.history.replace(&path);
        Ok(())
    }

    /// The read-only part of this context.
    pub fn base(&self) -> &BaseContext<T> {
        &self.base
    }
}

impl<T> Deref for NavigableContext<T> {
    type Target = BaseContext<T>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<T: fmt::Debug> fmt::Debug for NavigableContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigableContext")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

/// The context handed to application code.
///
/// Every variant supports the read-only operations (through `Deref`);
/// navigation is only reachable via [`as_navigable`](Self::as_navigable).
#[derive(Debug, Clone)]
pub enum RoutingContext<T = ()> {
    Base(BaseContext<T>),
    Navigable(NavigableContext<T>),
}

impl<T> RoutingContext<T> {
    /// The navigation capability, if a history was supplied.
    pub fn as_navigable(&self) -> Option<&NavigableContext<T>> {
        match self {
            Self::Navigable(ctx) => Some(ctx),
            Self::Base(_) => None,
        }
    }

    pub fn is_navigable(&self) -> bool {
        matches!(self, Self::Navigable(_))
    }

    /// The read-only capability.
    pub fn base(&self) -> &BaseContext<T> {
        match self {
            Self::Base(ctx) => ctx,
            Self::Navigable(ctx) => ctx.base(),
        }
    }
}

impl<T> Deref for RoutingContext<T> {
    type Target = BaseContext<T>;

    fn deref(&self) -> &Self::Target {
        self.base()
    }
}
