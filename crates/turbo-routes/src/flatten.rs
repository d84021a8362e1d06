//! Flattening of nested route definitions into a [`RouteMap`].

use crate::compiler::CompiledPath;
use crate::error::{RouteError, RouteResult};
use crate::options::RoutingOptions;
use crate::report::{DuplicateReporter, DuplicateRoute};
use crate::route::{ExtendedRoute, RouteConfig, RouteMap};

/// Flatten a route tree into a name-indexed table.
///
/// Routes are visited depth-first in input order, so the first definition
/// of a name wins; later ones go to `reporter`. Unnamed, pathless routes
/// are transparent: their children are registered with the same parents.
///
/// Fails with [`RouteError::Config`] if a route has a path but no name.
pub fn flatten_routes<T>(
    routes: Vec<RouteConfig<T>>,
    options: &RoutingOptions,
    reporter: &dyn DuplicateReporter,
) -> RouteResult<RouteMap<T>> {
    let mut flattener = Flattener {
        map: RouteMap::new(),
        options,
        reporter,
    };
    let mut parents = Vec::new();
    flattener.visit(routes, &mut parents)?;

    tracing::debug!(routes = flattener.map.len(), "flattened route tree");
    Ok(flattener.map)
}

struct Flattener<'a, T> {
    map: RouteMap<T>,
    options: &'a RoutingOptions,
    reporter: &'a dyn DuplicateReporter,
}

impl<T> Flattener<'_, T> {
    /// Register `routes` under `parents`; returns the names of the named
    /// routes found at this level, looking through transparent groups.
    fn visit(
        &mut self,
        routes: Vec<RouteConfig<T>>,
        parents: &mut Vec<String>,
    ) -> RouteResult<Vec<String>> {
        let mut named = Vec::new();

        for route in routes {
            let RouteConfig {
                name,
                path,
                routes: children,
                extra,
            } = route;

            let Some(name) = name else {
                if let Some(path) = path {
                    return Err(RouteError::Config { path });
                }
                named.extend(self.visit(children, parents)?);
                continue;
            };

            if self.register(name.clone(), path, parents, extra)? {
                named.push(name.clone());
            }

            parents.push(name.clone());
            let child_names = self.visit(children, parents);
            parents.pop();

            let child_names = child_names?;
            if let Some(entry) = self.map.get_mut(&name) {
                entry.children.extend(child_names);
            }
        }

        Ok(named)
    }

    /// Returns `false` if the name was already taken. Ignored duplicates
    /// are not compiled.
    fn register(
        &mut self,
        name: String,
        path: Option<String>,
        parents: &[String],
        extra: T,
    ) -> RouteResult<bool> {
        if let Some(kept) = self.map.get(&name) {
            self.reporter.report(&DuplicateRoute {
                kept_path: kept.path.clone(),
                name,
                ignored_path: path,
            });
            return Ok(false);
        }

        let matcher = path
            .as_deref()
            .map(|p| CompiledPath::compile(p, self.options))
            .transpose()?;

        let route = ExtendedRoute {
            name,
            path,
            parents: parents.to_vec(),
            children: Vec::new(),
            matcher,
            extra,
        };

        Ok(self.map.insert(route).is_ok())
    }
}
