//! Routing context construction.

use std::rc::Rc;

use crate::context::{BaseContext, NavigableContext, RoutingContext};
use crate::error::RouteResult;
use crate::flatten::flatten_routes;
use crate::history::History;
use crate::options::RoutingOptions;
use crate::report::{DuplicateReporter, TracingReporter};
use crate::route::RouteConfig;

/// Flatten `routes` and wrap them in a routing context.
///
/// With a `history` the context is [`RoutingContext::Navigable`],
/// otherwise [`RoutingContext::Base`]. Duplicate names are logged through
/// `tracing`; use [`RoutingContextBuilder`] to report them elsewhere.
///
/// # Example
///
/// ```rust
/// use turbo_routes::{build_routing_context, RouteConfig, RouteParams, RoutingOptions};
///
/// let routes = vec![RouteConfig::new("product", "/product/:id")];
/// let ctx = build_routing_context(routes, &RoutingOptions::default(), None).unwrap();
///
/// let params = RouteParams::new().with("id", 42);
/// assert_eq!(ctx.get_path("product", Some(&params)).unwrap(), "/product/42");
/// assert!(ctx.as_navigable().is_none());
/// ```
pub fn build_routing_context<T>(
    routes: Vec<RouteConfig<T>>,
    options: &RoutingOptions,
    history: Option<Rc<dyn History>>,
) -> RouteResult<RoutingContext<T>> {
    let mut builder = RoutingContextBuilder::new(routes).options(*options);
    if let Some(history) = history {
        builder = builder.history(history);
    }
    builder.build()
}

/// Builder for a [`RoutingContext`] with an injectable duplicate reporter.
///
/// ```rust
/// use std::rc::Rc;
/// use turbo_routes::{CollectingReporter, History, MemoryHistory, RouteConfig, RoutingContextBuilder};
///
/// let reporter = CollectingReporter::new();
/// let history = Rc::new(MemoryHistory::new("/"));
/// let shared: Rc<dyn History> = history.clone();
///
/// let ctx = RoutingContextBuilder::new(vec![RouteConfig::new("cart", "/cart")])
///     .history(shared)
///     .reporter(&reporter)
///     .build()
///     .unwrap();
///
/// ctx.as_navigable().unwrap().push("cart", None).unwrap();
/// assert_eq!(history.location(), "/cart");
/// ```
pub struct RoutingContextBuilder<'r, T = ()> {
    routes: Vec<RouteConfig<T>>,
    options: RoutingOptions,
    history: Option<Rc<dyn History>>,
    reporter: &'r dyn DuplicateReporter,
}

impl<'r, T> RoutingContextBuilder<'r, T> {
    pub fn new(routes: Vec<RouteConfig<T>>) -> Self {
        Self {
            routes,
            options: RoutingOptions::default(),
            history: None,
            reporter: &TracingReporter,
        }
    }

    /// Set matching options.
    pub fn options(mut self, options: RoutingOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a navigation collaborator.
    pub fn history(mut self, history: Rc<dyn History>) -> Self {
        self.history = Some(history);
        self
    }

    /// Send duplicate route warnings to `reporter`.
    pub fn reporter(mut self, reporter: &'r dyn DuplicateReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Flatten the routes and build the context.
    pub fn build(self) -> RouteResult<RoutingContext<T>> {
        let map = flatten_routes(self.routes, &self.options, self.reporter)?;
        let base = BaseContext::new(map);

        Ok(match self.history {
            Some(history) => RoutingContext::Navigable(NavigableContext::new(base, history)),
            None => RoutingContext::Base(base),
        })
    }
}
