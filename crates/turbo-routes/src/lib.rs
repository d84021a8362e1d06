//! Named routes for TurboCommerce, on top of Leptos Router.
//!
//! Routes are declared once as a tree of named [`RouteConfig`]s. Application
//! code then refers to them by name instead of hard-coding path strings:
//!
//! ```text
//! home      /
//! account   /account
//! ├── orders  /account/orders
//! └── order   /account/orders/:id
//! blog      /blog/:slug?
//! ```
//!
//! # Usage
//!
//! ```rust
//! use turbo_routes::prelude::*;
//!
//! let routes = vec![
//!     RouteConfig::new("home", "/"),
//!     RouteConfig::new("account", "/account").with_routes(vec![
//!         RouteConfig::new("orders", "/account/orders"),
//!         RouteConfig::new("order", "/account/orders/:id"),
//!     ]),
//!     RouteConfig::new("blog", "/blog/:slug?"),
//! ];
//!
//! let ctx = build_routing_context(routes, &RoutingOptions::default(), None).unwrap();
//!
//! let params = RouteParams::new().with("id", 1001);
//! assert_eq!(ctx.get_path("order", Some(&params)).unwrap(), "/account/orders/1001");
//! assert_eq!(ctx.get_path("blog", None).unwrap(), "/blog");
//! assert_eq!(ctx.get_route("order").unwrap().parents(), &["account".to_string()]);
//! assert_eq!(ctx.match_path("/account/orders/").unwrap().name(), "orders");
//! ```
//!
//! Passing a [`History`] makes the context navigable:
//!
//! ```rust,ignore
//! use leptos_router::hooks::use_navigate;
//!
//! let history: Rc<dyn History> = Rc::new(LeptosNavigator::new(use_navigate()));
//! let ctx = build_routing_context(routes, &RoutingOptions::default(), Some(history))?;
//! ctx.as_navigable().unwrap().push("order", Some(&params))?;
//! ```

pub mod prelude;
mod compiler;
mod context;
mod error;
mod factory;
mod flatten;
mod history;
mod options;
mod params;
mod report;
mod route;

pub use compiler::*;
pub use context::*;
pub use error::*;
pub use factory::*;
pub use flatten::*;
pub use history::*;
pub use options::*;
pub use params::*;
pub use report::*;
pub use route::*;

// Re-export leptos_router essentials
pub use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_navigate, use_params, use_params_map, use_query, use_query_map},
    path, NavigateOptions, ParamSegment, StaticSegment, WildcardSegment,
};
