//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use turbo_routes::prelude::*;
//! ```

pub use crate::{
    build_routing_context, BaseContext, ExtendedRoute, History, LeptosNavigator, MemoryHistory,
    NavigableContext, RouteConfig, RouteError, RouteMap, RouteParams, RouteResult,
    RoutingContext, RoutingContextBuilder, RoutingOptions,
};
