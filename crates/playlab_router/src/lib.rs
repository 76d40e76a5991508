//! Hash router for the playlab portal.
//!
//! Maps `#/...` URLs to named screens:
//!
//! | Hash | Route |
//! |---|---|
//! | `#/` | `catalogue` |
//! | `#/games/:id` | `game` |
//! | `#/tools/:id` | `tool` |
//! | `#/parcours/:epic` | `parcours` |
//! | `#/parcours/:epic/:slide` | `slide` |
//! | `#/settings` | `settings` |
//!
//! Navigation anomalies (unknown paths, missing handlers, unknown route
//! names) are logged and absorbed, never returned as errors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod location;
mod route;
mod router;

pub use error::RouterError;
pub use location::{HashLocation, MemoryLocation};
pub use route::{
    ROOT_URL, Route, RouteMatch, RouteParams, RouteTable, STANDARD_ROUTES, parse_hash,
    pattern_to_regex,
};
pub use router::{Dispatch, RouteHandler, Router};
