//! Route templates that know how to fill themselves.
//!
//! A [`Route`] is built one piece at a time from literal segments, required
//! parameters and optional parameters. Alongside the template, each route
//! carries a [`Filler`] whose call shape always matches the parameters that
//! were declared, so values can't be misordered or forgotten.
//!
//! ```rust
//! use typed_route::RouteBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let route = RouteBuilder::new()
//!     .segment("articles")
//!     .parameter("article_id")
//!     .optional_parameter("as_user")
//!     .build();
//!
//! assert_eq!(route.template(), "/articles/:article_id/:as_user?");
//!
//! // All at once, in declaration order.
//! assert_eq!(route.fill_all([Some("34"), None])?, "/articles/34");
//!
//! // Curried, in reverse declaration order.
//! let path = route.filler().with("admin")?.with(34)?.into_string()?;
//! assert_eq!(path, "/articles/34/admin");
//! # Ok(())
//! # }
//! ```
//!
//! Templates use the following syntax:
//!
//! ```ignore
//!  Syntax    Type
//!  /name     literal segment
//!  /:name    required parameter
//!  /:name?   optional parameter
//! ```
//!
//! Routes can also be composed from plain functions, see [`add_segment`],
//! [`add_parameter`] and [`add_optional_parameter`]. Every transform returns
//! a new route, so a route can be shared and extended in several directions.
//!
//! Filling performs no percent-encoding; values are inserted verbatim.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod builder;
mod component;
mod error;
mod fill;
mod params;
mod route;
mod transform;

pub use builder::RouteBuilder;
pub use component::{Component, ParamKind};
pub use error::FillError;
pub use fill::{Filler, Pending};
pub use params::{Params, ParamsIter};
pub use route::{create_route, Route};
pub use transform::{add_optional_parameter, add_parameter, add_segment};
