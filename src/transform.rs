//! Functions that extend a route by one segment or parameter.
//!
//! Each function returns a transform, `Fn(&Route) -> Route`, that leaves its
//! input untouched. Transforms can be nested directly, or applied in order
//! with [`Route::apply`]:
//!
//! ```rust
//! use typed_route::{add_optional_parameter, add_parameter, add_segment, create_route};
//!
//! let nested = add_optional_parameter("tab")(
//!     &add_parameter("id")(
//!         &add_segment("users")(&create_route(""))
//!     )
//! );
//!
//! let chained = create_route("")
//!     .apply(add_segment("users"))
//!     .apply(add_parameter("id"))
//!     .apply(add_optional_parameter("tab"));
//!
//! assert_eq!(nested.template(), "/users/:id/:tab?");
//! assert_eq!(nested.template(), chained.template());
//! ```

use crate::component::{Component, ParamKind};
use crate::route::Route;

/// Returns a transform that appends a literal segment.
///
/// The segment is written as given, prefixed with a `/`. It never consumes
/// a value when filling.
pub fn add_segment(name: impl Into<String>) -> impl Fn(&Route) -> Route + Clone + Send + Sync {
    let name = name.into();

    move |route: &Route| {
        let component = Component::Literal(name.clone());
        let filler = route.filler().clone().append(&component.to_string());

        let route = route.extend(component, filler);
        trace!("added segment `{}`: {}", name, route.template());
        route
    }
}

/// Returns a transform that appends a required parameter, rendered as
/// `/:name`.
///
/// Duplicate names are not rejected.
pub fn add_parameter(name: impl Into<String>) -> impl Fn(&Route) -> Route + Clone + Send + Sync {
    let name = name.into();

    move |route: &Route| parameter(route, Component::Required(name.clone()), ParamKind::Required)
}

/// Returns a transform that appends an optional parameter, rendered as
/// `/:name?`.
///
/// When filled with the absent value, the parameter's fragment is left out
/// of the path entirely.
pub fn add_optional_parameter(
    name: impl Into<String>,
) -> impl Fn(&Route) -> Route + Clone + Send + Sync {
    let name = name.into();

    move |route: &Route| parameter(route, Component::Optional(name.clone()), ParamKind::Optional)
}

fn parameter(route: &Route, component: Component, kind: ParamKind) -> Route {
    let filler = route.filler().clone().wrap(component.name(), kind);

    let route = route.extend(component, filler);
    trace!(
        "added {:?} parameter, arity {}: {}",
        kind,
        route.arity(),
        route.template()
    );
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_are_reusable() {
        let users = add_segment("users");
        let a = users(&Route::new());
        let b = users(&crate::create_route("/api"));

        assert_eq!(a.template(), "/users");
        assert_eq!(b.template(), "/api/users");
    }

    #[test]
    fn segment_after_parameter() {
        let route = Route::new()
            .apply(add_parameter("id"))
            .apply(add_segment("edit"));

        assert_eq!(route.template(), "/:id/edit");
        assert_eq!(route.arity(), 1);
        assert_eq!(
            route.filler().with(3).unwrap().into_string().unwrap(),
            "/3/edit"
        );
    }
}
