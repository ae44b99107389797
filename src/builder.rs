use crate::route::Route;
use crate::transform::{add_optional_parameter, add_parameter, add_segment};

/// A fluent builder for [`Route`]s.
///
/// Each method applies the matching transform to the route held by the
/// builder and replaces it with the result.
///
/// ```rust
/// use typed_route::RouteBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = RouteBuilder::new()
///     .segment("manage")
///     .segment("users")
///     .parameter("id")
///     .segment("edit")
///     .parameter("field")
///     .optional_parameter("redirect")
///     .optional_parameter("hash")
///     .build();
///
/// assert_eq!(route.template(), "/manage/users/:id/edit/:field/:redirect?/:hash?");
/// assert_eq!(
///     route.fill_all([Some("5"), Some("password"), None, Some("element-hash")])?,
///     "/manage/users/5/edit/password/element-hash"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct RouteBuilder {
    route: Route,
}

impl RouteBuilder {
    /// Creates a builder holding an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that extends an existing route.
    ///
    /// The given route is not modified.
    pub fn from_route(route: &Route) -> Self {
        RouteBuilder {
            route: route.clone(),
        }
    }

    /// Appends a literal segment.
    pub fn segment(mut self, name: impl Into<String>) -> Self {
        self.route = add_segment(name)(&self.route);
        self
    }

    /// Appends a required parameter.
    pub fn parameter(mut self, name: impl Into<String>) -> Self {
        self.route = add_parameter(name)(&self.route);
        self
    }

    /// Appends an optional parameter.
    pub fn optional_parameter(mut self, name: impl Into<String>) -> Self {
        self.route = add_optional_parameter(name)(&self.route);
        self
    }

    /// Returns the route built so far.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Consumes the builder, returning the route.
    pub fn build(self) -> Route {
        self.route
    }
}

impl From<Route> for RouteBuilder {
    fn from(route: Route) -> Self {
        RouteBuilder { route }
    }
}
