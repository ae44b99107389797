use crate::component::{Component, ParamKind};
use crate::error::FillError;
use crate::fill::Filler;
use crate::params::Params;

use std::fmt;
use std::sync::Arc;

/// An immutable route template paired with its value filler.
///
/// Routes are extended with the [transforms](crate::add_segment) or with a
/// [`RouteBuilder`](crate::RouteBuilder). Extending a route never modifies
/// it; the original remains valid and can be extended independently.
/// Cloning is cheap.
///
/// ```rust
/// use typed_route::{add_parameter, add_segment, Route};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let users = add_segment("users")(&Route::new());
/// let user = add_parameter("id")(&users);
///
/// assert_eq!(users.template(), "/users");
/// assert_eq!(user.template(), "/users/:id");
/// assert_eq!(user.fill_all([Some("7")])?, "/users/7");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Route {
    prefix: Arc<str>,
    template: String,
    components: Arc<[Component]>,
    filler: Filler,
}

/// Creates a route whose template starts with the given path.
///
/// The initial path is kept verbatim and consumes no values.
pub fn create_route(initial: &str) -> Route {
    Route::with_prefix(initial)
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    /// Creates a route whose template starts with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();

        Route {
            prefix: Arc::from(prefix.as_str()),
            filler: Filler::Terminal(prefix.clone()),
            template: prefix,
            components: Vec::new().into(),
        }
    }

    /// Returns the rendered template, e.g. `/users/:id/:tab?`.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the initial path the route was created with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the components added to this route, in declaration order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns the names and kinds of the route's parameters, in
    /// declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, ParamKind)> + '_ {
        self.components
            .iter()
            .filter_map(|c| c.kind().map(|kind| (c.name(), kind)))
    }

    /// Returns the number of values needed to fill this route.
    pub fn arity(&self) -> usize {
        self.filler.arity()
    }

    /// Returns `true` if the route has no parameters.
    pub fn is_static(&self) -> bool {
        self.arity() == 0
    }

    /// Returns the curried filler for this route.
    ///
    /// Values must be supplied in reverse declaration order. See [`Filler`].
    pub fn filler(&self) -> &Filler {
        &self.filler
    }

    /// Applies a transform to this route, returning the extended route.
    ///
    /// ```rust
    /// use typed_route::{add_optional_parameter, add_segment, Route};
    ///
    /// let route = Route::new()
    ///     .apply(add_segment("articles"))
    ///     .apply(add_optional_parameter("page"));
    ///
    /// assert_eq!(route.template(), "/articles/:page?");
    /// ```
    pub fn apply<T>(&self, transform: T) -> Route
    where
        T: FnOnce(&Route) -> Route,
    {
        transform(self)
    }

    /// Fills the route with one value per parameter, in declaration order.
    ///
    /// `None` omits an optional parameter. Produces the same path as the
    /// curried [`filler`](Route::filler) given the same values.
    ///
    /// ```rust
    /// use typed_route::RouteBuilder;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let route = RouteBuilder::new()
    ///     .segment("users")
    ///     .parameter("id")
    ///     .segment("edit")
    ///     .optional_parameter("field")
    ///     .build();
    ///
    /// assert_eq!(route.fill_all([Some("1"), Some("name")])?, "/users/1/edit/name");
    /// assert_eq!(route.fill_all([Some("1"), None])?, "/users/1/edit");
    /// # Ok(())
    /// # }
    /// ```
    pub fn fill_all<I, V>(&self, values: I) -> Result<String, FillError>
    where
        I: IntoIterator<Item = Option<V>>,
        V: AsRef<str>,
    {
        let expected = self.arity();
        let mut values = values.into_iter();

        let path = self.render(|_| values.next())?;

        let extra = values.count();
        if extra > 0 {
            let err = FillError::TooManyValues {
                expected,
                got: expected + extra,
            };
            debug!("failed to fill `{}`: {}", self.template, err);
            return Err(err);
        }

        Ok(path)
    }

    /// Fills the route by parameter name.
    ///
    /// Optional parameters missing from `params` are omitted, and names that
    /// the route does not declare are ignored.
    pub fn fill_params(&self, params: &Params<'_, '_>) -> Result<String, FillError> {
        self.render(|name| Some(params.get(name)))
    }

    // Walks the components in declaration order, pulling one value per
    // parameter from `next`. `next` returns `None` once values run out.
    fn render<V, F>(&self, mut next: F) -> Result<String, FillError>
    where
        V: AsRef<str>,
        F: FnMut(&str) -> Option<Option<V>>,
    {
        let expected = self.arity();
        let mut got = 0;
        let mut path = String::from(&*self.prefix);

        for component in self.components.iter() {
            let (name, kind) = match component {
                Component::Literal(segment) => {
                    path.push('/');
                    path.push_str(segment);
                    continue;
                }
                Component::Required(name) => (name.as_str(), ParamKind::Required),
                Component::Optional(name) => (name.as_str(), ParamKind::Optional),
            };

            let value = match next(name) {
                Some(value) => value,
                None => {
                    let err = FillError::NotEnoughValues { expected, got };
                    debug!("failed to fill `{}`: {}", self.template, err);
                    return Err(err);
                }
            };
            got += 1;

            match (value, kind) {
                (Some(value), _) => {
                    path.push('/');
                    path.push_str(value.as_ref());
                }
                (None, ParamKind::Optional) => {}
                (None, ParamKind::Required) => {
                    let err = FillError::missing(name);
                    debug!("failed to fill `{}`: {}", self.template, err);
                    return Err(err);
                }
            }
        }

        Ok(path)
    }

    // Returns a new route with `component` appended and the given filler.
    pub(crate) fn extend(&self, component: Component, filler: Filler) -> Route {
        let mut components = Vec::with_capacity(self.components.len() + 1);
        components.extend_from_slice(&self.components);

        let template = format!("{}{}", self.template, component);
        components.push(component);

        Route {
            prefix: self.prefix.clone(),
            template,
            components: components.into(),
            filler,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template)
            .field("components", &self.components)
            .finish()
    }
}
