use crate::component::ParamKind;
use crate::error::FillError;

use std::fmt;
use std::sync::Arc;

type FillFn = dyn Fn(Option<&str>) -> Result<Filler, FillError> + Send + Sync;

/// A curried value-filling function for a route.
///
/// A filler is either a finished path, or a function of one value that
/// returns another filler. Values are supplied in *reverse* declaration
/// order: the most recently declared parameter is filled first.
///
/// ```rust
/// use typed_route::RouteBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = RouteBuilder::new()
///     .segment("users")
///     .parameter("id")
///     .optional_parameter("tab")
///     .build();
///
/// // `tab` was declared last, so it is filled first.
/// let path = route.filler().with("settings")?.with(42)?.into_string()?;
/// assert_eq!(path, "/users/42/settings");
///
/// let path = route.filler().skip()?.with(42)?.into_string()?;
/// assert_eq!(path, "/users/42");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub enum Filler {
    /// No parameters remain, the path is complete.
    Terminal(String),
    /// At least one parameter is still waiting for a value.
    Pending(Pending),
}

/// A filler that still expects at least one value.
#[derive(Clone)]
pub struct Pending {
    name: Arc<str>,
    kind: ParamKind,
    arity: usize,
    call: Arc<FillFn>,
}

impl Pending {
    /// The name of the parameter that the next value fills.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the next value may be absent.
    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// The number of values still expected, including the next one.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl Filler {
    /// Returns the number of values this filler still expects.
    pub fn arity(&self) -> usize {
        match self {
            Filler::Terminal(_) => 0,
            Filler::Pending(pending) => pending.arity,
        }
    }

    /// Supplies the next value, `None` being the absent value.
    ///
    /// Absent values are only accepted by optional parameters, whose
    /// fragment is then left out of the path.
    pub fn call(&self, value: Option<&str>) -> Result<Filler, FillError> {
        match self {
            Filler::Terminal(path) => {
                debug!("value supplied to completed path `{}`", path);
                Err(FillError::TooManyValues {
                    expected: 0,
                    got: 1,
                })
            }
            Filler::Pending(pending) => (pending.call)(value).map_err(|err| {
                debug!("failed to fill `{}`: {}", pending.name, err);
                err
            }),
        }
    }

    /// Supplies a present value for the next parameter.
    pub fn with(&self, value: impl fmt::Display) -> Result<Filler, FillError> {
        self.call(Some(&value.to_string()))
    }

    /// Supplies the absent value for the next parameter.
    pub fn skip(&self) -> Result<Filler, FillError> {
        self.call(None)
    }

    /// Returns the finished path, if no parameters remain.
    pub fn as_terminal(&self) -> Option<&str> {
        match self {
            Filler::Terminal(path) => Some(path),
            Filler::Pending(_) => None,
        }
    }

    /// Converts this filler into the finished path.
    pub fn into_string(self) -> Result<String, FillError> {
        match self {
            Filler::Terminal(path) => Ok(path),
            Filler::Pending(pending) => Err(FillError::NotEnoughValues {
                expected: pending.arity,
                got: 0,
            }),
        }
    }

    // Appends `suffix` to every path this filler eventually produces.
    pub(crate) fn append(self, suffix: &str) -> Filler {
        match self {
            Filler::Terminal(mut path) => {
                path.push_str(suffix);
                Filler::Terminal(path)
            }
            Filler::Pending(pending) => {
                let suffix: Arc<str> = Arc::from(suffix);
                let inner = pending.call;

                Filler::Pending(Pending {
                    name: pending.name,
                    kind: pending.kind,
                    arity: pending.arity,
                    call: Arc::new(move |value: Option<&str>| {
                        inner(value).map(|next| next.append(&suffix))
                    }),
                })
            }
        }
    }

    // Adds a parameter as the outermost call. When its value is present, the
    // fragment is appended to whatever the inner filler produces; when absent,
    // the inner filler is handed back untouched so the remaining values can
    // still be supplied in order.
    pub(crate) fn wrap(self, name: &str, kind: ParamKind) -> Filler {
        let name: Arc<str> = Arc::from(name);
        let arity = self.arity() + 1;
        let inner = self;
        let slot = name.clone();

        let call = move |value: Option<&str>| match value {
            Some(value) => Ok(inner.clone().append(&format!("/{}", value))),
            None => match kind {
                ParamKind::Optional => Ok(inner.clone()),
                ParamKind::Required => Err(FillError::missing(&slot)),
            },
        };

        Filler::Pending(Pending {
            name,
            kind,
            arity,
            call: Arc::new(call),
        })
    }
}

impl fmt::Debug for Filler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filler::Terminal(path) => f.debug_tuple("Terminal").field(path).finish(),
            Filler::Pending(pending) => fmt::Debug::fmt(pending, f),
        }
    }
}

impl fmt::Debug for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("arity", &self.arity)
            .finish()
    }
}
