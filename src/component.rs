use std::fmt;

/// Whether a parameter must be given a value when filling a route.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParamKind {
    /// The parameter is always interpolated.
    Required,
    /// The parameter is skipped entirely when its value is absent.
    Optional,
}

/// A single piece of a route template.
///
/// Components render with their leading separator:
///
/// ```ignore
///  Component            Template
///  Literal("users")     /users
///  Required("id")       /:id
///  Optional("tab")      /:tab?
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Component {
    /// A literal path segment, rendered verbatim.
    Literal(String),
    /// A named parameter that must be filled.
    Required(String),
    /// A named parameter that may be omitted.
    Optional(String),
}

impl Component {
    /// Returns the segment text or parameter name.
    pub fn name(&self) -> &str {
        match self {
            Component::Literal(name) | Component::Required(name) | Component::Optional(name) => {
                name
            }
        }
    }

    /// Returns the parameter kind, or `None` for literal segments.
    pub fn kind(&self) -> Option<ParamKind> {
        match self {
            Component::Literal(_) => None,
            Component::Required(_) => Some(ParamKind::Required),
            Component::Optional(_) => Some(ParamKind::Optional),
        }
    }

    /// Returns `true` if this component consumes a fill value.
    pub fn is_parameter(&self) -> bool {
        self.kind().is_some()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Literal(name) => write!(f, "/{}", name),
            Component::Required(name) => write!(f, "/:{}", name),
            Component::Optional(name) => write!(f, "/:{}?", name),
        }
    }
}
