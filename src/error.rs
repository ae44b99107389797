use std::fmt;

/// Represents errors that can occur when filling a route with values.
///
/// Every variant is a usage error: the caller supplied values that do not
/// line up with the parameters the route declares. Omitting an optional
/// parameter is never an error.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FillError {
    /// A required parameter was given the absent value.
    MissingValue {
        /// The name of the required parameter.
        name: String,
    },
    /// More values were supplied than the route has parameters.
    TooManyValues {
        /// The number of parameters the route declares.
        expected: usize,
        /// The number of values that were supplied.
        got: usize,
    },
    /// Fewer values were supplied than the route has parameters.
    NotEnoughValues {
        /// The number of parameters the route declares.
        expected: usize,
        /// The number of values that were supplied.
        got: usize,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { name } => {
                write!(f, "required parameter `{}` was not given a value", name)
            }
            Self::TooManyValues { expected, got } => write!(
                f,
                "too many values: route has {} parameter(s) but {} were supplied",
                expected, got
            ),
            Self::NotEnoughValues { expected, got } => write!(
                f,
                "not enough values: route has {} parameter(s) but {} were supplied",
                expected, got
            ),
        }
    }
}

impl std::error::Error for FillError {}

impl FillError {
    pub(crate) fn missing(name: &str) -> Self {
        FillError::MissingValue {
            name: name.to_owned(),
        }
    }
}
