use std::{fmt, mem, slice};

/// A single named value, consisting of a parameter name and its value.
#[derive(PartialEq, Eq, Default, Copy, Clone)]
struct Param<'k, 'v> {
    key: &'k str,
    value: &'v str,
}

impl<'k, 'v> Param<'k, 'v> {
    const EMPTY: Param<'static, 'static> = Param { key: "", value: "" };
}

/// A list of parameter values, keyed by parameter name.
///
/// Used to fill a route by name instead of by position. Parameters that are
/// not present in the list are treated as absent.
///
/// ```rust
/// use typed_route::{Params, RouteBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = RouteBuilder::new()
///     .segment("users")
///     .parameter("id")
///     .optional_parameter("tab")
///     .build();
///
/// let mut params = Params::new();
/// params.insert("id", "5");
///
/// assert_eq!(route.fill_params(&params)?, "/users/5");
///
/// params.insert("tab", "profile");
/// assert_eq!(route.fill_params(&params)?, "/users/5/profile");
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Clone)]
pub struct Params<'k, 'v> {
    kind: ParamsKind<'k, 'v>,
}

// Most routes have a small number of parameters, so we can avoid
// heap allocations in the common case.
const SMALL: usize = 3;

// A list of values, optimized to avoid allocations when possible.
#[derive(PartialEq, Eq, Clone)]
enum ParamsKind<'k, 'v> {
    Small([Param<'k, 'v>; SMALL], usize),
    Large(Vec<Param<'k, 'v>>),
}

impl<'k, 'v> Params<'k, 'v> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            kind: ParamsKind::Small([Param::EMPTY; SMALL], 0),
        }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        match self.kind {
            ParamsKind::Small(_, len) => len,
            ParamsKind::Large(ref vec) => vec.len(),
        }
    }

    /// Returns `true` if there are no values in the list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value registered under the given parameter name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.as_slice()
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value)
    }

    /// Returns an iterator over the names and values in insertion order.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter::new(self)
    }

    /// Sets the value for a parameter, replacing any previous value.
    pub fn insert(&mut self, key: &'k str, value: &'v str) {
        if let Some(param) = self.as_mut_slice().iter_mut().find(|p| p.key == key) {
            param.value = value;
            return;
        }

        self.push(Param { key, value });
    }

    /// Removes the value for a parameter, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Option<&'v str> {
        let index = self.as_slice().iter().position(|p| p.key == key)?;

        match &mut self.kind {
            ParamsKind::Small(arr, len) => {
                let removed = arr[index].value;
                arr[index..*len].rotate_left(1);
                *len -= 1;
                Some(removed)
            }
            ParamsKind::Large(vec) => Some(vec.remove(index).value),
        }
    }

    fn push(&mut self, param: Param<'k, 'v>) {
        #[cold]
        fn drain_to_vec<T: Default>(len: usize, elem: T, arr: &mut [T; SMALL]) -> Vec<T> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        match &mut self.kind {
            ParamsKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = ParamsKind::Large(drain_to_vec(*len, param, arr));
                    return;
                }

                arr[*len] = param;
                *len += 1;
            }
            ParamsKind::Large(vec) => vec.push(param),
        }
    }

    fn as_slice(&self) -> &[Param<'k, 'v>] {
        match &self.kind {
            ParamsKind::Small(arr, len) => &arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [Param<'k, 'v>] {
        match &mut self.kind {
            ParamsKind::Small(arr, len) => &mut arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }
}

impl Default for Params<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'k, 'v> FromIterator<(&'k str, &'v str)> for Params<'k, 'v> {
    fn from_iter<I: IntoIterator<Item = (&'k str, &'v str)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<'k, 'v> Extend<(&'k str, &'v str)> for Params<'k, 'v> {
    fn extend<I: IntoIterator<Item = (&'k str, &'v str)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// An iterator over the names and values in a [`Params`] list.
pub struct ParamsIter<'ps, 'k, 'v> {
    inner: slice::Iter<'ps, Param<'k, 'v>>,
}

impl<'ps, 'k, 'v> ParamsIter<'ps, 'k, 'v> {
    fn new(params: &'ps Params<'k, 'v>) -> Self {
        Self {
            inner: params.as_slice().iter(),
        }
    }
}

impl<'ps, 'k, 'v> Iterator for ParamsIter<'ps, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| (p.key, p.value))
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
