//! Method registry for the conversion routines under test.
//!
//! The registry is assembled explicitly by [`build_registry`] from the
//! `describe()` functions of the method modules, then sorted by name so that
//! reports come out in a reproducible order.

/// Signature of a conversion routine: append the decimal text of the value to
/// the caller's buffer.
pub type DtoaFn = fn(f64, &mut String);

/// Name of the zero-work baseline method. It is timed but never verified.
pub const NULL_METHOD: &str = "null";

/// A conversion routine under test.
#[derive(Clone, Copy, Debug)]
pub struct Method {
    /// Identity of the method, used for ordering and report labels
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Documented upper bound on the produced text length
    pub max_len: usize,
    pub convert: DtoaFn,
}

impl Method {
    /// A fresh buffer sized for this method's longest output.
    pub fn buffer(&self) -> String {
        String::with_capacity(self.max_len)
    }

    /// Clear `buffer` and convert `value` into it.
    #[inline(always)]
    pub fn convert_into<'b>(&self, value: f64, buffer: &'b mut String) -> &'b str {
        buffer.clear();
        (self.convert)(value, buffer);
        buffer.as_str()
    }

    pub fn is_null(&self) -> bool {
        self.name == NULL_METHOD
    }
}

/// Ordered collection of methods. Duplicate names are kept as distinct entries.
#[derive(Clone, Debug, Default)]
pub struct MethodRegistry {
    methods: Vec<Method>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Stable lexicographic sort by name.
    pub fn sort_by_name(&mut self) {
        self.methods.sort_by(|a, b| a.name.cmp(b.name));
    }

    pub fn all(&self) -> &[Method] {
        &self.methods
    }

    /// First method with the given name
    pub fn find(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Every method with the given name, in registry order
    pub fn filter_by_name(&self, name: &str) -> Vec<Method> {
        self.methods
            .iter()
            .filter(|m| m.name == name)
            .copied()
            .collect()
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.methods.iter().map(|m| m.name).collect()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl FromIterator<Method> for MethodRegistry {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        Self {
            methods: iter.into_iter().collect(),
        }
    }
}

/// Build the default registry with every available method, sorted by name.
pub fn build_registry() -> MethodRegistry {
    let mut registry: MethodRegistry = crate::methods::describe_all().into_iter().collect();
    registry.sort_by_name();
    registry
}
