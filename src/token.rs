use core::fmt;

/// A single segment of a sub-document path, as produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A property lookup, like `foo` and `bar` in `foo.bar`.
    Property { name: Box<str> },
    /// An array element lookup, like `[1]` in `foo[1]`.
    Index { index: usize },
}

impl PathSegment {
    pub fn property(name: &str) -> Self {
        PathSegment::Property {
            name: name.to_string().into_boxed_str(),
        }
    }

    pub fn index(index: usize) -> Self {
        PathSegment::Index { index }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Property { name } => write!(f, "'{}'", *name),
            PathSegment::Index { index } => write!(f, "[{}]", index),
        }
    }
}
