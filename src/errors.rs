use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathErrorType {
    TypeMismatch,
}

/// A structural failure raised while resolving a sub-document path against a
/// tree. `segment` is the zero-based offset of the offending path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    pub error: PathErrorType,
    pub msg: String,
    pub segment: usize,
}

impl PathError {
    pub fn new(error: PathErrorType, msg: String, segment: usize) -> Self {
        Self {
            error,
            msg,
            segment,
        }
    }

    pub fn type_mismatch(msg: String, segment: usize) -> Self {
        Self {
            error: PathErrorType::TypeMismatch,
            msg,
            segment,
        }
    }
}

impl std::error::Error for PathError {}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            PathErrorType::TypeMismatch => {
                write!(f, "type mismatch: {} (segment {})", self.msg, self.segment)
            }
        }
    }
}
