//! Type descriptors for runtime type checking.

use std::fmt;

/// Type descriptor for a [`Value`](crate::Value).
///
/// Native functions check their arguments against these and report
/// [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch) on failure.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// String type.
    String,
    /// Vector type with the given element type.
    Vec(Box<Type>),
    /// Ordered map type with the given key and value types.
    Map(Box<Type>, Box<Type>),
    /// Any type (accepts any value).
    Any,
}

impl Type {
    /// Creates a vector type with the given element type.
    #[must_use]
    pub fn vec(element: Type) -> Self {
        Self::Vec(Box::new(element))
    }

    /// Creates a map type with the given key and value types.
    #[must_use]
    pub fn map(key: Type, value: Type) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks if a value type is accepted by this type.
    ///
    /// `Any` accepts everything. Collections whose element type is `Any`
    /// (the type reported for runtime values) are accepted by any collection
    /// type of the same kind.
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        match (self, value_type) {
            (Self::Any, _)
            | (Self::Nil, Self::Nil)
            | (Self::Bool, Self::Bool)
            | (Self::Int, Self::Int)
            | (Self::String, Self::String) => true,
            (Self::Vec(expected), Self::Vec(actual)) => {
                actual.is_any() || expected.accepts(actual)
            }
            (Self::Map(ek, ev), Self::Map(ak, av)) => {
                (ak.is_any() && av.is_any()) || (ek.accepts(ak) && ev.accepts(av))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::String => write!(f, "string"),
            Self::Vec(elem) => write!(f, "vec<{elem}>"),
            Self::Map(k, v) => write!(f, "map<{k}, {v}>"),
            Self::Any => write!(f, "any"),
        }
    }
}
