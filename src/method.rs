use crate::constants::method;
use crate::util::normalize_upper;
use std::borrow::Cow;
use std::fmt;

/// Methods that never change server state.
pub const READ_METHODS: [&str; 3] = [method::GET, method::HEAD, method::OPTIONS];

/// Methods that create, replace, modify or remove resources.
pub const WRITE_METHODS: [&str; 4] = [method::POST, method::PUT, method::PATCH, method::DELETE];

/// Classification of an HTTP method token.
///
/// The read and write sets are disjoint and their union is the set of valid
/// methods, so every token falls into exactly one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodClass {
    Read,
    Write,
    Unknown,
}

impl MethodClass {
    pub fn is_read(self) -> bool {
        matches!(self, Self::Read)
    }

    pub fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }

    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for MethodClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Unknown => "unknown",
        })
    }
}

/// Classifies `method`, ignoring ASCII case.
///
/// Total over all strings: empty, padded or non-ASCII input is
/// [`MethodClass::Unknown`]. Callers deciding access must treat `Unknown` as a
/// rejection rather than falling back to read or write handling.
pub fn classify(method: &str) -> MethodClass {
    if READ_METHODS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(method))
    {
        MethodClass::Read
    } else if WRITE_METHODS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(method))
    {
        MethodClass::Write
    } else {
        MethodClass::Unknown
    }
}

/// Returns `true` if `method` is one of `POST`, `PUT`, `PATCH` or `DELETE`.
pub fn is_write_method(method: &str) -> bool {
    classify(method).is_write()
}

/// Returns `true` if `method` is one of `GET`, `HEAD` or `OPTIONS`.
pub fn is_read_method(method: &str) -> bool {
    classify(method).is_read()
}

/// Returns `true` if `method` is either a read or a write method.
pub fn is_valid_method(method: &str) -> bool {
    classify(method).is_valid()
}

/// Uppercases the ASCII letters of `method`, borrowing when nothing changes.
pub fn normalize_method(method: &str) -> Cow<'_, str> {
    normalize_upper(method)
}

#[cfg(test)]
#[path = "method_test.rs"]
mod method_test;
