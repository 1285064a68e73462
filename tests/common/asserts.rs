#![allow(dead_code)]

use restful_request::{MethodClass, classify, is_read_method, is_valid_method, is_write_method};

/// Asserts `method` has `expected` class and that every predicate agrees.
pub fn assert_classification(method: &str, expected: MethodClass) {
    assert_eq!(classify(method), expected, "classify({method:?})");
    assert_eq!(
        is_read_method(method),
        expected == MethodClass::Read,
        "is_read_method({method:?})"
    );
    assert_eq!(
        is_write_method(method),
        expected == MethodClass::Write,
        "is_write_method({method:?})"
    );
    assert_eq!(
        is_valid_method(method),
        expected != MethodClass::Unknown,
        "is_valid_method({method:?})"
    );
}
