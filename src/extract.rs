//! Typed multi-field projection out of a parsed JSON document.
//!
//! [`FieldSet`] is implemented for tuples of deserializable types up to
//! arity 12, so a call site names its fields once and receives the
//! converted values back in the same order:
//!
//! ```
//! use confpick::FieldSet;
//! use serde_json::json;
//!
//! let doc = json!({"age": 42, "name": "Beeblebrox"});
//! let (age, name) = <(i64, String)>::extract_from(&doc, &["age", "name"])?;
//! assert_eq!((age, name.as_str()), (42, "Beeblebrox"));
//! # Ok::<(), confpick::ExtractError>(())
//! ```
//!
//! Conversion itself is delegated to [`serde_json::from_value`], so any
//! `Deserialize` type works as a tuple element, including sequences, maps
//! and derived structs.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ExtractError;

/// Converts one top-level field of `document` to `T`.
///
/// Lookup uses object-key semantics: a document whose root is not an
/// object has no top-level keys, so every lookup reports the field as
/// missing.
fn convert<T: DeserializeOwned>(document: &Value, field: &str) -> Result<T, ExtractError> {
    let value = document
        .get(field)
        .ok_or_else(|| ExtractError::KeyNotFound {
            field: field.to_owned(),
        })?;

    serde_json::from_value(value.clone()).map_err(|err| ExtractError::TypeMismatch {
        field: field.to_owned(),
        message: err.to_string(),
    })
}

/// An ordered set of typed values extractable from a document in one call.
///
/// Implemented for tuples `(T1,)` through `(T1, ..., T12)` where every
/// element is deserializable. Fields are converted strictly left to right
/// and the first failure wins.
pub trait FieldSet: Sized {
    /// Number of fields this set expects.
    const ARITY: usize;

    /// Extracts and converts `fields` from `document`, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ArityMismatch`] when `fields.len()` differs
    /// from [`Self::ARITY`], [`ExtractError::KeyNotFound`] when a field is
    /// absent from the top level, and [`ExtractError::TypeMismatch`] when
    /// a value does not convert to its requested type.
    fn extract_from(document: &Value, fields: &[&str]) -> Result<Self, ExtractError>;
}

macro_rules! impl_field_set {
    ($arity:literal => $($ty:ident @ $idx:tt),+) => {
        impl<$($ty),+> FieldSet for ($($ty,)+)
        where
            $($ty: DeserializeOwned,)+
        {
            const ARITY: usize = $arity;

            fn extract_from(document: &Value, fields: &[&str]) -> Result<Self, ExtractError> {
                if fields.len() != $arity {
                    return Err(ExtractError::ArityMismatch {
                        expected: $arity,
                        actual: fields.len(),
                    });
                }
                Ok(($(convert::<$ty>(document, fields[$idx])?,)+))
            }
        }
    };
}

impl_field_set!(1 => A @ 0);
impl_field_set!(2 => A @ 0, B @ 1);
impl_field_set!(3 => A @ 0, B @ 1, C @ 2);
impl_field_set!(4 => A @ 0, B @ 1, C @ 2, D @ 3);
impl_field_set!(5 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4);
impl_field_set!(6 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5);
impl_field_set!(7 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6);
impl_field_set!(8 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7);
impl_field_set!(9 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, I @ 8);
impl_field_set!(10 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, I @ 8, J @ 9);
impl_field_set!(11 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, I @ 8, J @ 9, K @ 10);
impl_field_set!(12 => A @ 0, B @ 1, C @ 2, D @ 3, E @ 4, F @ 5, G @ 6, H @ 7, I @ 8, J @ 9, K @ 10, L @ 11);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_field() {
        let doc = json!({"port": 8080});
        let (port,) = <(u16,)>::extract_from(&doc, &["port"]).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn request_order_wins_over_document_order() {
        let doc = json!({"name": "Beeblebrox", "age": 42});
        let (age, name) = <(i64, String)>::extract_from(&doc, &["age", "name"]).unwrap();
        assert_eq!(age, 42);
        assert_eq!(name, "Beeblebrox");
    }

    #[test]
    fn missing_key_is_reported_by_name() {
        let doc = json!({"present": 1});
        let err = <(i64,)>::extract_from(&doc, &["absent"]).unwrap_err();
        match err {
            ExtractError::KeyNotFound { field } => assert_eq!(field, "absent"),
            other => panic!("expected KeyNotFound, got {other:?}"),
        }
    }

    #[test]
    fn string_value_does_not_convert_to_integer() {
        let doc = json!({"name": "abc"});
        let err = <(i64,)>::extract_from(&doc, &["name"]).unwrap_err();
        match err {
            ExtractError::TypeMismatch { field, message } => {
                assert_eq!(field, "name");
                assert!(message.contains("invalid type"), "unexpected: {message}");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn arity_mismatch_is_loud() {
        let doc = json!({"a": 1, "b": 2});
        let err = <(i64, i64)>::extract_from(&doc, &["a"]).unwrap_err();
        match err {
            ExtractError::ArityMismatch { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected ArityMismatch, got {other:?}"),
        }
    }

    #[test]
    fn leftmost_failure_wins() {
        let doc = json!({"good": 1});
        // Both fields are broken; the first one requested is the one reported.
        let err = <(i64, i64)>::extract_from(&doc, &["missing", "also_missing"]).unwrap_err();
        match err {
            ExtractError::KeyNotFound { field } => assert_eq!(field, "missing"),
            other => panic!("expected KeyNotFound, got {other:?}"),
        }
    }

    #[test]
    fn non_object_document_has_no_keys() {
        let doc = json!([1, 2, 3]);
        let err = <(i64,)>::extract_from(&doc, &["0"]).unwrap_err();
        assert!(matches!(err, ExtractError::KeyNotFound { .. }));
    }

    #[test]
    fn compound_element_types_go_through_serde() {
        let doc = json!({"hosts": ["a", "b"], "retries": 3});
        let (hosts, retries) =
            <(Vec<String>, u32)>::extract_from(&doc, &["hosts", "retries"]).unwrap();
        assert_eq!(hosts, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(retries, 3);
    }

    #[test]
    fn maximum_arity() {
        let doc = json!({
            "f0": 0, "f1": 1, "f2": 2, "f3": 3, "f4": 4, "f5": 5,
            "f6": 6, "f7": 7, "f8": 8, "f9": 9, "f10": 10, "f11": 11,
        });
        let values = <(i64, i64, i64, i64, i64, i64, i64, i64, i64, i64, i64, i64)>::extract_from(
            &doc,
            &[
                "f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11",
            ],
        )
        .unwrap();
        assert_eq!(values.0, 0);
        assert_eq!(values.11, 11);
    }
}
